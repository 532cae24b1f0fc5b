use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::UserId, user::User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    // ユーザー ID からユーザーを取得する
    async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>>;
    // ユーザーを保存する（一意性はここでは保証しない）
    async fn save(&self, user: User) -> AppResult<()>;
}
