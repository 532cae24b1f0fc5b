use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::WebinarId, webinar::Webinar};

#[async_trait]
pub trait WebinarRepository: Send + Sync {
    // ウェビナー ID からウェビナーを取得する
    async fn find_by_id(&self, webinar_id: &WebinarId) -> AppResult<Option<Webinar>>;
    // ウェビナーを登録する（予約ユースケースからは呼ばれない）
    async fn create(&self, webinar: Webinar) -> AppResult<()>;
}
