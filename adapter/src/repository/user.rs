use tokio::sync::RwLock;

use async_trait::async_trait;
use kernel::model::{id::UserId, user::User};
use kernel::repository::user::UserRepository;
use shared::error::AppResult;

/// Vec に追記していくだけのインメモリ実装。
/// ID の一意性はここでは保証しない。
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.id == user_id).cloned())
    }

    async fn save(&self, user: User) -> AppResult<()> {
        let mut users = self.users.write().await;
        users.push(user);
        Ok(())
    }
}
