use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::mail::Email;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Email) -> AppResult<()>;
}
