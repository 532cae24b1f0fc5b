use async_trait::async_trait;
use kernel::mailer::Mailer;
use kernel::model::mail::Email;
use shared::error::AppResult;
use tokio::sync::RwLock;

/// 送信したメールを記録するだけのメーラー。テストおよび
/// GMAIL_ACCESS_TOKEN 未設定時のローカル実行で使う。
#[derive(Default)]
pub struct InMemoryMailer {
    sent: RwLock<Vec<Email>>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<Email> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl Mailer for InMemoryMailer {
    async fn send(&self, email: Email) -> AppResult<()> {
        tracing::info!(to = %email.to, subject = %email.subject, "mail recorded");
        let mut sent = self.sent.write().await;
        sent.push(email);
        Ok(())
    }
}
