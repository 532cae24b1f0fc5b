use anyhow::anyhow;
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use derive_new::new;
use kernel::mailer::Mailer;
use kernel::model::mail::Email;
use reqwest::Client;
use shared::error::{AppError, AppResult};

const GMAIL_SEND_URL: &str = "https://gmail.googleapis.com/gmail/v1/users/me/messages/send";

/// Gmail REST API 経由でメールを送信するメーラー。
/// アクセストークンは設定から渡される前提で、取得・更新はここでは行わない。
#[derive(new)]
pub struct GmailMailer {
    client: Client,
    access_token: String,
}

#[async_trait]
impl Mailer for GmailMailer {
    async fn send(&self, email: Email) -> AppResult<()> {
        // RFC 822 形式のメッセージを URL セーフな base64 にエンコードして送る
        let message_str = format!(
            "To: {}\r\nSubject: {}\r\nContent-Type: text/plain; charset=UTF-8\r\n\r\n{}",
            email.to, email.subject, email.body
        );
        let encoded_message = general_purpose::URL_SAFE_NO_PAD.encode(message_str.as_bytes());

        let res = self
            .client
            .post(GMAIL_SEND_URL)
            .bearer_auth(&self.access_token)
            .json(&serde_json::json!({ "raw": encoded_message }))
            .send()
            .await
            .map_err(|e| AppError::MailSendError(e.into()))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::MailSendError(anyhow!(
                "Gmail API returned {status}: {body}"
            )));
        }

        tracing::info!(to = %email.to, "mail sent via Gmail API");
        Ok(())
    }
}
