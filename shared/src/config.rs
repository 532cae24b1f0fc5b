use anyhow::Result;

pub struct AppConfig {
    pub server: ServerConfig,
    pub mail: Option<MailConfig>,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let server = ServerConfig {
            port: std::env::var("PORT")
                .ok()
                .map(|p| p.parse())
                .transpose()?
                .unwrap_or(8080),
        };
        // GMAIL_ACCESS_TOKEN が未設定の場合はインメモリのメーラーにフォールバックする
        let mail = std::env::var("GMAIL_ACCESS_TOKEN")
            .ok()
            .map(|access_token| MailConfig { access_token });
        Ok(Self { server, mail })
    }
}

pub struct ServerConfig {
    pub port: u16,
}

pub struct MailConfig {
    pub access_token: String,
}
