use tokio::sync::RwLock;

use async_trait::async_trait;
use kernel::model::{id::WebinarId, webinar::Webinar};
use kernel::repository::webinar::WebinarRepository;
use shared::error::AppResult;

pub struct InMemoryWebinarRepository {
    webinars: RwLock<Vec<Webinar>>,
}

impl InMemoryWebinarRepository {
    pub fn new(webinars: Vec<Webinar>) -> Self {
        Self {
            webinars: RwLock::new(webinars),
        }
    }
}

impl Default for InMemoryWebinarRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn find_by_id(&self, webinar_id: &WebinarId) -> AppResult<Option<Webinar>> {
        let webinars = self.webinars.read().await;
        Ok(webinars.iter().find(|w| &w.id == webinar_id).cloned())
    }

    async fn create(&self, webinar: Webinar) -> AppResult<()> {
        let mut webinars = self.webinars.write().await;
        webinars.push(webinar);
        Ok(())
    }
}
