use tokio::sync::RwLock;

use async_trait::async_trait;
use kernel::model::{id::WebinarId, participation::Participation};
use kernel::repository::participation::ParticipationRepository;
use shared::error::AppResult;

/// (webinar_id, user_id) の一意性はユースケース側の契約であり、
/// ここでは同じ組でも素通しで追記する。
pub struct InMemoryParticipationRepository {
    participations: RwLock<Vec<Participation>>,
}

impl InMemoryParticipationRepository {
    pub fn new(participations: Vec<Participation>) -> Self {
        Self {
            participations: RwLock::new(participations),
        }
    }
}

impl Default for InMemoryParticipationRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ParticipationRepository for InMemoryParticipationRepository {
    async fn find_by_webinar_id(&self, webinar_id: &WebinarId) -> AppResult<Vec<Participation>> {
        let participations = self.participations.read().await;
        Ok(participations
            .iter()
            .filter(|p| &p.webinar_id == webinar_id)
            .cloned()
            .collect())
    }

    async fn save(&self, participation: Participation) -> AppResult<()> {
        let mut participations = self.participations.write().await;
        participations.push(participation);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::id::UserId;

    #[tokio::test]
    async fn find_by_webinar_id_filters_on_webinar() {
        let repository = InMemoryParticipationRepository::default();
        repository
            .save(Participation::new(
                WebinarId::raw("webinar1"),
                UserId::raw("user1"),
            ))
            .await
            .unwrap();
        repository
            .save(Participation::new(
                WebinarId::raw("webinar2"),
                UserId::raw("user1"),
            ))
            .await
            .unwrap();

        let found = repository
            .find_by_webinar_id(&WebinarId::raw("webinar1"))
            .await
            .unwrap();
        assert_eq!(
            found,
            vec![Participation::new(
                WebinarId::raw("webinar1"),
                UserId::raw("user1"),
            )]
        );
    }

    #[tokio::test]
    async fn save_accepts_duplicate_pairs() {
        let repository = InMemoryParticipationRepository::default();
        let participation = Participation::new(WebinarId::raw("webinar1"), UserId::raw("user1"));
        repository.save(participation.clone()).await.unwrap();
        repository.save(participation.clone()).await.unwrap();

        let found = repository
            .find_by_webinar_id(&WebinarId::raw("webinar1"))
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
    }
}
