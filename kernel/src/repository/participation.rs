use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::WebinarId, participation::Participation};

#[async_trait]
pub trait ParticipationRepository: Send + Sync {
    // ウェビナー ID に紐づく参加レコードの一覧を取得する（順序は不定）
    async fn find_by_webinar_id(&self, webinar_id: &WebinarId) -> AppResult<Vec<Participation>>;
    // 参加レコードを保存する。(webinar_id, user_id) の重複チェックは
    // ストレージ層では行わず、ユースケース側の契約とする
    async fn save(&self, participation: Participation) -> AppResult<()>;
}
