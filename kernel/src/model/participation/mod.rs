use crate::model::id::{UserId, WebinarId};
use derive_new::new;

/// 1 ユーザーが 1 ウェビナーの 1 席を保持していることを表すレコード。
/// 生成後は不変で、(webinar_id, user_id) の組で値として比較する。
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Participation {
    pub webinar_id: WebinarId,
    pub user_id: UserId,
}
