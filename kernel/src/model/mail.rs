use crate::model::id::UserId;
use derive_new::new;

/// 主催者宛て通知メール。to には宛先ユーザーの ID をそのまま入れる。
/// メールアドレスへの解決はメーラー実装側の責務とする。
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Email {
    pub to: UserId,
    pub subject: String,
    pub body: String,
}
