use crate::model::id::UserId;

// パスワードはこの層ではハッシュ化も検証も行わない不透明な値として扱う
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password: String,
}
