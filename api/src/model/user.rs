use garde::Validate;
use kernel::model::{id::UserId, user::User};
use serde::Deserialize;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingUserRequest {
    #[garde(length(min = 1))]
    pub id: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

impl From<BookingUserRequest> for User {
    fn from(value: BookingUserRequest) -> Self {
        let BookingUserRequest {
            id,
            email,
            password,
        } = value;
        Self {
            id: UserId::from(id),
            email,
            password,
        }
    }
}
