use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::id::UserId;

#[derive(Debug, new)]
pub struct CreateWebinar {
    pub organizer_id: UserId,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}
