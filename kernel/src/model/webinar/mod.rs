use crate::model::id::{UserId, WebinarId};
use chrono::{DateTime, Duration, Utc};

pub mod event;

/// 開始日時までこの日数を切ったウェビナーは新規予約を受け付けない
pub const MINIMUM_LEAD_TIME_DAYS: i64 = 3;

// seats > 0 と start_date < end_date は呼び出し側の責務であり、
// ここではチェックしない
#[derive(Debug, Clone)]
pub struct Webinar {
    pub id: WebinarId,
    pub organizer_id: UserId,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

impl Webinar {
    /// 評価時点から開始日時まで最低リードタイム未満かを判定する
    pub fn is_too_soon(&self, now: DateTime<Utc>) -> bool {
        self.start_date - now < Duration::days(MINIMUM_LEAD_TIME_DAYS)
    }
}
