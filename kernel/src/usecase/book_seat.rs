use std::sync::Arc;

use chrono::Utc;
use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::{
    mailer::Mailer,
    model::{id::WebinarId, mail::Email, participation::Participation, user::User},
    repository::{
        participation::ParticipationRepository, user::UserRepository, webinar::WebinarRepository,
    },
};

#[derive(Debug, new)]
pub struct BookSeatRequest {
    pub webinar_id: WebinarId,
    pub user: User,
}

/// 座席予約ユースケース。
///
/// ウェビナーの存在確認、リードタイム、二重予約、定員の各ルールを
/// この順に検査し、どれかに違反した時点で即座に中断する。
/// 検査をすべて通過した場合のみ参加レコードを永続化し、
/// その後に主催者へ通知メールを送る。通知の失敗はロールバックしない
/// （永続化済みの参加レコードはそのまま残る）。
#[derive(new)]
pub struct BookSeat {
    participation_repository: Arc<dyn ParticipationRepository>,
    user_repository: Arc<dyn UserRepository>,
    webinar_repository: Arc<dyn WebinarRepository>,
    mailer: Arc<dyn Mailer>,
}

impl BookSeat {
    pub async fn execute(&self, request: BookSeatRequest) -> AppResult<Participation> {
        let BookSeatRequest { webinar_id, user } = request;

        // ① ウェビナーの存在確認
        let webinar = self
            .webinar_repository
            .find_by_id(&webinar_id)
            .await?
            .ok_or_else(|| AppError::WebinarNotFound(webinar_id.to_string()))?;

        // ② 開始日時までのリードタイム確認
        if webinar.is_too_soon(Utc::now()) {
            return Err(AppError::WebinarDatesTooSoon(webinar_id.to_string()));
        }

        // ③ ユーザーが未登録なら初回予約時にそのまま登録する
        let known_user = self.user_repository.find_by_id(&user.id).await?;
        if known_user.is_none() {
            self.user_repository.save(user.clone()).await?;
        }

        // ④ 同一ウェビナーへの二重予約の確認
        let participations = self
            .participation_repository
            .find_by_webinar_id(&webinar_id)
            .await?;
        let is_already_registered = participations.iter().any(|p| p.user_id == user.id);
        if is_already_registered {
            return Err(AppError::UserAlreadyRegistered(user.id.to_string()));
        }

        // ⑤ 残席の確認
        let remaining_seats = webinar.seats as i64 - participations.len() as i64;
        if remaining_seats <= 0 {
            return Err(AppError::WebinarFullyBooked(webinar_id.to_string()));
        }

        // ⑥ 参加レコードの永続化
        let participation = Participation::new(webinar_id.clone(), user.id.clone());
        self.participation_repository
            .save(participation.clone())
            .await?;

        // ⑦ 主催者への通知。永続化が成功した後にのみ送る
        self.mailer
            .send(Email::new(
                webinar.organizer_id,
                "New participant registered".into(),
                format!(
                    "User {} has registered for webinar {}",
                    user.id, webinar_id
                ),
            ))
            .await?;

        Ok(participation)
    }
}
