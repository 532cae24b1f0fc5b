use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::WebinarId,
    webinar::{event::CreateWebinar, Webinar},
};
use kernel::usecase::book_seat::BookSeatRequest as BookSeatCommand;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::webinar::{
    BookSeatRequest, CreateWebinarRequest, ParticipationResponse, WebinarCreatedResponse,
    WebinarResponse,
};

pub async fn register_webinar(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateWebinarRequest>,
) -> AppResult<(StatusCode, Json<WebinarCreatedResponse>)> {
    req.validate(&())?;
    if req.start_date >= req.end_date {
        return Err(AppError::UnprocessableEntity(
            "startDate must be before endDate".into(),
        ));
    }

    let CreateWebinar {
        organizer_id,
        title,
        start_date,
        end_date,
        seats,
    } = req.into();
    let webinar = Webinar {
        id: WebinarId::new(),
        organizer_id,
        title,
        start_date,
        end_date,
        seats,
    };
    let webinar_id = webinar.id.clone();

    registry.webinar_repository().create(webinar).await?;

    Ok((
        StatusCode::CREATED,
        Json(WebinarCreatedResponse { id: webinar_id }),
    ))
}

pub async fn show_webinar(
    Path(webinar_id): Path<WebinarId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<WebinarResponse>> {
    registry
        .webinar_repository()
        .find_by_id(&webinar_id)
        .await
        .and_then(|w| match w {
            Some(w) => Ok(Json(w.into())),
            None => Err(AppError::WebinarNotFound(webinar_id.to_string())),
        })
}

pub async fn book_seat(
    Path(webinar_id): Path<WebinarId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<BookSeatRequest>,
) -> AppResult<(StatusCode, Json<ParticipationResponse>)> {
    req.validate(&())?;

    registry
        .book_seat()
        .execute(BookSeatCommand::new(webinar_id, req.user.into()))
        .await
        .map(|participation| (StatusCode::CREATED, Json(participation.into())))
}
