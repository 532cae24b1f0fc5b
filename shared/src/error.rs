use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Webinar with ID {0} not found")]
    WebinarNotFound(String),
    #[error("Webinar with ID {0} starts within the minimum lead time")]
    WebinarDatesTooSoon(String),
    #[error("User with ID {0} is already registered")]
    UserAlreadyRegistered(String),
    #[error("No seats available for webinar with ID {0}")]
    WebinarFullyBooked(String),
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("メールを送信できませんでした。")]
    MailSendError(#[source] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            AppError::WebinarNotFound(_) => StatusCode::NOT_FOUND,
            AppError::WebinarDatesTooSoon(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UserAlreadyRegistered(_) | AppError::WebinarFullyBooked(_) => {
                StatusCode::CONFLICT
            }
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::MailSendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "unexpected error happened"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}
