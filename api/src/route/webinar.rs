use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::webinar::{book_seat, register_webinar, show_webinar};

pub fn build_webinar_routers() -> Router<AppRegistry> {
    let webinars_routers = Router::new()
        .route("/", post(register_webinar))
        .route("/:webinar_id", get(show_webinar))
        .route("/:webinar_id/seats", post(book_seat));

    Router::new().nest("/webinars", webinars_routers)
}
