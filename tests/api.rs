use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use registry::AppRegistry;
use shared::config::{AppConfig, ServerConfig};
use tower::ServiceExt;

fn app() -> Router {
    let app_config = AppConfig {
        server: ServerConfig { port: 0 },
        mail: None,
    };
    api::route::v1::routes().with_state(AppRegistry::new(app_config))
}

fn post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn webinar_payload(seats: i32, days_until_start: i64) -> serde_json::Value {
    let start_date = Utc::now() + Duration::days(days_until_start);
    serde_json::json!({
        "organizerId": "org1",
        "title": "Webinar 1",
        "startDate": start_date.to_rfc3339(),
        "endDate": (start_date + Duration::hours(2)).to_rfc3339(),
        "seats": seats,
    })
}

fn booking_payload(user_id: &str) -> serde_json::Value {
    serde_json::json!({
        "user": {
            "id": user_id,
            "email": format!("{user_id}@example.com"),
            "password": "securepassword",
        }
    })
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check_returns_ok() {
    let response = app().oneshot(get("/api/v1/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_then_book_then_duplicate_booking_conflicts() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post("/api/v1/webinars", webinar_payload(2, 5)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    let webinar_id = created["id"].as_str().unwrap().to_owned();

    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/webinars/{webinar_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let shown = json_body(response).await;
    assert_eq!(shown["seats"], 2);
    assert_eq!(shown["organizerId"], "org1");

    let response = app
        .clone()
        .oneshot(post(
            &format!("/api/v1/webinars/{webinar_id}/seats"),
            booking_payload("user1"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let participation = json_body(response).await;
    assert_eq!(participation["webinarId"], webinar_id.as_str());
    assert_eq!(participation["userId"], "user1");

    let response = app
        .clone()
        .oneshot(post(
            &format!("/api/v1/webinars/{webinar_id}/seats"),
            booking_payload("user1"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn booking_an_unknown_webinar_returns_not_found() {
    let response = app()
        .oneshot(post(
            "/api/v1/webinars/no-such-webinar/seats",
            booking_payload("user1"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn booking_a_webinar_starting_too_soon_is_unprocessable() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post("/api/v1/webinars", webinar_payload(10, 2)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let webinar_id = json_body(response).await["id"].as_str().unwrap().to_owned();

    let response = app
        .clone()
        .oneshot(post(
            &format!("/api/v1/webinars/{webinar_id}/seats"),
            booking_payload("user1"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn creating_a_webinar_with_no_seats_is_rejected() {
    let response = app()
        .oneshot(post("/api/v1/webinars", webinar_payload(0, 5)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn creating_a_webinar_with_inverted_dates_is_rejected() {
    let start_date = Utc::now() + Duration::days(5);
    let payload = serde_json::json!({
        "organizerId": "org1",
        "title": "Webinar 1",
        "startDate": start_date.to_rfc3339(),
        "endDate": (start_date - Duration::hours(2)).to_rfc3339(),
        "seats": 10,
    });
    let response = app()
        .oneshot(post("/api/v1/webinars", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn fully_booked_webinar_returns_conflict() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post("/api/v1/webinars", webinar_payload(1, 5)))
        .await
        .unwrap();
    let webinar_id = json_body(response).await["id"].as_str().unwrap().to_owned();

    let response = app
        .clone()
        .oneshot(post(
            &format!("/api/v1/webinars/{webinar_id}/seats"),
            booking_payload("user1"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(post(
            &format!("/api/v1/webinars/{webinar_id}/seats"),
            booking_payload("user2"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
