//! Booking pipeline integration tests
//!
//! Drives the full axum app (fresh embedded DB per test) through
//! tower's oneshot, the same way a frontend would call it.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use hall_server::auth::JwtConfig;
use hall_server::core::{Config, ServerState, build_app};
use hall_server::db::repository::{BookingRepository, FeedbackRepository};
use hall_server::notify::{BookingNotifier, NoopNotifier, NotifyError};
use shared::models::Booking;

const ADMIN_PASSWORD: &str = "sup3r-secret";

fn test_config(work_dir: &std::path::Path) -> Config {
    Config {
        work_dir: work_dir.to_string_lossy().into_owned(),
        http_port: 0,
        jwt: JwtConfig {
            secret: "integration-test-secret-0123456789abcdef".to_string(),
            expiration_minutes: 60,
            issuer: "hall-server".to_string(),
            audience: "hall-admin".to_string(),
        },
        environment: "development".to_string(),
        notify_email: String::new(),
        notify_timeout_ms: 1000,
        smtp: None,
        admin_username: "admin".to_string(),
        admin_password: Some(ADMIN_PASSWORD.to_string()),
    }
}

async fn setup(
    notifier: Arc<dyn BookingNotifier>,
) -> (Router, ServerState, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = test_config(tmp.path());
    let state = ServerState::initialize_with_notifier(&config, notifier)
        .await
        .unwrap();
    let app = build_app(&state);
    (app, state, tmp)
}

async fn read_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn booking_form(guests: &str, days: &str) -> String {
    format!(
        "name=Aditi&phone=9876543210&email=aditi%40example.com\
         &guests={}&date=2026-11-21&days={}&food_items=Paneer%20Tikka",
        urlencoding::encode(guests),
        urlencoding::encode(days),
    )
}

fn post_form(uri: &str, body: String) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

// ========== Booking submission ==========

#[tokio::test]
async fn valid_booking_persists_normalized_values() {
    let (app, state, _tmp) = setup(Arc::new(NoopNotifier)).await;

    let response = app
        .oneshot(post_form("/api/book_hall", booking_form("3", "2 Days")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["code"], "E0000");
    assert_eq!(body["message"], "Booking submitted successfully!");

    let rows = BookingRepository::new(state.get_db())
        .find_all()
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].guests, 3);
    assert_eq!(rows[0].days, 2);
    assert_eq!(rows[0].food_items, "Paneer Tikka");
    assert!(rows[0].account.is_none());
}

#[tokio::test]
async fn unparsable_guests_rejects_and_echoes_form() {
    let (app, state, _tmp) = setup(Arc::new(NoopNotifier)).await;

    let response = app
        .oneshot(post_form("/api/book_hall", booking_form("many", "2")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(
        body["message"],
        "Please provide valid numeric values for guests and days."
    );
    // The raw values come back so the form can be redisplayed unchanged
    assert_eq!(body["data"]["guests"], "many");
    assert_eq!(body["data"]["name"], "Aditi");
    assert_eq!(body["data"]["days"], "2");

    let rows = BookingRepository::new(state.get_db())
        .find_all()
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn negative_guests_are_rejected() {
    let (app, state, _tmp) = setup(Arc::new(NoopNotifier)).await;

    let response = app
        .oneshot(post_form("/api/book_hall", booking_form("-3", "2")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let rows = BookingRepository::new(state.get_db())
        .find_all()
        .await
        .unwrap();
    assert!(rows.is_empty());
}

// ========== Notification failure isolation ==========

struct FailingNotifier {
    attempts: AtomicUsize,
}

#[async_trait]
impl BookingNotifier for FailingNotifier {
    async fn booking_created(&self, _booking: &Booking) -> Result<(), NotifyError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(NotifyError::Transport("connection refused".to_string()))
    }
}

#[tokio::test]
async fn notification_failure_does_not_affect_booking() {
    let notifier = Arc::new(FailingNotifier {
        attempts: AtomicUsize::new(0),
    });
    let (app, state, _tmp) = setup(notifier.clone()).await;

    let response = app
        .oneshot(post_form("/api/book_hall", booking_form("3", "2 Days")))
        .await
        .unwrap();

    // The send was attempted and failed, yet the submitter sees success
    assert_eq!(notifier.attempts.load(Ordering::SeqCst), 1);
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["code"], "E0000");
    assert_eq!(body["message"], "Booking submitted successfully!");

    let rows = BookingRepository::new(state.get_db())
        .find_all()
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

// ========== Cart prefill ==========

#[tokio::test]
async fn cart_query_parameter_prefills_the_form() {
    let (app, _state, _tmp) = setup(Arc::new(NoopNotifier)).await;

    // encodeURIComponent('[{"name":"Pizza","items":["Cheese","Veg"]}]')
    let uri = "/api/book_hall?cart=%5B%7B%22name%22%3A%22Pizza%22%2C%22items%22%3A%5B%22Cheese%22%2C%22Veg%22%5D%7D%5D";
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["data"]["food_items"], "Pizza: Cheese, Veg");
    assert_eq!(body["data"]["food_cart"][0]["name"], "Pizza");
}

#[tokio::test]
async fn missing_cart_means_no_prefill() {
    let (app, _state, _tmp) = setup(Arc::new(NoopNotifier)).await;

    let response = app
        .oneshot(
            Request::get("/api/book_hall")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["data"]["food_items"], "");
    assert_eq!(body["data"]["food_cart"], serde_json::json!([]));
}

// ========== Feedback ==========

fn feedback_multipart(rating: &str) -> Request<Body> {
    let boundary = "X-HALL-TEST-BOUNDARY";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nAditi\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"experience\"\r\n\r\nLovely venue\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"rating\"\r\n\r\n{rating}\r\n\
         --{b}--\r\n",
        b = boundary,
        rating = rating,
    );
    Request::post("/api/feedback")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn star_symbol_ratings_map_to_integers() {
    let (app, state, _tmp) = setup(Arc::new(NoopNotifier)).await;

    let response = app.oneshot(feedback_multipart("⭐⭐⭐")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let rows = FeedbackRepository::new(state.get_db())
        .find_all()
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].rating, 3);
    assert!(rows[0].image.is_none());
}

#[tokio::test]
async fn unrecognized_rating_defaults_to_five() {
    let (app, state, _tmp) = setup(Arc::new(NoopNotifier)).await;

    let response = app.oneshot(feedback_multipart("garbage")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let rows = FeedbackRepository::new(state.get_db())
        .find_all()
        .await
        .unwrap();
    assert_eq!(rows[0].rating, 5);
}

// ========== Admin access & login ==========

#[tokio::test]
async fn booking_records_require_a_token() {
    let (app, _state, _tmp) = setup(Arc::new(NoopNotifier)).await;

    let response = app
        .clone()
        .oneshot(Request::get("/api/bookings").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Login, then retry with the bearer token
    let login = Request::post("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(format!(
            r#"{{"username":"admin","password":"{ADMIN_PASSWORD}"}}"#
        )))
        .unwrap();
    let response = app.clone().oneshot(login).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let token = body["token"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::get("/api/bookings")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let (app, _state, _tmp) = setup(Arc::new(NoopNotifier)).await;

    let wrong_password = Request::post("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"username":"admin","password":"wrong"}"#,
        ))
        .unwrap();
    let unknown_user = Request::post("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"username":"nobody","password":"wrong"}"#,
        ))
        .unwrap();

    let a = app.clone().oneshot(wrong_password).await.unwrap();
    let b = app.oneshot(unknown_user).await.unwrap();

    assert_eq!(a.status(), StatusCode::BAD_REQUEST);
    assert_eq!(b.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(a).await, read_json(b).await);
}

#[tokio::test]
async fn logged_in_booking_links_the_account() {
    let (app, state, _tmp) = setup(Arc::new(NoopNotifier)).await;

    let login = Request::post("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(format!(
            r#"{{"username":"admin","password":"{ADMIN_PASSWORD}"}}"#
        )))
        .unwrap();
    let response = app.clone().oneshot(login).await.unwrap();
    let token = read_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    let mut request = post_form("/api/book_hall", booking_form("3", "2"));
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let rows = BookingRepository::new(state.get_db())
        .find_all()
        .await
        .unwrap();
    assert!(rows[0].account.is_some());
}
