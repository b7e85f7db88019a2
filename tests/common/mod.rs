//! Shared fixtures for router integration tests
//!
//! [`MockSupabase`] wraps a [`wiremock::MockServer`] standing in for the identity
//! and data provider; [`send`] drives the real router with `oneshot`.

#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use lessonhub::{provider::SupabaseClient, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ANON_KEY: &str = "anon-key";
pub const TABLE: &str = "lesson_plans";
pub const TABLE_PATH: &str = "/rest/v1/lesson_plans";
pub const USER_ID: &str = "8d0f7c1e-0000-4000-8000-000000000001";
pub const USER_TOKEN: &str = "Bearer user-token";

pub struct MockSupabase {
    pub server: MockServer,
}

impl MockSupabase {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Router wired to this mock provider
    pub fn app(&self) -> Router {
        let provider =
            SupabaseClient::new(&self.url(), ANON_KEY, TABLE, Duration::from_secs(5)).unwrap();
        lessonhub::app(AppState { provider })
    }

    /// `GET /auth/v1/user` resolves [`USER_TOKEN`] to [`USER_ID`]; any other token is rejected.
    pub async fn mock_current_user(&self) {
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("authorization", USER_TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": USER_ID,
                "email": "teacher@example.com",
                "role": "authenticated",
            })))
            .mount(&self.server)
            .await;

        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": 401,
                "error_code": "bad_jwt",
                "msg": "invalid JWT: unable to parse or verify signature",
            })))
            .with_priority(10)
            .mount(&self.server)
            .await;
    }

    /// Fail the test if any table endpoint is called
    pub async fn expect_no_table_calls(&self) {
        Mock::given(path(TABLE_PATH))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Fail the test if any identity endpoint other than user resolution is called
    pub async fn expect_no_auth_calls(&self) {
        Mock::given(path("/auth/v1/signup"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
        Mock::given(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Requests the mock received on `path`, as JSON bodies
    pub async fn bodies_sent_to(&self, target: &str) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == target)
            .map(|request| serde_json::from_slice(&request.body).unwrap_or(Value::Null))
            .collect()
    }
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    }
}
