//! Common test utilities and helpers
//!
//! Builds the full router over an in-memory store, plus small helpers for
//! driving it with `tower::ServiceExt::oneshot` and reading cookies back.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use campaign_manager::backend::auth::{PasswordHasher, SessionKeys};
use campaign_manager::backend::routes::create_router;
use campaign_manager::backend::server::AppState;
use campaign_manager::backend::store::MemoryStore;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// Application under test
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub sessions: SessionKeys,
}

impl TestApp {
    /// Router over a fresh in-memory store, with the cheapest bcrypt cost
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let sessions = SessionKeys::new(TEST_SECRET);
        let state = AppState::new(store.clone(), sessions.clone(), PasswordHasher::new(4), false);

        Self {
            router: create_router(state),
            store,
            sessions,
        }
    }

    /// Send a request and collect the response
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        TestResponse::read(response).await
    }

    /// Register a user and return the session token from the cookie
    pub async fn register(&self, username: &str, email: &str, password: &str) -> String {
        let response = self
            .send(json_request(
                Method::POST,
                "/api/auth/register",
                None,
                serde_json::json!({"username": username, "email": email, "password": password}),
            ))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.session_token().expect("register sets the token cookie")
    }
}

/// Collected response
pub struct TestResponse {
    pub status: StatusCode,
    pub set_cookies: Vec<String>,
    pub body: Value,
}

impl TestResponse {
    async fn read(response: Response<Body>) -> Self {
        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_string)
            .collect();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        Self {
            status,
            set_cookies,
            body,
        }
    }

    /// Raw `Set-Cookie` header for the session cookie
    pub fn session_cookie_header(&self) -> Option<&str> {
        self.set_cookies
            .iter()
            .map(String::as_str)
            .find(|cookie| cookie.starts_with("token="))
    }

    /// Value of the session cookie, if one was set with a non-empty value
    pub fn session_token(&self) -> Option<String> {
        let header = self.session_cookie_header()?;
        let value = header["token=".len()..].split(';').next()?;
        (!value.is_empty()).then(|| value.to_string())
    }
}

/// How a request carries its session token
#[derive(Clone, Copy)]
pub enum Auth<'a> {
    Cookie(&'a str),
    Bearer(&'a str),
}

fn builder(method: Method, uri: &str, auth: Option<Auth<'_>>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match auth {
        Some(Auth::Cookie(token)) => builder.header(header::COOKIE, format!("token={}", token)),
        Some(Auth::Bearer(token)) => {
            builder.header(header::AUTHORIZATION, format!("Bearer {}", token))
        }
        None => builder,
    }
}

/// Request with a JSON body
pub fn json_request(method: Method, uri: &str, auth: Option<Auth<'_>>, body: Value) -> Request<Body> {
    builder(method, uri, auth)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Request without a body
pub fn empty_request(method: Method, uri: &str, auth: Option<Auth<'_>>) -> Request<Body> {
    builder(method, uri, auth).body(Body::empty()).unwrap()
}
