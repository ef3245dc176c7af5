//! Authentication API integration tests
//!
//! Register, login, logout and the authorization gate, driven through the
//! full router over an in-memory store.

mod common;

use axum::http::{Method, StatusCode};
use campaign_manager::backend::store::UserStore;
use common::{empty_request, json_request, Auth, TestApp};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new();

    let response = app
        .send(json_request(
            Method::POST,
            "/api/auth/register",
            None,
            json!({"username": "alice", "email": "alice@x.com", "password": "secret1"}),
        ))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.body,
        json!({
            "message": "User created successfully",
            "user": {"id": 1, "username": "alice", "email": "alice@x.com"}
        })
    );

    let cookie = response.session_cookie_header().unwrap();
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=86400"));
    assert!(!cookie.contains("Secure"));

    let token = response.session_token().unwrap();
    let claims = app.sessions.verify(&token).unwrap();
    assert_eq!(claims.id, 1);
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.exp - claims.iat, 86400);

    let stored = app.store.find_by_email("alice@x.com").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "secret1");
    assert!(stored.password_hash.starts_with("$2"));
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new();

    for body in [
        json!({"username": "alice", "email": "alice@x.com"}),
        json!({"username": "", "email": "alice@x.com", "password": "secret1"}),
        json!({}),
    ] {
        let response = app
            .send(json_request(Method::POST, "/api/auth/register", None, body))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "All fields are required");
        assert!(response.session_cookie_header().is_none());
    }
}

#[tokio::test]
async fn test_register_duplicate_email_or_username() {
    let app = TestApp::new();
    app.register("alice", "alice@x.com", "secret1").await;

    for body in [
        json!({"username": "alice2", "email": "alice@x.com", "password": "pw"}),
        json!({"username": "alice", "email": "other@x.com", "password": "pw"}),
    ] {
        let response = app
            .send(json_request(Method::POST, "/api/auth/register", None, body))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "Email or username already in use");
        assert_eq!(response.body["status"], 400);
    }
}

#[tokio::test]
async fn test_concurrent_registrations_admit_one() {
    let app = TestApp::new();
    let body = || json!({"username": "alice", "email": "alice@x.com", "password": "secret1"});

    let (first, second) = tokio::join!(
        app.send(json_request(Method::POST, "/api/auth/register", None, body())),
        app.send(json_request(Method::POST, "/api/auth/register", None, body())),
    );

    let mut statuses = vec![first.status, second.status];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::BAD_REQUEST]);
    let loser = if first.status == StatusCode::BAD_REQUEST { &first } else { &second };
    assert_eq!(loser.body["error"], "Email or username already in use");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    app.register("alice", "alice@x.com", "secret1").await;

    let response = app
        .send(json_request(
            Method::POST,
            "/api/auth/login",
            None,
            json!({"email": "alice@x.com", "password": "secret1"}),
        ))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Logged in successfully");
    assert_eq!(
        response.body["user"],
        json!({"id": 1, "username": "alice", "email": "alice@x.com"})
    );
    assert!(response.body["user"].get("password_hash").is_none());
    assert!(response.session_token().is_some());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.register("alice", "alice@x.com", "secret1").await;

    let wrong_password = app
        .send(json_request(
            Method::POST,
            "/api/auth/login",
            None,
            json!({"email": "alice@x.com", "password": "wrong"}),
        ))
        .await;
    let unknown_email = app
        .send(json_request(
            Method::POST,
            "/api/auth/login",
            None,
            json!({"email": "nobody@x.com", "password": "secret1"}),
        ))
        .await;

    assert_eq!(wrong_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.status, unknown_email.status);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.body["error"], "Incorrect email or password");
    assert!(wrong_password.session_cookie_header().is_none());
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new();

    let response = app
        .send(json_request(
            Method::POST,
            "/api/auth/login",
            None,
            json!({"email": "alice@x.com"}),
        ))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "All fields are required");
}

#[tokio::test]
async fn test_register_login_current_user_flow() {
    let app = TestApp::new();
    app.register("alice", "alice@x.com", "secret1").await;

    let rejected = app
        .send(json_request(
            Method::POST,
            "/api/auth/login",
            None,
            json!({"email": "alice@x.com", "password": "wrong"}),
        ))
        .await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);

    let login = app
        .send(json_request(
            Method::POST,
            "/api/auth/login",
            None,
            json!({"email": "alice@x.com", "password": "secret1"}),
        ))
        .await;
    let token = login.session_token().unwrap();

    let me = app
        .send(empty_request(Method::GET, "/api/auth/user", Some(Auth::Cookie(&token))))
        .await;

    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body, json!({"user": {"id": 1, "username": "alice"}}));
}

#[tokio::test]
async fn test_current_user_without_token() {
    let app = TestApp::new();

    let response = app
        .send(empty_request(Method::GET, "/api/auth/user", None))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body,
        json!({"error": "Unauthorized - missing token", "status": 401})
    );
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let app = TestApp::new();
    let token = app.register("alice", "alice@x.com", "secret1").await;

    let sig_start = token.rfind('.').unwrap() + 1;
    let mut tampered: Vec<char> = token.chars().collect();
    let target = sig_start + 5;
    tampered[target] = if tampered[target] == 'A' { 'B' } else { 'A' };
    let tampered: String = tampered.into_iter().collect();

    let response = app
        .send(empty_request(Method::GET, "/api/auth/user", Some(Auth::Cookie(&tampered))))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized - invalid token");
}

#[tokio::test]
async fn test_token_from_other_secret_rejected() {
    let app = TestApp::new();
    app.register("alice", "alice@x.com", "secret1").await;

    let foreign = campaign_manager::backend::auth::SessionKeys::new(b"another-secret")
        .issue(1, "alice")
        .unwrap();

    let response = app
        .send(empty_request(Method::GET, "/api/auth/user", Some(Auth::Bearer(&foreign))))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized - invalid token");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new();
    app.register("alice", "alice@x.com", "secret1").await;

    let issued_at = jsonwebtoken::get_current_timestamp() - 86400 - 60;
    let expired = app.sessions.issue_at(1, "alice", issued_at).unwrap();

    let response = app
        .send(empty_request(Method::GET, "/api/auth/user", Some(Auth::Cookie(&expired))))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized - invalid token");
}

#[tokio::test]
async fn test_bearer_header_accepted() {
    let app = TestApp::new();
    let token = app.register("alice", "alice@x.com", "secret1").await;

    let response = app
        .send(empty_request(Method::GET, "/api/auth/user", Some(Auth::Bearer(&token))))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["username"], "alice");
}

#[tokio::test]
async fn test_cookie_wins_over_header() {
    let app = TestApp::new();
    let alice = app.register("alice", "alice@x.com", "secret1").await;
    let bob = app.register("bob", "bob@x.com", "secret2").await;

    let request = axum::http::Request::builder()
        .method(Method::GET)
        .uri("/api/auth/user")
        .header("cookie", format!("token={}", alice))
        .header("authorization", format!("Bearer {}", bob))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["username"], "alice");
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new();
    let token = app.register("alice", "alice@x.com", "secret1").await;

    let response = app
        .send(empty_request(Method::POST, "/api/auth/logout", Some(Auth::Cookie(&token))))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"message": "Logged out successfully"}));
    let cookie = response.session_cookie_header().unwrap();
    assert!(cookie.contains("Max-Age=0"));
    assert!(response.session_token().is_none());

    // Tokens are not revoked: a copy kept by the client still works
    let me = app
        .send(empty_request(Method::GET, "/api/auth/user", Some(Auth::Bearer(&token))))
        .await;
    assert_eq!(me.status, StatusCode::OK);
}

#[tokio::test]
async fn test_logout_without_session() {
    let app = TestApp::new();

    for _ in 0..2 {
        let response = app
            .send(empty_request(Method::POST, "/api/auth/logout", None))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.session_cookie_header().is_some());
    }
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new();

    let response = app
        .send(empty_request(Method::GET, "/api/nope", None))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({"error": "Route not found", "status": 404}));
}

#[tokio::test]
async fn test_register_wrong_typed_field() {
    let app = TestApp::new();

    let response = app
        .send(json_request(
            Method::POST,
            "/api/auth/register",
            None,
            json!({"username": "alice", "email": "alice@x.com", "password": 12345}),
        ))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({"error": "Invalid request body", "status": 400}));
    assert!(response.session_cookie_header().is_none());
}

#[tokio::test]
async fn test_login_without_body_or_content_type() {
    let app = TestApp::new();

    let response = app
        .send(empty_request(Method::POST, "/api/auth/login", None))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({"error": "All fields are required", "status": 400}));
}

#[tokio::test]
async fn test_login_with_broken_json() {
    let app = TestApp::new();

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({"error": "Invalid request body", "status": 400}));
}
