use actix_web::http::header;
use actix_web::{test, web, App};
use std::sync::Arc;
use std::time::Duration;

use bookstore_server::auth_token::{now_ms, TokenService};
use bookstore_server::handlers;
use bookstore_server::store::{BcryptScheme, UserDirectory};

const TEST_SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

fn test_users() -> UserDirectory {
    // bcrypt's minimum cost keeps the suite fast
    UserDirectory::new(Arc::new(BcryptScheme::new(4)))
}

fn test_tokens() -> TokenService {
    TokenService::new(TEST_SECRET.to_vec(), Duration::from_secs(3600)).expect("valid service")
}

macro_rules! auth_app {
    ($users:expr, $tokens:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($users.clone()))
                .app_data(web::Data::new($tokens.clone()))
                .service(handlers::register)
                .service(handlers::login),
        )
        .await
    };
}

#[actix_web::test]
async fn test_register_success() {
    let users = test_users();
    let app = auth_app!(users, test_tokens());

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(serde_json::json!({"username": "alice", "password": "pw1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User registered successfully");
    assert!(users.exists("alice"));
}

#[actix_web::test]
async fn test_register_twice_conflicts() {
    let users = test_users();
    let app = auth_app!(users, test_tokens());

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(serde_json::json!({"username": "alice", "password": "pw1"}))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(serde_json::json!({"username": "alice", "password": "pw2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 409);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User already exists");
}

#[actix_web::test]
async fn test_register_empty_username() {
    let users = test_users();
    let app = auth_app!(users, test_tokens());

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(serde_json::json!({"username": "", "password": "pw1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_register_empty_password() {
    let users = test_users();
    let app = auth_app!(users, test_tokens());

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(serde_json::json!({"username": "alice", "password": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Username and password are required");
}

#[actix_web::test]
async fn test_register_missing_fields() {
    let users = test_users();
    let app = auth_app!(users, test_tokens());

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(serde_json::json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_login_issues_token_for_username() {
    let users = test_users();
    let tokens = test_tokens();
    users.register("alice", "pw1").unwrap();
    let app = auth_app!(users, tokens);

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(serde_json::json!({"username": "alice", "password": "pw1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());

    let set_cookie: Vec<String> = resp
        .headers()
        .get_all(header::SET_COOKIE)
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert!(
        set_cookie.iter().any(|c| c.starts_with("session_token=")),
        "login should set the session cookie, got: {:?}",
        set_cookie
    );

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User logged in successfully");

    // The token decodes back to the login username
    let token = body["token"].as_str().expect("token in login response");
    let claims = tokens.verify(token, now_ms()).expect("valid token");
    assert_eq!(claims.username, "alice");
}

#[actix_web::test]
async fn test_login_wrong_password() {
    let users = test_users();
    users.register("alice", "pw1").unwrap();
    let app = auth_app!(users, test_tokens());

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(serde_json::json!({"username": "alice", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid credentials");
}

#[actix_web::test]
async fn test_login_unknown_user() {
    let users = test_users();
    let app = auth_app!(users, test_tokens());

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(serde_json::json!({"username": "ghost", "password": "pw1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 401);
}

#[actix_web::test]
async fn test_login_missing_fields() {
    let users = test_users();
    let app = auth_app!(users, test_tokens());

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(serde_json::json!({"username": "alice"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Username and password are required");
}
