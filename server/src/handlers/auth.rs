use actix_web::{cookie::Cookie, post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::{
    auth_token::{now_ms, TokenService},
    error::{BookstoreError, Result},
    middleware::SESSION_COOKIE,
    store::UserDirectory,
};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[post("/register")]
pub async fn register(
    req: web::Json<RegisterRequest>,
    users: web::Data<UserDirectory>,
) -> Result<HttpResponse> {
    let username = req.username.trim();
    if username.is_empty() || req.password.is_empty() {
        return Err(BookstoreError::MissingCredentials);
    }

    users.register(username, &req.password)?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User registered successfully")))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[post("/login")]
pub async fn login(
    req: web::Json<LoginRequest>,
    users: web::Data<UserDirectory>,
    tokens: web::Data<TokenService>,
) -> Result<HttpResponse> {
    let username = req.username.trim();
    if username.is_empty() || req.password.is_empty() {
        return Err(BookstoreError::MissingCredentials);
    }

    log::info!("Login attempt for user: {}", username);

    if !users.verify(username, &req.password)? {
        log::warn!("Failed login attempt for user: {}", username);
        return Err(BookstoreError::InvalidCredentials);
    }

    users.record_login(username);

    let token = tokens
        .issue_for(username, now_ms())
        .map_err(|err| BookstoreError::Internal(format!("Failed to issue session token: {err}")))?;

    log::info!("Successful login for user: {}", username);

    let cookie = Cookie::build(SESSION_COOKIE, token.clone())
        .path("/")
        .http_only(true)
        .same_site(actix_web::cookie::SameSite::Strict)
        .max_age(actix_web::cookie::time::Duration::seconds(
            tokens.ttl().as_secs() as i64,
        ))
        .finish();

    let response = LoginResponse {
        message: "User logged in successfully".to_string(),
        token,
    };

    Ok(HttpResponse::Ok().cookie(cookie).json(response))
}

#[post("/logout")]
pub async fn logout() -> Result<HttpResponse> {
    // Tokens are stateless; clearing the cookie is all there is to do.
    let cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .max_age(actix_web::cookie::time::Duration::seconds(0))
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(MessageResponse::new("Logout successful")))
}
