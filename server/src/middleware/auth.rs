use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    web, HttpMessage,
};

use crate::auth_token::{now_ms, TokenService};
use crate::error::BookstoreError;

/// Cookie set at login carrying the signed session token.
pub const SESSION_COOKIE: &str = "session_token";

/// Identity of the caller, decoded from a verified session token.
/// Inserted into request extensions so protected handlers can take it
/// via `web::ReqData<AuthenticatedUser>`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}

pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let token = req
        .cookie(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .or_else(|| bearer_token(&req))
        .ok_or(BookstoreError::Unauthorized)?;

    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| BookstoreError::Internal("Token service not available".to_string()))?;

    let claims = tokens.verify(&token, now_ms()).map_err(|err| {
        log::warn!("Rejected session token: {}", err);
        BookstoreError::Unauthorized
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        username: claims.username,
    });

    next.call(req).await
}

fn bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
}
