use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::{
    error::Result,
    store::{CatalogStore, UserDirectory},
};

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub books: usize,
    pub registered_users: usize,
}

#[get("/health")]
pub async fn health_check(
    catalog: web::Data<CatalogStore>,
    users: web::Data<UserDirectory>,
) -> Result<HttpResponse> {
    let response = HealthCheckResponse {
        status: "healthy".to_string(),
        books: catalog.book_count(),
        registered_users: users.user_count(),
    };

    Ok(HttpResponse::Ok().json(response))
}
