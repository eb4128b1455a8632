use actix_web::{delete, put, web, HttpResponse};
use serde::Deserialize;

use super::auth::MessageResponse;
use crate::{error::Result, middleware::AuthenticatedUser, store::CatalogStore};

#[derive(Debug, Deserialize)]
pub struct ReviewQuery {
    #[serde(default)]
    pub review: Option<String>,
}

#[put("/review/{isbn}")]
pub async fn upsert_review(
    path: web::Path<String>,
    query: web::Query<ReviewQuery>,
    catalog: web::Data<CatalogStore>,
    user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse> {
    let isbn = path.into_inner();
    let username = &user.username;
    let review = query.review.as_deref().unwrap_or("");

    catalog.set_review(&isbn, username, review)?;

    log::info!("User {} reviewed book {}", username, isbn);

    Ok(HttpResponse::Ok().json(MessageResponse::new(
        "Review added/modified successfully",
    )))
}

#[delete("/review/{isbn}")]
pub async fn delete_review(
    path: web::Path<String>,
    catalog: web::Data<CatalogStore>,
    user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse> {
    let isbn = path.into_inner();
    let username = &user.username;

    catalog.delete_review(&isbn, username)?;

    log::info!("User {} deleted their review of book {}", username, isbn);

    Ok(HttpResponse::Ok().json(MessageResponse::new("Review deleted successfully")))
}
