use actix_web::{get, web, HttpResponse};

use crate::{
    error::{BookstoreError, Result},
    store::CatalogStore,
};

#[get("/")]
pub async fn list_books(catalog: web::Data<CatalogStore>) -> Result<HttpResponse> {
    let books = catalog.all();

    log::debug!("Listing full catalog ({} books)", books.len());

    Ok(HttpResponse::Ok().json(books))
}

#[get("/isbn/{isbn}")]
pub async fn get_by_isbn(
    path: web::Path<String>,
    catalog: web::Data<CatalogStore>,
) -> Result<HttpResponse> {
    let isbn = path.into_inner();

    let book = catalog
        .by_isbn(&isbn)
        .ok_or(BookstoreError::BookNotFound)?;

    Ok(HttpResponse::Ok().json(book))
}

#[get("/author/{author}")]
pub async fn get_by_author(
    path: web::Path<String>,
    catalog: web::Data<CatalogStore>,
) -> Result<HttpResponse> {
    let author = path.into_inner();

    let matches = catalog.by_author(&author);
    if matches.is_empty() {
        return Err(BookstoreError::NoBooksByAuthor);
    }

    Ok(HttpResponse::Ok().json(matches))
}

#[get("/title/{title}")]
pub async fn get_by_title(
    path: web::Path<String>,
    catalog: web::Data<CatalogStore>,
) -> Result<HttpResponse> {
    let title = path.into_inner();

    let matches = catalog.by_title(&title);
    if matches.is_empty() {
        return Err(BookstoreError::NoBooksWithTitle);
    }

    Ok(HttpResponse::Ok().json(matches))
}

#[get("/review/{isbn}")]
pub async fn get_reviews(
    path: web::Path<String>,
    catalog: web::Data<CatalogStore>,
) -> Result<HttpResponse> {
    let isbn = path.into_inner();

    // An empty review map is a valid 200 response; only a missing book
    // is an error.
    let reviews = catalog
        .reviews(&isbn)
        .ok_or(BookstoreError::BookNotFound)?;

    Ok(HttpResponse::Ok().json(reviews))
}
