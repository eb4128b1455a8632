use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum BookstoreError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Review is required")]
    MissingReview,

    #[error("User already exists")]
    DuplicateUser,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authentication required")]
    Unauthorized,

    #[error("Book not found")]
    BookNotFound,

    #[error("No books found by this author")]
    NoBooksByAuthor,

    #[error("No books found with this title")]
    NoBooksWithTitle,

    #[error("Review not found")]
    ReviewNotFound,

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl ResponseError for BookstoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            BookstoreError::MissingCredentials => StatusCode::BAD_REQUEST,
            BookstoreError::MissingReview => StatusCode::BAD_REQUEST,
            BookstoreError::DuplicateUser => StatusCode::CONFLICT,
            BookstoreError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            BookstoreError::Unauthorized => StatusCode::UNAUTHORIZED,
            BookstoreError::BookNotFound => StatusCode::NOT_FOUND,
            BookstoreError::NoBooksByAuthor => StatusCode::NOT_FOUND,
            BookstoreError::NoBooksWithTitle => StatusCode::NOT_FOUND,
            BookstoreError::ReviewNotFound => StatusCode::NOT_FOUND,
            BookstoreError::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookstoreError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookstoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_response = ErrorResponse {
            message: self.to_string(),
        };

        HttpResponse::build(status).json(error_response)
    }
}

pub type Result<T> = std::result::Result<T, BookstoreError>;
