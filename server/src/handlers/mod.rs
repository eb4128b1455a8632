pub mod auth;
pub mod catalog;
pub mod health;
pub mod reviews;

pub use auth::{login, logout, register};
pub use catalog::{get_by_author, get_by_isbn, get_by_title, get_reviews, list_books};
pub use health::health_check;
pub use reviews::{delete_review, upsert_review};
