use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::models::BookRecord;
use crate::error::{BookstoreError, Result};

/// In-memory book catalog, keyed by ISBN. Constructed once at startup and
/// shared across workers; reviews are the only mutable field and every
/// mutation happens under the map's shard lock.
#[derive(Clone)]
pub struct CatalogStore {
    books: Arc<DashMap<String, BookRecord>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            books: Arc::new(DashMap::new()),
        }
    }

    pub fn insert(&self, isbn: String, record: BookRecord) {
        self.books.insert(isbn, record);
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Snapshot of the full catalog. BTreeMap keeps the JSON output in a
    /// stable key order.
    pub fn all(&self) -> BTreeMap<String, BookRecord> {
        self.books
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn by_isbn(&self, isbn: &str) -> Option<BookRecord> {
        self.books.get(isbn).map(|entry| entry.value().clone())
    }

    /// Exact-match author search. An empty result is a valid value here;
    /// the handler layer decides whether that is a 404.
    pub fn by_author(&self, author: &str) -> BTreeMap<String, BookRecord> {
        self.books
            .iter()
            .filter(|entry| entry.value().author == author)
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn by_title(&self, title: &str) -> BTreeMap<String, BookRecord> {
        self.books
            .iter()
            .filter(|entry| entry.value().title == title)
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn reviews(&self, isbn: &str) -> Option<BTreeMap<String, String>> {
        self.books.get(isbn).map(|entry| entry.value().reviews.clone())
    }

    /// Inserts or overwrites the caller's review for a book.
    pub fn set_review(&self, isbn: &str, username: &str, review: &str) -> Result<()> {
        let mut book = self
            .books
            .get_mut(isbn)
            .ok_or(BookstoreError::BookNotFound)?;

        if review.trim().is_empty() {
            return Err(BookstoreError::MissingReview);
        }

        book.reviews
            .insert(username.to_string(), review.to_string());
        Ok(())
    }

    pub fn delete_review(&self, isbn: &str, username: &str) -> Result<()> {
        let mut book = self
            .books
            .get_mut(isbn)
            .ok_or(BookstoreError::BookNotFound)?;

        book.reviews
            .remove(username)
            .ok_or(BookstoreError::ReviewNotFound)?;
        Ok(())
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
