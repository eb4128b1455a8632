use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{BookstoreError, Result};

/// Catalog seed: the books loaded into the store at process start.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub books: Vec<BookSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookSeed {
    pub isbn: String,
    pub title: String,
    pub author: String,
}

impl CatalogConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| BookstoreError::Config(format!("Failed to read catalog file: {}", e)))?;

        let config: CatalogConfig = toml::from_str(&content)
            .map_err(|e| BookstoreError::Config(format!("Failed to parse catalog file: {}", e)))?;

        Ok(config)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let seed = |isbn: &str, title: &str, author: &str| BookSeed {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
        };

        Self {
            books: vec![
                seed("1", "Things Fall Apart", "Chinua Achebe"),
                seed("2", "Fairy tales", "Hans Christian Andersen"),
                seed("3", "The Divine Comedy", "Dante Alighieri"),
                seed("4", "The Epic Of Gilgamesh", "Unknown"),
                seed("5", "The Book Of Job", "Unknown"),
                seed("6", "One Thousand and One Nights", "Unknown"),
                seed("7", "Njál's Saga", "Unknown"),
                seed("8", "Pride and Prejudice", "Jane Austen"),
                seed("9", "Le Père Goriot", "Honoré de Balzac"),
                seed("10", "Eugénie Grandet", "Honoré de Balzac"),
            ],
        }
    }
}

/// Runtime settings read from the environment (with `.env` support in
/// `main`). The token secret has no default: tokens signed with a
/// guessable secret are forgeable, so the process refuses to start
/// without one.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub token_secret: Vec<u8>,
    pub token_ttl: Duration,
    pub catalog_path: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        let token_secret = std::env::var("TOKEN_SECRET")
            .map_err(|_| BookstoreError::Config("TOKEN_SECRET is not set".to_string()))?
            .into_bytes();

        let token_ttl_secs: u64 = std::env::var("TOKEN_TTL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3600);

        let catalog_path = std::env::var("CATALOG_PATH")
            .unwrap_or_else(|_| "server/config/catalog.toml".to_string());

        Ok(Self {
            host,
            port,
            token_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
            catalog_path,
        })
    }
}
