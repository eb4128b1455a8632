mod auth_token;
mod config;
mod error;
mod handlers;
mod middleware;
mod store;

use actix_web::{middleware as actix_middleware, web, App, HttpServer};
use std::sync::Arc;

use auth_token::TokenService;
use config::{CatalogConfig, Settings};
use middleware::auth_middleware;
use store::{BcryptScheme, BookRecord, CatalogStore, UserDirectory};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if it exists (for development)
    // Try loading from current directory first, then from server/ directory
    if dotenvy::dotenv().is_err() {
        dotenvy::from_filename("server/.env").ok();
    }

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    log::info!("Starting bookstore server...");

    let settings = Settings::from_env().unwrap_or_else(|e| {
        eprintln!("Invalid server configuration: {}", e);
        eprintln!("Hint: set TOKEN_SECRET (at least 32 bytes) in the environment or a .env file");
        std::process::exit(1);
    });

    // Catalog seed: file if present, built-in default otherwise
    let catalog_config = CatalogConfig::load_from_file(&settings.catalog_path).unwrap_or_else(|e| {
        log::warn!(
            "Failed to load catalog from '{}': {}. Falling back to the built-in seed.",
            settings.catalog_path,
            e
        );
        CatalogConfig::default()
    });

    let catalog = CatalogStore::new();
    for book in &catalog_config.books {
        catalog.insert(
            book.isbn.clone(),
            BookRecord::new(book.title.clone(), book.author.clone()),
        );
    }
    log::info!("Seeded catalog with {} books", catalog.book_count());

    let users = UserDirectory::new(Arc::new(BcryptScheme::default()));

    let tokens = TokenService::new(settings.token_secret.clone(), settings.token_ttl)
        .unwrap_or_else(|e| {
            eprintln!("Invalid TOKEN_SECRET: {}", e);
            std::process::exit(1);
        });
    log::info!(
        "Session tokens expire after {} seconds",
        settings.token_ttl.as_secs()
    );

    log::info!(
        "Starting HTTP server at {}:{}...",
        settings.host,
        settings.port
    );

    HttpServer::new(move || {
        App::new()
            // Shared state
            .app_data(web::Data::new(catalog.clone()))
            .app_data(web::Data::new(users.clone()))
            .app_data(web::Data::new(tokens.clone()))
            // Middleware
            .wrap(actix_middleware::Logger::default())
            .wrap(actix_middleware::Compress::default())
            // Protected routes (session token required)
            .service(
                web::scope("/auth")
                    .wrap(actix_middleware::from_fn(auth_middleware))
                    .service(handlers::upsert_review)
                    .service(handlers::delete_review)
                    .service(handlers::logout),
            )
            // Public routes
            .service(handlers::health_check)
            .service(handlers::register)
            .service(handlers::login)
            .service(handlers::list_books)
            .service(handlers::get_by_isbn)
            .service(handlers::get_by_author)
            .service(handlers::get_by_title)
            .service(handlers::get_reviews)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
