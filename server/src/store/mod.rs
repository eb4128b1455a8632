pub mod catalog;
pub mod credentials;
pub mod directory;
pub mod models;

pub use catalog::CatalogStore;
pub use credentials::{BcryptScheme, CredentialScheme};
pub use directory::UserDirectory;
pub use models::{BookRecord, UserRecord};
