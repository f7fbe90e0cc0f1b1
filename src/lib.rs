pub mod app;
pub mod domain;
pub mod error;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::catalog_service::MovieCatalog;
pub use app::credentials::{CredentialCheck, DirectoryCredentialCheck};
pub use app::user_directory::UserDirectory;
pub use domain::{Movie, SortKey, User};
pub use error::CatalogError;
pub use infra::stores::Stores;
pub use storage::{InMemoryMovieStore, InMemoryUserStore, MovieStore, UserStore};
