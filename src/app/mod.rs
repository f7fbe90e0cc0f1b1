pub mod catalog_service;
pub mod credentials;
pub mod user_directory;
