pub mod router;
pub mod types;
pub mod handlers {
    pub mod common;
    pub mod greeting;
    pub mod health;
    pub mod movies;
    pub mod users;
}
pub mod middleware {
    pub mod auth;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
