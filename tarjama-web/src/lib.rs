//! HTTP front end for tarjama: translation and word-count endpoints

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
