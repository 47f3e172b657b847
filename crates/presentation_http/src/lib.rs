//! Formosa Weather HTTP presentation layer
//!
//! Routes, handlers, and error mapping for the forecast proxy API.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ServerConfig};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
