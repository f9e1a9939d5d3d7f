//! Web layer for trip discovery.
//!
//! Serves the discovery page, a JSON API over the same pipeline, and an
//! admin-only catalog status endpoint.

mod dto;
mod routes;
mod session;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use session::AdminSession;
pub use state::AppState;
pub use templates::*;
