//! Session and role lookup against an external identity service.
//!
//! Nothing about who is an admin lives in this server: every admin request
//! carries a bearer token, which is resolved to an [`Identity`] by the
//! identity service.

mod client;
mod error;
mod session;

pub use client::{IdentityClient, IdentityConfig};
pub use error::IdentityError;
pub use session::{Identity, Role, Session};
