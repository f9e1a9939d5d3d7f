//! Per-request session context.

use serde::{Deserialize, Serialize};

/// What the identity service says a user may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// Any role this server does not know about is treated as a customer.
    #[serde(other)]
    Customer,
}

/// A verified user, as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Identity {
    pub email: String,
    pub role: Role,
}

/// An authenticated caller.
///
/// Built for one request and handed to the handlers that need it; nothing
/// about a session outlives the request.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    pub identity: Identity,
}

impl Session {
    pub fn new(token: impl Into<String>, identity: Identity) -> Self {
        Self {
            token: token.into(),
            identity,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_admin(&self) -> bool {
        self.identity.role == Role::Admin
    }
}
