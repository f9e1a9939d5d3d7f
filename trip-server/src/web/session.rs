//! Per-request admin sessions.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};
use tracing::{debug, warn};

use crate::auth::Session;

use super::routes::AppError;
use super::state::AppState;

/// An authenticated admin, extracted from the `Authorization: Bearer` header.
///
/// Handlers that take this extractor only run for callers the identity
/// service reports as admins.
#[derive(Debug, Clone)]
pub struct AdminSession(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = state.identity.as_ref().ok_or_else(|| AppError::Unavailable {
            message: "identity service not configured".to_string(),
        })?;

        let token = bearer_token(&parts.headers).ok_or_else(|| AppError::Unauthorized {
            message: "missing bearer token".to_string(),
        })?;

        let session = Session::new(token, identity.resolve(token).await?);

        if !session.is_admin() {
            warn!(email = %session.identity.email, "non-admin tried an admin route");
            return Err(AppError::Forbidden {
                message: "admin role required".to_string(),
            });
        }

        debug!(email = %session.identity.email, "admin session");
        Ok(AdminSession(session))
    }
}

/// The token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
