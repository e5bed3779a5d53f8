//! Authorization gate
//!
//! Provides the [`AuthAdmin`] extractor. Handlers that take it only run
//! when the request carries `Authorization: Bearer <token>` with a valid,
//! unexpired admin token.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use rahi_shared::AuthError;
use tracing::debug;

/// Authenticated administrator extracted from the bearer token
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub username: String,
    pub role: String,
}

/// Pull the token out of an `Authorization` header
///
/// The value must be exactly two whitespace-separated parts, the first
/// being `Bearer` in any letter case.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        (None, _, _) => Err(AuthError::MissingToken),
        _ => Err(AuthError::MalformedHeader),
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthAdmin
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = bearer_token(&parts.headers).map_err(|e| {
            debug!(reason = %e, "Rejected authorization header");
            ApiError::from(e)
        })?;

        let claims = app_state.tokens().verify_admin_token(token)?;

        Ok(AuthAdmin {
            username: claims.sub,
            role: claims.role,
        })
    }
}
