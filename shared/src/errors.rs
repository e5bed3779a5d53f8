//! Error types for the Rahi Enterprise application

use thiserror::Error;

/// Authentication error types
///
/// Callers must not leak which variant occurred to API clients: every
/// variant maps to the same 401 response.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Authorization header missing")]
    MissingToken,

    #[error("Invalid authorization header format")]
    MalformedHeader,
}
