//! Authentication module
//!
//! Provides bcrypt credential verification, HS256 access tokens and the
//! bearer-token extractor that guards admin routes.

mod credentials;
mod jwt;
mod middleware;
mod password;

pub use credentials::CredentialVerifier;
pub use jwt::{AdminClaims, ClaimsMap, TokenService};
pub use middleware::{bearer_token, AuthAdmin};
pub use password::PasswordService;
