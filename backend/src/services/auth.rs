//! Administrator login

use crate::auth::{CredentialVerifier, TokenService};
use crate::error::ApiError;
use rahi_shared::{AuthError, LoginRequest, LoginResponse};
use tracing::{info, warn};

/// Authentication operations
pub struct AuthService;

impl AuthService {
    /// Exchange credentials for a bearer token
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    pub async fn login(
        credentials: &CredentialVerifier,
        tokens: &TokenService,
        req: &LoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        let valid = credentials
            .verify(&req.username, &req.password)
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            warn!(username = %req.username, "Admin login failed");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = tokens
            .issue_admin_token(&req.username)
            .map_err(ApiError::Internal)?;

        info!(username = %req.username, "Admin logged in");

        Ok(LoginResponse {
            token,
            username: req.username.clone(),
        })
    }
}
