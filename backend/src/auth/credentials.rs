//! Administrator credential verification

use super::PasswordService;
use crate::repositories::AdminRepository;
use anyhow::Result;
use std::sync::Arc;

/// Checks submitted credentials against the stored administrator record
///
/// Unknown usernames and wrong passwords both yield `Ok(false)` after the
/// same amount of bcrypt work. Errors are reserved for store failures.
#[derive(Clone)]
pub struct CredentialVerifier {
    admins: Arc<dyn AdminRepository>,
    placeholder_hash: Arc<str>,
}

impl CredentialVerifier {
    pub fn new(admins: Arc<dyn AdminRepository>, passwords: PasswordService) -> Self {
        Self {
            admins,
            placeholder_hash: passwords.placeholder_hash().into(),
        }
    }

    /// Username match is exact and case-sensitive
    pub async fn verify(&self, username: &str, password: &str) -> Result<bool> {
        let Some(admin) = self.admins.find_by_username(username).await? else {
            PasswordService::verify_async(password.to_string(), self.placeholder_hash.to_string())
                .await?;
            return Ok(false);
        };

        PasswordService::verify_async(password.to_string(), admin.password_hash).await
    }
}
