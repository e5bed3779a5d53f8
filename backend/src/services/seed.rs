//! First-run administrator bootstrap

use crate::auth::PasswordService;
use crate::config::SeedConfig;
use crate::repositories::AdminRepository;
use anyhow::{anyhow, Result};
use rahi_shared::validation::{validate_password, validate_username};
use secrecy::ExposeSecret;
use tracing::{info, warn};

/// What the bootstrap step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Created,
    AlreadySeeded,
    NotConfigured,
}

/// Create the administrator if none exists yet
///
/// Does nothing unless both username and password are configured and
/// non-empty. The password is hashed before it reaches the store.
pub async fn seed_admin(
    admins: &dyn AdminRepository,
    passwords: PasswordService,
    seed: &SeedConfig,
) -> Result<SeedOutcome> {
    let (Some(username), Some(password)) = (&seed.admin_username, &seed.admin_password) else {
        return Ok(SeedOutcome::NotConfigured);
    };
    let password = password.expose_secret();
    if username.is_empty() || password.is_empty() {
        return Ok(SeedOutcome::NotConfigured);
    }

    validate_username(username).map_err(|e| anyhow!("Invalid seed username: {}", e))?;
    validate_password(password).map_err(|e| anyhow!("Invalid seed password: {}", e))?;

    if admins.any_exists().await? {
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let hash = passwords.hash_async(password.clone()).await?;
    let admin = admins.create_admin(username, &hash).await?;

    info!(admin_id = %admin.id, username = %admin.username, "Seeded administrator account");
    Ok(SeedOutcome::Created)
}

/// Run [`seed_admin`], logging and swallowing any failure
///
/// Startup must not fail because seeding did.
pub async fn seed_admin_best_effort(
    admins: &dyn AdminRepository,
    passwords: PasswordService,
    seed: &SeedConfig,
) -> Option<SeedOutcome> {
    match seed_admin(admins, passwords, seed).await {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            warn!(error = %e, "Administrator seeding failed; continuing startup");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::CredentialVerifier;
    use crate::repositories::MemoryStore;
    use async_trait::async_trait;
    use rahi_shared::AdminCredential;
    use secrecy::Secret;
    use std::sync::Arc;

    fn seed_config(username: Option<&str>, password: Option<&str>) -> SeedConfig {
        SeedConfig {
            admin_username: username.map(str::to_string),
            admin_password: password.map(|p| Secret::new(p.to_string())),
        }
    }

    fn passwords() -> PasswordService {
        PasswordService::new(4)
    }

    struct UnavailableStore;

    #[async_trait]
    impl AdminRepository for UnavailableStore {
        async fn find_by_username(&self, _username: &str) -> Result<Option<AdminCredential>> {
            anyhow::bail!("connection refused")
        }

        async fn any_exists(&self) -> Result<bool> {
            anyhow::bail!("connection refused")
        }

        async fn create_admin(&self, _username: &str, _hash: &str) -> Result<AdminCredential> {
            anyhow::bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn test_seeds_hashed_admin() {
        let store = Arc::new(MemoryStore::new());
        let config = seed_config(Some("admin"), Some("secret123"));

        let outcome = seed_admin(store.as_ref(), passwords(), &config).await.unwrap();
        assert_eq!(outcome, SeedOutcome::Created);

        let stored = store.find_by_username("admin").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "secret123");

        let verifier = CredentialVerifier::new(store, passwords());
        assert!(verifier.verify("admin", "secret123").await.unwrap());
    }

    #[tokio::test]
    async fn test_seeding_is_idempotent() {
        let store = MemoryStore::new();
        let config = seed_config(Some("admin"), Some("secret123"));

        seed_admin(&store, passwords(), &config).await.unwrap();
        let outcome = seed_admin(&store, passwords(), &config).await.unwrap();
        assert_eq!(outcome, SeedOutcome::AlreadySeeded);
    }

    #[tokio::test]
    async fn test_existing_admin_blocks_second_account() {
        let store = MemoryStore::new();
        seed_admin(&store, passwords(), &seed_config(Some("admin"), Some("secret123")))
            .await
            .unwrap();

        let outcome = seed_admin(&store, passwords(), &seed_config(Some("other"), Some("pw")))
            .await
            .unwrap();
        assert_eq!(outcome, SeedOutcome::AlreadySeeded);
        assert!(store.find_by_username("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unconfigured_seed_is_skipped() {
        let store = MemoryStore::new();

        for config in [
            seed_config(None, None),
            seed_config(Some("admin"), None),
            seed_config(None, Some("secret123")),
            seed_config(Some(""), Some("secret123")),
            seed_config(Some("admin"), Some("")),
        ] {
            let outcome = seed_admin(&store, passwords(), &config).await.unwrap();
            assert_eq!(outcome, SeedOutcome::NotConfigured);
        }
        assert!(!store.any_exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_username_is_an_error() {
        let store = MemoryStore::new();
        let config = seed_config(Some("has space"), Some("secret123"));

        assert!(seed_admin(&store, passwords(), &config).await.is_err());
    }

    #[tokio::test]
    async fn test_store_failure_is_swallowed() {
        let config = seed_config(Some("admin"), Some("secret123"));

        assert!(seed_admin(&UnavailableStore, passwords(), &config).await.is_err());
        assert_eq!(
            seed_admin_best_effort(&UnavailableStore, passwords(), &config).await,
            None
        );
    }
}
