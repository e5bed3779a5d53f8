//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! Everything here is built once at startup and is read-only afterwards:
//! the store handles, the configuration and the pre-computed token keys.

use crate::auth::{CredentialVerifier, PasswordService, TokenService};
use crate::config::AppConfig;
use crate::repositories::{AdminRepository, ProductRepository, StoreHealth};
use secrecy::ExposeSecret;
use std::sync::Arc;

/// Shared application state
///
/// All fields are Arc'd or `Copy`, so cloning per request is O(1).
#[derive(Clone)]
pub struct AppState {
    pub admins: Arc<dyn AdminRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub store_health: Arc<dyn StoreHealth>,
    pub config: Arc<AppConfig>,
    /// Pre-initialized token service with cached keys
    pub tokens: TokenService,
    pub credentials: CredentialVerifier,
    pub passwords: PasswordService,
}

impl AppState {
    /// Create a new application state around a single store
    ///
    /// # Note
    /// This derives the signing keys from the config secret, so it should
    /// only be called once at application startup.
    pub fn new<S>(store: Arc<S>, config: AppConfig) -> Self
    where
        S: AdminRepository + ProductRepository + StoreHealth + 'static,
    {
        let tokens = TokenService::new(
            config.auth.jwt_secret.expose_secret(),
            config.auth.token_ttl_minutes,
        );
        let passwords = PasswordService::new(config.auth.bcrypt_cost);

        let admins: Arc<dyn AdminRepository> = store.clone();
        let products: Arc<dyn ProductRepository> = store.clone();
        let store_health: Arc<dyn StoreHealth> = store;

        Self {
            credentials: CredentialVerifier::new(admins.clone(), passwords),
            admins,
            products,
            store_health,
            config: Arc::new(config),
            tokens,
            passwords,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the token service
    #[inline]
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    #[inline]
    pub fn credentials(&self) -> &CredentialVerifier {
        &self.credentials
    }

    #[inline]
    pub fn products(&self) -> &dyn ProductRepository {
        self.products.as_ref()
    }
}
