//! Database repositories
//!
//! The store is reached only through these traits. `main` constructs one
//! concrete store and hands it to [`crate::state::AppState`]; tests use
//! [`MemoryStore`] instead of a database.

use anyhow::Result;
use async_trait::async_trait;
use rahi_shared::{AdminCredential, Product};
use uuid::Uuid;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Input for inserting a product
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub amazon_link: Option<String>,
}

/// Administrator credential storage
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Find the administrator with exactly this username
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminCredential>>;

    /// Whether any administrator has been stored
    async fn any_exists(&self) -> Result<bool>;

    /// Insert an administrator with an already hashed password
    async fn create_admin(&self, username: &str, password_hash: &str) -> Result<AdminCredential>;
}

/// Product catalog storage
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, newest first
    async fn list(&self) -> Result<Vec<Product>>;

    async fn create(&self, input: CreateProduct) -> Result<Product>;

    /// Returns false when no product had this id
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// Store reachability probe used by the readiness endpoint
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<()>;
}
