//! In-memory store
//!
//! Implements the same repository traits as [`super::PgStore`]. Used by the
//! test suites and for running the API locally without PostgreSQL.

use super::{AdminRepository, CreateProduct, ProductRepository, StoreHealth};
use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use rahi_shared::{AdminCredential, Product};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryStore {
    admins: RwLock<HashMap<String, AdminCredential>>,
    products: RwLock<Vec<Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminRepository for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminCredential>> {
        Ok(self.admins.read().await.get(username).cloned())
    }

    async fn any_exists(&self) -> Result<bool> {
        Ok(!self.admins.read().await.is_empty())
    }

    async fn create_admin(&self, username: &str, password_hash: &str) -> Result<AdminCredential> {
        let mut admins = self.admins.write().await;
        if admins.contains_key(username) {
            bail!("admin '{}' already exists", username);
        }

        let now = Utc::now();
        let admin = AdminCredential {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        };
        admins.insert(username.to_string(), admin.clone());
        Ok(admin)
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Product>> {
        let mut products = self.products.read().await.clone();
        // Stable sort keeps insertion order reversed for equal timestamps
        products.reverse();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(products)
    }

    async fn create(&self, input: CreateProduct) -> Result<Product> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            price: input.price,
            image_url: input.image_url,
            amazon_link: input.amazon_link,
            created_at: now,
            updated_at: now,
        };
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
