//! PostgreSQL-backed store

use super::{AdminRepository, CreateProduct, ProductRepository, StoreHealth};
use crate::db;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rahi_shared::{AdminCredential, Product};
use sqlx::PgPool;
use uuid::Uuid;

/// Admin record from database
#[derive(Debug, Clone, sqlx::FromRow)]
struct AdminRecord {
    id: Uuid,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AdminRecord> for AdminCredential {
    fn from(record: AdminRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            password_hash: record.password_hash,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Product record from database
#[derive(Debug, Clone, sqlx::FromRow)]
struct ProductRecord {
    id: Uuid,
    name: String,
    description: Option<String>,
    price: f64,
    image_url: Option<String>,
    amazon_link: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
            image_url: record.image_url,
            amazon_link: record.amazon_link,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Store over a PostgreSQL pool
///
/// `PgPool` is internally Arc'd, so cloning the store is cheap.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PgStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminCredential>> {
        let admin = sqlx::query_as::<_, AdminRecord>(
            r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM admins
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin.map(Into::into))
    }

    async fn any_exists(&self) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM admins)
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn create_admin(&self, username: &str, password_hash: &str) -> Result<AdminCredential> {
        let admin = sqlx::query_as::<_, AdminRecord>(
            r#"
            INSERT INTO admins (id, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(admin.into())
    }
}

#[async_trait]
impl ProductRepository for PgStore {
    async fn list(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT id, name, description, price, image_url, amazon_link, created_at, updated_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products.into_iter().map(Into::into).collect())
    }

    async fn create(&self, input: CreateProduct) -> Result<Product> {
        let product = sqlx::query_as::<_, ProductRecord>(
            r#"
            INSERT INTO products (id, name, description, price, image_url, amazon_link)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, price, image_url, amazon_link, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(input.name)
        .bind(input.description)
        .bind(input.price)
        .bind(input.image_url)
        .bind(input.amazon_link)
        .fetch_one(&self.pool)
        .await?;

        Ok(product.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl StoreHealth for PgStore {
    async fn ping(&self) -> Result<()> {
        db::health_check(&self.pool).await
    }
}
