//! Health check endpoints
//!
//! - /health - Basic health check
//! - /health/ready - Readiness probe (pings the store)
//! - /health/live - Liveness probe (always returns OK if server is running)

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

/// Individual health checks
#[derive(Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Status of an individual check
#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn response(status: &str, checks: Option<HealthChecks>) -> HealthResponse {
    HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks,
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(response("healthy", None))
}

/// Returns 503 when the store cannot be reached
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match state.store_health.ping().await {
        Ok(()) => {
            let database = CheckStatus {
                status: "healthy".to_string(),
                message: None,
            };
            Ok(Json(response("ready", Some(HealthChecks { database }))))
        }
        Err(e) => {
            let database = CheckStatus {
                status: "unhealthy".to_string(),
                message: Some(e.to_string()),
            };
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(response("not_ready", Some(HealthChecks { database }))),
            ))
        }
    }
}

pub async fn liveness_check() -> Json<HealthResponse> {
    Json(response("alive", None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::repositories::{
        AdminRepository, CreateProduct, MemoryStore, ProductRepository, StoreHealth,
    };
    use anyhow::Result;
    use async_trait::async_trait;
    use rahi_shared::{AdminCredential, Product};
    use std::sync::Arc;
    use uuid::Uuid;

    /// Store whose connection is down
    struct UnreachableStore;

    #[async_trait]
    impl AdminRepository for UnreachableStore {
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

    #[async_trait]
    impl ProductRepository for UnreachableStore {
        async fn list(&self) -> Result<Vec<Product>> {
            anyhow::bail!("connection refused")
        }

        async fn create(&self, _product: CreateProduct) -> Result<Product> {
            anyhow::bail!("connection refused")
        }

        async fn delete(&self, _id: Uuid) -> Result<bool> {
            anyhow::bail!("connection refused")
        }
    }

    #[async_trait]
    impl StoreHealth for UnreachableStore {
        async fn ping(&self) -> Result<()> {
            anyhow::bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn test_health_check_returns_healthy() {
        let response = health_check().await;
        assert_eq!(response.status, "healthy");
        assert!(!response.version.is_empty());
    }

    #[tokio::test]
    async fn test_liveness_check_returns_alive() {
        let response = liveness_check().await;
        assert_eq!(response.status, "alive");
    }

    #[tokio::test]
    async fn test_readiness_with_reachable_store() {
        let state = AppState::new(Arc::new(MemoryStore::new()), AppConfig::with_secret("s"));
        let response = readiness_check(State(state)).await.ok().unwrap();
        assert_eq!(response.status, "ready");
    }

    #[tokio::test]
    async fn test_readiness_with_unreachable_store_returns_503() {
        let state = AppState::new(Arc::new(UnreachableStore), AppConfig::with_secret("s"));

        let Err((status, Json(body))) = readiness_check(State(state)).await else {
            panic!("readiness should fail when the store is down");
        };
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "not_ready");

        let database = &body.checks.as_ref().unwrap().database;
        assert_eq!(database.status, "unhealthy");
        assert_eq!(database.message.as_deref(), Some("connection refused"));
    }
}
