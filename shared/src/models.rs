//! Data models for the Rahi Enterprise application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role embedded in every token minted for the administrator
pub const ADMIN_ROLE: &str = "admin";

/// The single administrator account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCredential {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub amazon_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_credential_never_serializes_hash() {
        let now = Utc::now();
        let admin = AdminCredential {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            password_hash: "$2b$04$abcdefghijklmnopqrstuv".to_string(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_string(&admin).unwrap();
        assert!(json.contains("admin"));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$2b$"));
    }
}
