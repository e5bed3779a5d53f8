//! Rahi Enterprise Shared Library
//!
//! Domain models and wire types shared between the backend and its clients.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::{AdminCredential, Product, ADMIN_ROLE};
pub use types::*;
