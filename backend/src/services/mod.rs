//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth primitives.

pub mod auth;
pub mod product;
pub mod seed;

pub use auth::AuthService;
pub use product::ProductService;
pub use seed::{seed_admin, seed_admin_best_effort, SeedOutcome};
