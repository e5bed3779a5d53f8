//! Product catalog routes
//!
//! Listing is public; creating and deleting require an admin token.

use crate::auth::AuthAdmin;
use crate::error::ApiResult;
use crate::services::ProductService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use rahi_shared::{DeleteProductResponse, ProductInput, ProductResponse};

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", delete(delete_product))
}

/// GET /api/products - All products, newest first
async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<ProductResponse>>> {
    let products = ProductService::list(state.products()).await?;
    Ok(Json(products))
}

/// POST /api/products - Add a product
async fn create_product(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<ProductInput>,
) -> ApiResult<Json<ProductResponse>> {
    let product = ProductService::create(state.products(), input).await?;
    Ok(Json(product))
}

/// DELETE /api/products/:id - Remove a product
async fn delete_product(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteProductResponse>> {
    let response = ProductService::delete(state.products(), &id).await?;
    Ok(Json(response))
}
