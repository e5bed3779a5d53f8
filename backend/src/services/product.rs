//! Product catalog operations

use crate::error::ApiError;
use crate::repositories::{CreateProduct, ProductRepository};
use rahi_shared::{DeleteProductResponse, ProductInput, ProductResponse};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Product service
pub struct ProductService;

impl ProductService {
    /// All products, newest first
    pub async fn list(repo: &dyn ProductRepository) -> Result<Vec<ProductResponse>, ApiError> {
        let products = repo.list().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    pub async fn create(
        repo: &dyn ProductRepository,
        input: ProductInput,
    ) -> Result<ProductResponse, ApiError> {
        input.validate()?;

        let product = repo
            .create(CreateProduct {
                name: input.name,
                description: input.description,
                price: input.price,
                image_url: input.image_url,
                amazon_link: input.amazon_link,
            })
            .await?;

        info!(product_id = %product.id, "Product created");
        Ok(product.into())
    }

    /// Delete by the string id taken from the request path
    pub async fn delete(
        repo: &dyn ProductRepository,
        product_id: &str,
    ) -> Result<DeleteProductResponse, ApiError> {
        let id = Uuid::parse_str(product_id)
            .map_err(|_| ApiError::BadRequest("Invalid product id".to_string()))?;

        if !repo.delete(id).await? {
            return Err(ApiError::NotFound("Product not found".to_string()));
        }

        info!(product_id = %id, "Product deleted");
        Ok(DeleteProductResponse {
            success: true,
            id: product_id.to_string(),
        })
    }
}
