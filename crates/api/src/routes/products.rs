//! Product route handlers.
//!
//! Placeholder surface for the product catalog. The listing is empty and
//! creation stores nothing; only the detail endpoint does any work, echoing
//! the requested id back.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use cartwheel_core::ProductId;

use crate::models::Product;
use crate::state::AppState;

/// Confirmation message returned by the create stub.
pub const CREATED_MESSAGE: &str = "Product created";

// =============================================================================
// Request Types
// =============================================================================

/// Product creation request body.
///
/// `price` is accepted as a bare float on the wire; the catalog store will
/// convert it to a `Price` when persistence lands.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
}

// =============================================================================
// Response Types
// =============================================================================

/// Product listing response body.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// Product detail response body.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: ProductRef,
}

/// A bare product reference carrying only the id.
///
/// The detail stub has no catalog to read from, so this is all it can echo.
#[derive(Debug, Serialize)]
pub struct ProductRef {
    pub id: ProductId,
}

/// Product creation response body.
#[derive(Debug, Serialize)]
pub struct CreateProductResponse {
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Product listing.
///
/// GET /products - always returns an empty collection until the catalog
/// store exists. No pagination yet for the same reason.
pub async fn index(State(_state): State<AppState>) -> Json<ProductsResponse> {
    // TODO: Fetch products from the catalog store once persistence lands
    Json(ProductsResponse {
        products: Vec::new(),
    })
}

/// Product detail.
///
/// GET /products/{product_id} - echoes the given id. A non-integer id is
/// rejected by the path extractor with a client error before this runs.
pub async fn show(
    State(_state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Json<ProductResponse> {
    // TODO: Look up the product and answer 404 for unknown ids
    Json(ProductResponse {
        product: ProductRef {
            id: ProductId::new(product_id),
        },
    })
}

/// Product creation.
///
/// POST /products - accepts the payload and answers with a fixed
/// confirmation. Performs no persistence.
pub async fn create(
    State(_state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Json<CreateProductResponse> {
    // TODO: Insert into the catalog store and return the created product
    tracing::debug!(name = %req.name, price = req.price, "create product stub called");

    Json(CreateProductResponse {
        message: CREATED_MESSAGE.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::config::ApiConfig;

    use super::*;

    fn state() -> AppState {
        AppState::new(ApiConfig::default())
    }

    #[tokio::test]
    async fn test_index_is_empty() {
        let Json(body) = index(State(state())).await;
        assert!(body.products.is_empty());
    }

    #[tokio::test]
    async fn test_show_echoes_id() {
        let Json(body) = show(State(state()), Path(42)).await;
        assert_eq!(body.product.id, ProductId::new(42));
    }

    #[tokio::test]
    async fn test_show_accepts_negative_ids() {
        // Any integer round-trips; range checks belong to the future store.
        let Json(body) = show(State(state()), Path(-1)).await;
        assert_eq!(body.product.id.as_i32(), -1);
    }

    #[tokio::test]
    async fn test_create_returns_confirmation() {
        let req = CreateProductRequest {
            name: "Widget".to_string(),
            price: 19.99,
        };

        let Json(body) = create(State(state()), Json(req)).await;
        assert_eq!(body.message, "Product created");
    }
}
