//! Product domain types.

use serde::{Deserialize, Serialize};

use cartwheel_core::{CategoryId, Price, ProductId};

/// A catalog product.
///
/// Placeholder shape for the future catalog store. `name` is intended to be
/// at most [`Product::MAX_NAME_LENGTH`] characters and `category_id` a
/// foreign key to a category table; neither is enforced anywhere yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Category this product belongs to.
    pub category_id: CategoryId,
}

impl Product {
    /// Intended maximum length of a product name.
    pub const MAX_NAME_LENGTH: usize = 100;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cartwheel_core::CurrencyCode;

    use super::*;

    #[test]
    fn test_product_serde_shape() {
        let product = Product {
            id: ProductId::new(42),
            name: "Widget".to_string(),
            description: "A widget.".to_string(),
            price: Price::from_minor_units(1999, CurrencyCode::USD),
            category_id: CategoryId::new(3),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["category_id"], 3);
    }
}
