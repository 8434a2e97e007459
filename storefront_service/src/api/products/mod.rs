use axum::{
    Router,
    routing::{delete, get, post, put},
};
use chrono::{DateTime, Utc};
use models_storefront::catalog::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod get_products;
pub mod update_product;

use crate::api::{context::AppState, reviews};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_products::get_products_handler))
        .route("/", post(create_product::create_product_handler))
        .route("/:product_id", get(get_product::get_product_handler))
        .route("/:product_id", put(update_product::update_product_handler))
        .route(
            "/:product_id",
            delete(delete_product::delete_product_handler),
        )
        .nest("/:product_id/reviews", reviews::router())
}

/// A product as served to callers: the stored fields plus the derived
/// tax-inclusive price.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub slug: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[schema(value_type = f64)]
    pub price_with_tax: Decimal,
    pub inventory: i32,
    pub collection_id: i64,
    pub last_updated: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let price_with_tax = product.price_with_tax();
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            slug: product.slug,
            price: product.price,
            price_with_tax,
            inventory: product.inventory,
            collection_id: product.collection_id,
            last_updated: product.last_updated,
        }
    }
}

/// Writable product fields, shared by create and update requests.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub slug: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[serde(default)]
    pub inventory: i32,
    pub collection_id: i64,
}

impl From<ProductRequest> for storefront_db_client::products::ProductFields {
    fn from(req: ProductRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            slug: req.slug,
            price: req.price,
            inventory: req.inventory,
            collection_id: req.collection_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_response_carries_derived_tax_price() {
        let response = ProductResponse::from(Product {
            id: 7,
            title: "Bread".to_string(),
            description: String::new(),
            slug: "bread".to_string(),
            price: Decimal::new(10000, 2), // 100.00
            inventory: 3,
            collection_id: 1,
            last_updated: Utc::now(),
        });
        assert_eq!(response.price_with_tax, Decimal::new(11000, 2)); // 110.00
    }
}
