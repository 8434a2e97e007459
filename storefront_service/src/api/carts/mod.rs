use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use chrono::{DateTime, Utc};
use models_storefront::cart::{CartItemWithProduct, CartProduct, CartWithItems};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub mod add_cart_item;
pub mod create_cart;
pub mod delete_cart;
pub mod get_cart;
pub mod remove_cart_item;
pub mod update_cart_item;

use crate::api::context::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cart::create_cart_handler))
        .route("/:cart_id", get(get_cart::get_cart_handler))
        .route("/:cart_id", delete(delete_cart::delete_cart_handler))
        .route("/:cart_id/items", post(add_cart_item::add_cart_item_handler))
        .route(
            "/:cart_id/items/:item_id",
            patch(update_cart_item::update_cart_item_handler),
        )
        .route(
            "/:cart_id/items/:item_id",
            delete(remove_cart_item::remove_cart_item_handler),
        )
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartItemResponse {
    pub id: i64,
    pub quantity: i32,
    pub product: CartProduct,
    /// quantity times the product's current price
    #[schema(value_type = f64)]
    pub total_price: Decimal,
}

impl From<CartItemWithProduct> for CartItemResponse {
    fn from(item: CartItemWithProduct) -> Self {
        let total_price = item.total_price();
        Self {
            id: item.id,
            quantity: item.quantity,
            product: item.product,
            total_price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub items: Vec<CartItemResponse>,
    /// pre-order estimate against current prices, not a frozen total
    #[schema(value_type = f64)]
    pub total_price: Decimal,
}

impl From<CartWithItems> for CartResponse {
    fn from(cart: CartWithItems) -> Self {
        let total_price = cart.total_price();
        Self {
            id: cart.id,
            created_at: cart.created_at,
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            total_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_response_totals() {
        let cart = CartWithItems {
            id: Uuid::nil(),
            created_at: Utc::now(),
            items: vec![
                CartItemWithProduct {
                    id: 1,
                    quantity: 2,
                    product: CartProduct {
                        id: 10,
                        title: "Bread".to_string(),
                        price: Decimal::new(1000, 2), // 10.00
                    },
                },
                CartItemWithProduct {
                    id: 2,
                    quantity: 1,
                    product: CartProduct {
                        id: 11,
                        title: "Milk".to_string(),
                        price: Decimal::new(500, 2), // 5.00
                    },
                },
            ],
        };

        let response = CartResponse::from(cart);
        assert_eq!(response.items[0].total_price, Decimal::new(2000, 2));
        assert_eq!(response.items[1].total_price, Decimal::new(500, 2));
        assert_eq!(response.total_price, Decimal::new(2500, 2)); // 25.00
    }
}
