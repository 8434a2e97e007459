use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A shopping cart. The id doubles as the cart's capability token: it is an
/// opaque uuid, carries no owner reference, and whoever holds it owns the cart.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Cart {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A single line of a cart. Unique per (cart, product); adds for an existing
/// product merge into the row instead of creating a second one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct CartItem {
    pub id: i64,
    pub cart_id: Uuid,
    pub product_id: i64,
    pub quantity: i32,
}

/// The slice of a product embedded in cart reads.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartProduct {
    pub id: i64,
    pub title: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

/// A cart line joined to its product snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItemWithProduct {
    pub id: i64,
    pub quantity: i32,
    pub product: CartProduct,
}

impl CartItemWithProduct {
    /// Line total at the product's current price.
    pub fn total_price(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// A cart with its lines eagerly loaded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartWithItems {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub items: Vec<CartItemWithProduct>,
}

impl CartWithItems {
    /// Pre-order estimate: sum of quantity times the live product price for
    /// every line. Not a frozen total; order placement snapshots its own.
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(|item| item.total_price()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, quantity: i32, price: Decimal) -> CartItemWithProduct {
        CartItemWithProduct {
            id,
            quantity,
            product: CartProduct {
                id,
                title: format!("product {id}"),
                price,
            },
        }
    }

    #[test]
    fn test_total_price_sums_lines() {
        let cart = CartWithItems {
            id: Uuid::nil(),
            created_at: Utc::now(),
            items: vec![
                item(1, 2, Decimal::new(1000, 2)), // 2 x 10.00
                item(2, 1, Decimal::new(500, 2)),  // 1 x 5.00
            ],
        };
        assert_eq!(cart.total_price(), Decimal::new(2500, 2)); // 25.00
    }

    #[test]
    fn test_total_price_empty_cart_is_zero() {
        let cart = CartWithItems {
            id: Uuid::nil(),
            created_at: Utc::now(),
            items: vec![],
        };
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(
            item(1, 3, Decimal::new(250, 2)).total_price(),
            Decimal::new(750, 2)
        );
    }
}
