use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Multiplier applied to a product's base price to get its tax-inclusive price.
fn tax_multiplier() -> Decimal {
    // 1.10
    Decimal::new(110, 2)
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Collection {
    pub id: i64,
    pub title: String,
}

/// A collection annotated with the number of products referencing it.
/// The count is aggregated at query time and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct CollectionWithCount {
    pub id: i64,
    pub title: String,
    pub products_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub slug: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub inventory: i32,
    pub collection_id: i64,
    pub last_updated: DateTime<Utc>,
}

impl Product {
    /// Derived tax-inclusive price: base price times 1.10, rounded to cents.
    pub fn price_with_tax(&self) -> Decimal {
        (self.price * tax_multiplier()).round_dp(2)
    }
}

/// Sort keys accepted when listing products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductOrdering {
    Price,
    LastUpdated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Asc
    }
}

/// Filters applied when listing products. All fields are optional and combine
/// with AND semantics.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductFilter {
    pub collection_id: Option<i64>,
    #[schema(value_type = Option<f64>)]
    pub price_min: Option<Decimal>,
    #[schema(value_type = Option<f64>)]
    pub price_max: Option<Decimal>,
    /// Free-text search over title and description.
    pub search: Option<String>,
    pub ordering: Option<ProductOrdering>,
    #[serde(default)]
    pub direction: SortDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: Decimal) -> Product {
        Product {
            id: 1,
            title: "Bread".to_string(),
            description: "Sourdough".to_string(),
            slug: "bread".to_string(),
            price,
            inventory: 5,
            collection_id: 1,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_price_with_tax() {
        let p = product(Decimal::new(10000, 2)); // 100.00
        assert_eq!(p.price_with_tax(), Decimal::new(11000, 2)); // 110.00
    }

    #[test]
    fn test_price_with_tax_rounds_to_cents() {
        let p = product(Decimal::new(999, 2)); // 9.99
        assert_eq!(p.price_with_tax(), Decimal::new(1099, 2)); // 10.989 -> 10.99
    }

    #[test]
    fn test_ordering_deserializes_snake_case() {
        let o: ProductOrdering = serde_json::from_str("\"last_updated\"").unwrap();
        assert_eq!(o, ProductOrdering::LastUpdated);
    }
}
