use rust_decimal::Decimal;

pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod get_products;
pub mod update_product;

/// Writable product fields, shared by create and update.
#[derive(Debug, Clone)]
pub struct ProductFields {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub price: Decimal,
    pub inventory: i32,
    pub collection_id: i64,
}
