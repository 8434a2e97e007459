use models_storefront::cart::CartItem;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{Result, StoreDbError, error::foreign_key_constraint};

/// Adds a product to a cart, merging into the existing line when one exists.
///
/// The merge is a single upsert against the (cartId, productId) unique
/// constraint, so two concurrent adds for the same pair can never produce two
/// rows; the slower one increments the winner's quantity.
#[tracing::instrument(skip(db))]
pub async fn add_cart_item(
    db: &Pool<Postgres>,
    cart_id: Uuid,
    product_id: i64,
    quantity: i32,
) -> Result<CartItem> {
    if quantity < 1 {
        return Err(StoreDbError::invalid_argument(
            "quantity must be a positive integer",
        ));
    }

    let product_exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM "Product" WHERE id = $1)
        "#,
    )
    .bind(product_id)
    .fetch_one(db)
    .await?;

    if !product_exists {
        return Err(StoreDbError::not_found("product"));
    }

    let item = sqlx::query_as::<_, CartItem>(
        r#"
        INSERT INTO "CartItem" ("cartId", "productId", quantity)
        VALUES ($1, $2, $3)
        ON CONFLICT ("cartId", "productId")
        DO UPDATE SET quantity = "CartItem".quantity + EXCLUDED.quantity
        RETURNING id, "cartId" AS cart_id, "productId" AS product_id, quantity
        "#,
    )
    .bind(cart_id)
    .bind(product_id)
    .bind(quantity)
    .fetch_one(db)
    .await
    .map_err(|e| {
        // either foreign key can trip: a token that names no cart, or a
        // product deleted between the existence check and the insert
        match foreign_key_constraint(&e) {
            Some("CartItem_cartId_fkey") => StoreDbError::not_found("cart"),
            Some("CartItem_productId_fkey") => StoreDbError::not_found("product"),
            _ => StoreDbError::from(e),
        }
    })?;

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("catalog", "carts")))]
    async fn test_add_merges_into_existing_line(pool: Pool<Postgres>) {
        let cart_id = Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap();

        let first = add_cart_item(&pool, cart_id, 1, 2).await.unwrap();
        assert_eq!(first.quantity, 2);

        let merged = add_cart_item(&pool, cart_id, 1, 3).await.unwrap();
        assert_eq!(merged.id, first.id);
        assert_eq!(merged.quantity, 5);

        let line_count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM "CartItem" WHERE "cartId" = $1"#,
        )
        .bind(cart_id)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(line_count, 1);
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("catalog")))]
    async fn test_add_to_missing_cart_names_the_cart(pool: Pool<Postgres>) {
        let err = add_cart_item(&pool, Uuid::nil(), 1, 1).await.unwrap_err();
        assert!(matches!(err, StoreDbError::NotFound { entity: "cart" }));
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("catalog", "carts")))]
    async fn test_add_missing_product_is_not_found(pool: Pool<Postgres>) {
        let cart_id = Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap();
        let err = add_cart_item(&pool, cart_id, 999, 1).await.unwrap_err();
        assert!(matches!(err, StoreDbError::NotFound { entity: "product" }));
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("catalog", "carts")))]
    async fn test_add_rejects_non_positive_quantity(pool: Pool<Postgres>) {
        let cart_id = Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap();
        let err = add_cart_item(&pool, cart_id, 1, 0).await.unwrap_err();
        assert!(matches!(err, StoreDbError::InvalidArgument { .. }));
    }
}
