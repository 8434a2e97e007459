use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{Result, StoreDbError};

/// Deletes a single cart line. Removing the last line leaves an empty but
/// existing cart.
#[tracing::instrument(skip(db))]
pub async fn remove_cart_item(db: &Pool<Postgres>, cart_id: Uuid, item_id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM "CartItem" WHERE id = $2 AND "cartId" = $1
        "#,
    )
    .bind(cart_id)
    .bind(item_id)
    .execute(db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreDbError::not_found("cart item"));
    }

    Ok(())
}
