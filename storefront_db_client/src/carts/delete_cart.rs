use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{Result, StoreDbError};

/// Deletes a cart; the CASCADE key removes its lines with it.
#[tracing::instrument(skip(db))]
pub async fn delete_cart(db: &Pool<Postgres>, cart_id: Uuid) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM "Cart" WHERE id = $1
        "#,
    )
    .bind(cart_id)
    .execute(db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreDbError::not_found("cart"));
    }

    Ok(())
}
