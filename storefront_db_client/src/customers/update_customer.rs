use models_storefront::customer::{Customer, Membership};
use sqlx::{Pool, Postgres};

use crate::Result;

/// Updates the caller's own profile, provisioning the row first if this is
/// the identity's first access.
#[tracing::instrument(skip(db))]
pub async fn update_customer(
    db: &Pool<Postgres>,
    user_id: &str,
    first_name: &str,
    last_name: &str,
    membership: Membership,
) -> Result<Customer> {
    let mut transaction = db.begin().await?;

    super::get_or_create_customer::get_or_create_customer(transaction.as_mut(), user_id).await?;

    let customer = sqlx::query_as::<_, Customer>(
        r#"
        UPDATE "Customer"
        SET "firstName" = $2, "lastName" = $3, membership = $4
        WHERE "userId" = $1
        RETURNING id, "userId" AS user_id, "firstName" AS first_name,
                  "lastName" AS last_name, membership
        "#,
    )
    .bind(user_id)
    .bind(first_name)
    .bind(last_name)
    .bind(membership)
    .fetch_one(transaction.as_mut())
    .await?;

    transaction.commit().await?;

    Ok(customer)
}
