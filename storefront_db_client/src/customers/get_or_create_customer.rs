use models_storefront::customer::Customer;

use crate::Result;

/// Idempotently resolves the customer row for an identity, creating one with
/// empty names and bronze membership on first access. Generic over the
/// executor so order placement can run it inside its transaction.
///
/// The no-op `DO UPDATE` makes the statement return the existing row instead
/// of nothing when the customer already exists.
#[tracing::instrument(skip(executor))]
pub async fn get_or_create_customer<'e, E>(executor: E, user_id: &str) -> Result<Customer>
where
    E: sqlx::PgExecutor<'e>,
{
    let customer = sqlx::query_as::<_, Customer>(
        r#"
        INSERT INTO "Customer" ("userId")
        VALUES ($1)
        ON CONFLICT ("userId") DO UPDATE SET "userId" = EXCLUDED."userId"
        RETURNING id, "userId" AS user_id, "firstName" AS first_name,
                  "lastName" AS last_name, membership
        "#,
    )
    .bind(user_id)
    .fetch_one(executor)
    .await?;

    Ok(customer)
}
