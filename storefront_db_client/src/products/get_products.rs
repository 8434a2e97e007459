use models_storefront::{
    catalog::{Product, ProductFilter, ProductOrdering, SortDirection},
    pagination::{Page, PageParams},
};
use sqlx::{Pool, Postgres, QueryBuilder};

use crate::Result;

/// Lists products with optional filtering, free-text search, ordering, and
/// page-number pagination. Filters combine with AND semantics.
#[tracing::instrument(skip(db))]
pub async fn get_products(
    db: &Pool<Postgres>,
    filter: &ProductFilter,
    params: &PageParams,
) -> Result<Page<Product>> {
    let mut count_query = QueryBuilder::new(r#"SELECT COUNT(*) FROM "Product""#);
    push_filters(&mut count_query, filter);
    let total = count_query
        .build_query_scalar::<i64>()
        .fetch_one(db)
        .await?;

    let mut query = QueryBuilder::new(
        r#"
        SELECT id, title, description, slug, price, inventory,
               "collectionId" AS collection_id, "lastUpdated" AS last_updated
        FROM "Product"
        "#,
    );
    push_filters(&mut query, filter);
    push_ordering(&mut query, filter);
    query.push(" LIMIT ");
    query.push_bind(params.limit());
    query.push(" OFFSET ");
    query.push_bind(params.offset());

    let products = query.build_query_as::<Product>().fetch_all(db).await?;

    Ok(Page::new(products, total, params))
}

fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    let mut prefix = " WHERE ";
    let mut separated = move |query: &mut QueryBuilder<'_, Postgres>| {
        query.push(std::mem::replace(&mut prefix, " AND "));
    };

    if let Some(collection_id) = filter.collection_id {
        separated(query);
        query.push(r#""collectionId" = "#);
        query.push_bind(collection_id);
    }
    if let Some(price_min) = filter.price_min {
        separated(query);
        query.push("price >= ");
        query.push_bind(price_min);
    }
    if let Some(price_max) = filter.price_max {
        separated(query);
        query.push("price <= ");
        query.push_bind(price_max);
    }
    if let Some(search) = &filter.search {
        separated(query);
        let pattern = like_pattern(search);
        query.push("(title ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR description ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }
}

/// Wraps a free-text search term in a contains LIKE pattern. The escape
/// character goes first, otherwise escaping `%` introduces backslashes that
/// the later passes would double up.
fn like_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn push_ordering(query: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    // Sort column comes from a closed enum, never from raw caller input.
    let column = match filter.ordering {
        Some(ProductOrdering::Price) => "price",
        Some(ProductOrdering::LastUpdated) => r#""lastUpdated""#,
        None => "id",
    };
    let direction = match filter.direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    };
    query.push(format!(" ORDER BY {column} {direction}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[test]
    fn test_like_pattern_escapes_the_escape_character() {
        // a trailing backslash must not swallow the closing wildcard
        assert_eq!(like_pattern("tea\\"), "%tea\\\\%");
        assert_eq!(like_pattern("\\%"), "%\\\\\\%%");
    }

    #[test]
    fn test_like_pattern_plain_term_is_wrapped() {
        assert_eq!(like_pattern("oolong"), "%oolong%");
    }
}
