//! Write operations for the `items` table.

use sqlx::PgPool;

use super::types::NewItem;

/// Insert a single item and return its generated `id`.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the insert fails.
pub async fn insert_item(pool: &PgPool, item: &NewItem) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO items (item_name, lat, lng, item_url, img_urls) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(&item.name)
    .bind(item.latitude)
    .bind(item.longitude)
    .bind(&item.url)
    .bind(&item.images)
    .fetch_one(pool)
    .await
}
