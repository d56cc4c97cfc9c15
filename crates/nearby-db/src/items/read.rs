//! Read operations for the `items` table.

use nearby_core::BoundingBox;
use sqlx::PgPool;

use super::types::ItemRow;

/// Escape `LIKE` metacharacters so `term` matches as a literal substring.
#[must_use]
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

/// Count items whose name contains `term` (case-insensitive) and whose
/// coordinate lies inside `bbox`, bounds inclusive.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn count_items_in_box(
    pool: &PgPool,
    term: &str,
    bbox: &BoundingBox,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM items \
         WHERE item_name ILIKE $1 ESCAPE '\\' \
           AND lat BETWEEN $2 AND $3 \
           AND lng BETWEEN $4 AND $5",
    )
    .bind(contains_pattern(term))
    .bind(bbox.min_latitude)
    .bind(bbox.max_latitude)
    .bind(bbox.min_longitude)
    .bind(bbox.max_longitude)
    .fetch_one(pool)
    .await
}

/// Fetch every item matching the same predicate as [`count_items_in_box`].
///
/// Results are ordered by `id ASC` so ties in later ranking are stable across
/// calls.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_items_in_box(
    pool: &PgPool,
    term: &str,
    bbox: &BoundingBox,
) -> Result<Vec<ItemRow>, sqlx::Error> {
    sqlx::query_as::<_, ItemRow>(
        "SELECT id, item_name, lat, lng, item_url, img_urls \
         FROM items \
         WHERE item_name ILIKE $1 ESCAPE '\\' \
           AND lat BETWEEN $2 AND $3 \
           AND lng BETWEEN $4 AND $5 \
         ORDER BY id ASC",
    )
    .bind(contains_pattern(term))
    .bind(bbox.min_latitude)
    .bind(bbox.max_latitude)
    .bind(bbox.min_longitude)
    .bind(bbox.max_longitude)
    .fetch_all(pool)
    .await
}
