use crate::store::{ItemStore, StoreError};
use crate::types::{BoundingBox, Coordinate, Item, RankedItem};

/// Fetch every item matching `term` inside `bbox` and return the nearest
/// `limit` of them, closest first.
///
/// # Errors
///
/// Returns the [`StoreError`] from `fetch_in_radius`.
pub async fn rank<S>(
    store: &S,
    term: &str,
    bbox: &BoundingBox,
    limit: usize,
) -> Result<Vec<RankedItem>, StoreError>
where
    S: ItemStore + ?Sized,
{
    let items = store.fetch_in_radius(term, bbox).await?;
    tracing::debug!(term, fetched = items.len(), limit, "ranking fetched items");
    Ok(rank_items(items, &bbox.center, limit))
}

/// Annotate items with their planar distance from `center`, sort ascending
/// and keep the first `limit`.
///
/// The sort is stable, so equidistant items keep their input order.
#[must_use]
pub fn rank_items(items: Vec<Item>, center: &Coordinate, limit: usize) -> Vec<RankedItem> {
    let mut ranked: Vec<RankedItem> = items
        .into_iter()
        .map(|item| {
            let distance = center.planar_distance(&item.location);
            RankedItem { item, distance }
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked.truncate(limit);
    ranked
}
