use crate::store::{ItemStore, StoreError};
use crate::types::{BoundingBox, Coordinate};

use super::SearchConfig;

/// Widen a box around `center` until at least `config.sufficiency` items
/// match `term`, or `config.max_attempts` count queries have been issued.
///
/// Always yields a box: when no attempt is sufficient the widest one is
/// returned.
///
/// # Errors
///
/// Returns the first [`StoreError`] from `count_in_radius` without issuing
/// further queries.
pub async fn expand<S>(
    store: &S,
    term: &str,
    center: Coordinate,
    config: &SearchConfig,
) -> Result<BoundingBox, StoreError>
where
    S: ItemStore + ?Sized,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let bbox = BoundingBox::around(center, config.step(attempt));
        let count = store.count_in_radius(term, &bbox).await?;

        tracing::debug!(
            term,
            attempt,
            min_latitude = bbox.min_latitude,
            max_latitude = bbox.max_latitude,
            min_longitude = bbox.min_longitude,
            max_longitude = bbox.max_longitude,
            count,
            "radius expansion attempt"
        );

        if count >= config.sufficiency || attempt >= max_attempts {
            return Ok(bbox);
        }
        attempt += 1;
    }
}
