//! Adaptive radius search: widen a bounding box until enough candidates
//! match, then rank the candidates by distance from the center.

mod expand;
mod rank;

#[cfg(test)]
mod fake_store;

use thiserror::Error;

use crate::store::{ItemStore, StoreError};
use crate::types::{RankedItem, SearchRequest, ValidationError};

pub use expand::expand;
pub use rank::{rank, rank_items};

pub const DEFAULT_BASE_STEP: f64 = 0.01;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 9;
pub const DEFAULT_SUFFICIENCY: u64 = 20;
pub const DEFAULT_LIMIT: usize = 20;

/// Tunables for box expansion and result truncation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Half-width multiplier: attempt `i` uses `base_step * 2^i` degrees.
    pub base_step: f64,
    /// Upper bound on count queries per search. Values below 1 act as 1.
    pub max_attempts: u32,
    /// Candidate count that stops expansion early.
    pub sufficiency: u64,
    /// Maximum number of ranked items returned.
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_step: DEFAULT_BASE_STEP,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            sufficiency: DEFAULT_SUFFICIENCY,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Half-width of the box for a 1-based attempt index.
    #[must_use]
    pub fn step(&self, attempt: u32) -> f64 {
        self.base_step * 2_f64.powf(f64::from(attempt))
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Run one nearby search: expand, then rank within the chosen box.
///
/// The first store failure aborts the search; no partial results are
/// returned.
///
/// # Errors
///
/// Returns [`SearchError::Store`] if any count or fetch call fails.
pub async fn search<S>(
    store: &S,
    request: &SearchRequest,
    config: &SearchConfig,
) -> Result<Vec<RankedItem>, SearchError>
where
    S: ItemStore + ?Sized,
{
    let bbox = expand(store, &request.term, request.center, config).await?;
    let ranked = rank(store, &request.term, &bbox, config.limit).await?;

    tracing::info!(
        term = %request.term,
        latitude = request.center.latitude,
        longitude = request.center.longitude,
        returned = ranked.len(),
        "nearby search complete"
    );

    Ok(ranked)
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
