//! The item store capability the search layer is built on.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{BoundingBox, Item};

/// Failure reported by an [`ItemStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store rejected the query itself (bad term, bad bounds).
    #[error("invalid store query: {0}")]
    InvalidQuery(String),

    /// Connectivity or execution failure in the backing store.
    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// Count and fetch items matching a term inside a bounding box.
///
/// Matching is a case-insensitive substring test on the item name combined
/// with an inclusive containment test on latitude and longitude. Both methods
/// must apply the same predicate.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn count_in_radius(&self, term: &str, bbox: &BoundingBox) -> Result<u64, StoreError>;

    async fn fetch_in_radius(
        &self,
        term: &str,
        bbox: &BoundingBox,
    ) -> Result<Vec<Item>, StoreError>;

    /// Liveness probe used by health checks.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// In-process store over a fixed set of items, returned in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryItemStore {
    items: Vec<Item>,
}

impl MemoryItemStore {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    fn matching<'a>(&'a self, term: &str, bbox: &'a BoundingBox) -> impl Iterator<Item = &'a Item> {
        let needle = term.to_lowercase();
        self.items.iter().filter(move |item| {
            item.name.to_lowercase().contains(&needle) && bbox.contains(&item.location)
        })
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn count_in_radius(&self, term: &str, bbox: &BoundingBox) -> Result<u64, StoreError> {
        let count = self.matching(term, bbox).count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    async fn fetch_in_radius(
        &self,
        term: &str,
        bbox: &BoundingBox,
    ) -> Result<Vec<Item>, StoreError> {
        Ok(self.matching(term, bbox).cloned().collect())
    }
}
