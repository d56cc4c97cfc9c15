//! [`ItemStore`] backed by the Postgres `items` table.

use async_trait::async_trait;
use nearby_core::{BoundingBox, Item, ItemStore, StoreError};
use sqlx::PgPool;

use crate::items::{count_items_in_box, list_items_in_box};

#[derive(Debug, Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn store_error(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "item store query failed");
    StoreError::backend(err)
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn count_in_radius(&self, term: &str, bbox: &BoundingBox) -> Result<u64, StoreError> {
        let count = count_items_in_box(&self.pool, term, bbox)
            .await
            .map_err(store_error)?;
        u64::try_from(count)
            .map_err(|_| StoreError::InvalidQuery(format!("negative item count {count}")))
    }

    async fn fetch_in_radius(
        &self,
        term: &str,
        bbox: &BoundingBox,
    ) -> Result<Vec<Item>, StoreError> {
        let rows = list_items_in_box(&self.pool, term, bbox)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::ping(&self.pool).await.map_err(store_error)
    }
}
