//! Scripted [`ItemStore`] for exercising the search pipeline.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;

use crate::store::{ItemStore, StoreError};
use crate::types::{BoundingBox, Item};

type CountFn = Box<dyn Fn(&BoundingBox) -> Result<u64, StoreError> + Send + Sync>;
type FetchFn = Box<dyn Fn(&BoundingBox) -> Result<Vec<Item>, StoreError> + Send + Sync>;

pub(crate) struct FakeStore {
    count: CountFn,
    fetch: FetchFn,
    counted: Mutex<Vec<BoundingBox>>,
    fetches: AtomicUsize,
}

impl FakeStore {
    pub(crate) fn new(
        count: impl Fn(&BoundingBox) -> Result<u64, StoreError> + Send + Sync + 'static,
        fetch: impl Fn(&BoundingBox) -> Result<Vec<Item>, StoreError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            count: Box::new(count),
            fetch: Box::new(fetch),
            counted: Mutex::new(Vec::new()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub(crate) fn counting(
        count: impl Fn(&BoundingBox) -> Result<u64, StoreError> + Send + Sync + 'static,
    ) -> Self {
        Self::new(count, |_| Ok(Vec::new()))
    }

    pub(crate) fn counted_boxes(&self) -> Vec<BoundingBox> {
        self.counted.lock().expect("counted lock").clone()
    }

    pub(crate) fn count_calls(&self) -> usize {
        self.counted.lock().expect("counted lock").len()
    }

    pub(crate) fn fetch_calls(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemStore for FakeStore {
    async fn count_in_radius(&self, _term: &str, bbox: &BoundingBox) -> Result<u64, StoreError> {
        self.counted.lock().expect("counted lock").push(*bbox);
        (self.count)(bbox)
    }

    async fn fetch_in_radius(
        &self,
        _term: &str,
        bbox: &BoundingBox,
    ) -> Result<Vec<Item>, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        (self.fetch)(bbox)
    }
}
