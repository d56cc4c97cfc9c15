pub mod app_config;
pub mod config;
pub mod search;
pub mod store;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use search::{expand, rank, rank_items, search, SearchConfig, SearchError};
pub use store::{ItemStore, MemoryItemStore, StoreError};
pub use types::{
    BoundingBox, Coordinate, Item, RankedItem, SearchRequest, SearchResultItem, ValidationError,
};
