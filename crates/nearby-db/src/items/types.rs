//! Row types for the `items` table.

use nearby_core::{Coordinate, Item};

/// Input record for inserting an item.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub url: String,
    pub images: Vec<String>,
}

/// A row from the `items` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ItemRow {
    pub id: i64,
    pub item_name: String,
    pub lat: f64,
    pub lng: f64,
    pub item_url: String,
    pub img_urls: Vec<String>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            name: row.item_name,
            location: Coordinate::new(row.lat, row.lng),
            url: row.item_url,
            images: row.img_urls,
        }
    }
}
