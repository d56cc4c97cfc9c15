use super::fake_store::FakeStore;
use super::*;
use crate::store::MemoryItemStore;
use crate::types::{Coordinate, Item};

fn item(name: &str, lat: f64, lng: f64, url: &str) -> Item {
    Item {
        name: name.to_string(),
        location: Coordinate::new(lat, lng),
        url: url.to_string(),
        images: vec!["camera.jpg".to_string()],
    }
}

/// Camera listings spread along the diagonal between (5, 5) and (7, 7).
fn camera_rows() -> Vec<Item> {
    vec![
        item("canon camera 1", 5.00, 5.00, "canon.camera"),
        item("canon camera 2", 5.50, 5.50, "canon.camera"),
        item("canon camera 3", 6.00, 6.00, "canon.camera"),
        item("canon camera 4", 6.10, 6.10, "canon.camera"),
        item("canon camera 5", 6.60, 6.60, "canon.camera"),
        item("canon camera 6", 6.20, 6.20, "canon.camera"),
        item("canon camera 7", 6.30, 6.30, "canon.camera"),
        item("canon camera 8", 6.40, 6.40, "canon.camera"),
        item("canon camera 9", 6.50, 6.50, "canon.camera"),
        item("nikon camera 1", 6.70, 6.70, "nikon.camera"),
        item("nikon camera 2", 6.80, 6.80, "nikon.camera"),
        item("nikon camera 3", 6.90, 6.90, "nikon.camera"),
        item("nikon camera 4", 6.91, 6.91, "nikon.camera"),
        item("nikon camera 5", 5.90, 5.90, "nikon.camera"),
        item("nikon camera 6", 5.91, 5.91, "nikon.camera"),
        item("nikon camera 7", 5.92, 5.92, "nikon.camera"),
        item("nikon camera 8", 5.93, 5.93, "nikon.camera"),
        item("nikon camera 9", 5.94, 5.94, "nikon.camera"),
        item("nikon camera 10", 5.95, 5.95, "nikon.camera"),
        item("nikon camera 11", 5.96, 5.96, "nikon.camera"),
        item("nikon camera 12", 5.97, 5.97, "nikon.camera"),
    ]
}

fn request(term: &str, lat: f64, lng: f64) -> SearchRequest {
    SearchRequest::new(term, Coordinate::new(lat, lng)).expect("valid request")
}

fn assert_non_decreasing(ranked: &[RankedItem]) {
    assert!(
        ranked.windows(2).all(|w| w[0].distance <= w[1].distance),
        "distances not sorted: {:?}",
        ranked.iter().map(|r| r.distance).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn wide_enough_box_returns_exactly_limit_items() {
    let store = FakeStore::new(
        |bbox| Ok(if bbox.max_latitude > 7.0 { 21 } else { 15 }),
        |bbox| {
            let rows = camera_rows();
            let take = if bbox.max_latitude > 7.0 { 20 } else { 15 };
            Ok(rows.into_iter().take(take).collect())
        },
    );

    let ranked = search(&store, &request("camera", 6.82, 6.43), &SearchConfig::default())
        .await
        .unwrap();

    assert_eq!(store.count_calls(), 5);
    assert_eq!(store.fetch_calls(), 1);
    assert_eq!(ranked.len(), 20);
    assert_eq!(ranked[0].item.name, "canon camera 5");
    assert_eq!(ranked[19].item.name, "canon camera 1");
    assert_non_decreasing(&ranked);
}

#[tokio::test]
async fn insufficient_matches_exhaust_attempts_without_truncation() {
    let store = FakeStore::new(
        |_| Ok(9),
        |_| Ok(camera_rows().into_iter().take(9).collect()),
    );

    let ranked = search(&store, &request("canon", 6.00, 6.00), &SearchConfig::default())
        .await
        .unwrap();

    assert_eq!(store.count_calls(), 9);
    assert_eq!(ranked.len(), 9);
    assert_eq!(ranked[0].item.name, "canon camera 3");
    assert_eq!(ranked[8].item.name, "canon camera 1");
    assert_non_decreasing(&ranked);
}

#[tokio::test]
async fn count_failure_aborts_before_fetch() {
    let store = FakeStore::new(
        |_| Err(StoreError::InvalidQuery("Bad request".to_string())),
        |_| Ok(camera_rows()),
    );

    let err = search(&store, &request("television", 0.0, 0.0), &SearchConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Store(StoreError::InvalidQuery(_))));
    assert_eq!(store.count_calls(), 1);
    assert_eq!(store.fetch_calls(), 0);
}

#[test]
fn unparseable_coordinate_is_a_validation_error() {
    let err = SearchRequest::from_raw(Some("camera"), Some("test"), Some("51.412"))
        .map_err(SearchError::from)
        .unwrap_err();
    assert!(matches!(err, SearchError::Validation(_)));
}

#[tokio::test]
async fn no_matches_anywhere_is_an_empty_result() {
    let store = MemoryItemStore::new(camera_rows());

    let ranked = search(&store, &request("television", 6.0, 6.0), &SearchConfig::default())
        .await
        .unwrap();

    assert!(ranked.is_empty());
}

#[tokio::test]
async fn memory_store_search_returns_nearest_limit() {
    let center = Coordinate::new(51.5, -0.12);
    let mut items: Vec<Item> = (0..40)
        .map(|i| {
            let offset = f64::from(i) * 0.003;
            item(
                &format!("Camera {i}"),
                center.latitude + offset,
                center.longitude - offset,
                "https://items.example/camera",
            )
        })
        .collect();
    items.reverse();
    items.push(item("Bicycle", 51.5, -0.12, "https://items.example/bike"));
    let store = MemoryItemStore::new(items);

    let ranked = search(&store, &request("camera", 51.5, -0.12), &SearchConfig::default())
        .await
        .unwrap();

    assert_eq!(ranked.len(), 20);
    assert_eq!(ranked[0].item.name, "Camera 0");
    assert!(ranked.iter().all(|r| r.item.name.starts_with("Camera")));
    assert_non_decreasing(&ranked);
}

#[tokio::test]
async fn output_length_is_min_of_limit_and_matches() {
    let store = MemoryItemStore::new(camera_rows());
    let config = SearchConfig {
        limit: 5,
        ..SearchConfig::default()
    };

    let ranked = search(&store, &request("nikon", 6.0, 6.0), &config).await.unwrap();
    assert_eq!(ranked.len(), 5);

    let config = SearchConfig {
        limit: 50,
        ..SearchConfig::default()
    };
    let ranked = search(&store, &request("nikon", 6.0, 6.0), &config).await.unwrap();
    assert_eq!(ranked.len(), 12);
}

#[tokio::test]
async fn repeated_searches_are_identical() {
    let store = MemoryItemStore::new(vec![
        item("lamp east", 0.0, 0.5, "lamp"),
        item("lamp north", 0.5, 0.0, "lamp"),
        item("lamp west", 0.0, -0.5, "lamp"),
        item("lamp near", 0.1, 0.1, "lamp"),
    ]);
    let req = request("lamp", 0.0, 0.0);

    let first = search(&store, &req, &SearchConfig::default()).await.unwrap();
    let second = search(&store, &req, &SearchConfig::default()).await.unwrap();

    assert_eq!(first, second);
    let order: Vec<_> = first.iter().map(|r| r.item.name.as_str()).collect();
    assert_eq!(order, vec!["lamp near", "lamp east", "lamp north", "lamp west"]);
}
