//! Integration tests for hexmap-introspector
//!
//! Drives discovery against an in-memory source that mimics the War API,
//! including slow and failing tiles.

use async_trait::async_trait;
use hexmap_core::traits::MapSource;
use hexmap_core::{Error, MapTextItem, Result, TileId};
use hexmap_introspector::Introspector;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// In-memory War API with optional per-tile latency and failures.
#[derive(Default)]
struct FakeWarApi {
    order: Vec<String>,
    details: HashMap<String, Vec<MapTextItem>>,
    delays_ms: HashMap<String, u64>,
    failing: Vec<String>,
    requested: Mutex<Vec<String>>,
}

impl FakeWarApi {
    fn tile(mut self, id: &str, items: Vec<MapTextItem>) -> Self {
        self.order.push(id.to_string());
        self.details.insert(id.to_string(), items);
        self
    }

    fn slow(mut self, id: &str, delay_ms: u64) -> Self {
        self.delays_ms.insert(id.to_string(), delay_ms);
        self
    }

    fn failing(mut self, id: &str) -> Self {
        self.order.push(id.to_string());
        self.failing.push(id.to_string());
        self
    }
}

#[async_trait]
impl MapSource for FakeWarApi {
    async fn tiles(&self) -> Result<Vec<TileId>> {
        Ok(self.order.iter().map(|id| TileId::new(id.clone())).collect())
    }

    async fn tile_details(&self, tile: &TileId) -> Result<Vec<MapTextItem>> {
        self.requested.lock().unwrap().push(tile.to_string());

        if let Some(delay) = self.delays_ms.get(tile.as_str()) {
            tokio::time::sleep(Duration::from_millis(*delay)).await;
        }

        if self.failing.iter().any(|id| id == tile.as_str()) {
            return Err(Error::HttpStatus {
                url: format!("http://fake/maps/{tile}/static"),
                status: 500,
            });
        }

        self.details
            .get(tile.as_str())
            .cloned()
            .ok_or_else(|| Error::HttpStatus {
                url: format!("http://fake/maps/{tile}/static"),
                status: 404,
            })
    }
}

fn item(text: &str, marker: &str, x: f64, y: f64) -> MapTextItem {
    MapTextItem {
        text: text.to_string(),
        map_marker_type: marker.to_string(),
        x,
        y,
    }
}

fn three_tile_api() -> FakeWarApi {
    FakeWarApi::default()
        .tile(
            "StonecradleHex",
            vec![
                item("Buckler Sound", "Major", 0.25, 0.5),
                item("Longing", "Minor", 0.75, 0.125),
            ],
        )
        .tile("AllodsBightHex", vec![item("A Captain's Repose", "Minor", 0.5, 0.5)])
        .tile("TempestIslandHex", vec![])
}

#[tokio::test]
async fn test_sequential_discovery() {
    let world = Introspector::new(three_tile_api()).discover().await.unwrap();

    let names: Vec<_> = world.tiles.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Stonecradle", "AllodsBight", "TempestIsland"]);
    assert_eq!(world.location_count(), 3);

    let repose = &world.tiles[1].locations[0];
    assert_eq!(repose.ident, "ACaptainsRepose");
    assert_eq!(repose.text, "A Captain's Repose");
    assert!(!repose.is_major);
}

#[tokio::test]
async fn test_concurrent_discovery_preserves_order() {
    // First tile answers last; output must still follow the tile list.
    let api = three_tile_api()
        .slow("StonecradleHex", 80)
        .slow("AllodsBightHex", 40);

    let introspector = Introspector::new(api).with_concurrency(3);
    let world = introspector.discover().await.unwrap();

    let ids: Vec<_> = world.tiles.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["StonecradleHex", "AllodsBightHex", "TempestIslandHex"]);
}

#[tokio::test]
async fn test_concurrent_matches_sequential() {
    let sequential = Introspector::new(three_tile_api()).discover().await.unwrap();
    let concurrent = Introspector::new(three_tile_api().slow("StonecradleHex", 30))
        .with_concurrency(4)
        .discover()
        .await
        .unwrap();

    assert_eq!(sequential, concurrent);
}

#[tokio::test]
async fn test_second_tile_failure_aborts_discovery() {
    let api = FakeWarApi::default()
        .tile("StonecradleHex", vec![item("The Cord", "Major", 0.1, 0.1)])
        .failing("AllodsBightHex");

    let err = Introspector::new(api).discover().await.unwrap_err();
    assert!(err.is_connection_error());
    assert!(err.to_string().contains("AllodsBightHex"));
}

#[tokio::test]
async fn test_sequential_failure_stops_further_requests() {
    let api = FakeWarApi::default()
        .failing("StonecradleHex")
        .tile("AllodsBightHex", vec![]);

    let introspector = Introspector::new(api);
    assert!(introspector.discover().await.is_err());

    let requested = introspector.source().requested.lock().unwrap().clone();
    assert_eq!(requested, ["StonecradleHex"]);
}

#[tokio::test]
async fn test_tile_list_failure() {
    struct Down;

    #[async_trait]
    impl MapSource for Down {
        async fn tiles(&self) -> Result<Vec<TileId>> {
            Err(Error::ConnectionFailed {
                url: "http://fake/maps".to_string(),
                source: "connection refused".into(),
            })
        }

        async fn tile_details(&self, _tile: &TileId) -> Result<Vec<MapTextItem>> {
            unreachable!("details requested without a tile list")
        }
    }

    let err = Introspector::new(Down).discover().await.unwrap_err();
    assert!(err.is_connection_error());
}
