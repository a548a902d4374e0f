//! HTTP client for the War API map endpoints.
//!
//! # Examples
//!
//! ```
//! use hexmap_core::{SourceConfig, TileId};
//! use hexmap_introspector::WarApiClient;
//!
//! let config = SourceConfig {
//!     base_url: "https://example.com/api/worldconquest/maps/".to_string(),
//!     ..Default::default()
//! };
//! let client = WarApiClient::new(&config).unwrap();
//!
//! assert_eq!(client.tiles_url(), "https://example.com/api/worldconquest/maps");
//! assert_eq!(
//!     client.static_url(&TileId::new("WestgateHex")),
//!     "https://example.com/api/worldconquest/maps/WestgateHex/static"
//! );
//! ```

use async_trait::async_trait;
use hexmap_core::traits::MapSource;
use hexmap_core::{Error, MapTextItem, Result, SourceConfig, TileId, TileStatic};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// [`MapSource`] backed by the War API.
///
/// Performs exactly one request for the tile list and one per tile. There
/// are no retries; the first failure is returned to the caller.
#[derive(Debug, Clone)]
pub struct WarApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl WarApiClient {
    /// Creates a client from source settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the HTTP client cannot be built.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|e| Error::ConfigError {
            message: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// URL of the tile list.
    #[must_use]
    pub fn tiles_url(&self) -> String {
        self.base_url.clone()
    }

    /// URL of a tile's static payload.
    #[must_use]
    pub fn static_url(&self, tile: &TileId) -> String {
        format!("{}/{}/static", self.base_url, tile)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::ConnectionFailed {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| Error::ConnectionFailed {
            url: url.to_string(),
            source: Box::new(e),
        })?;

        parse_body(url, &body)
    }
}

/// Decodes a response body, naming the URL in the error.
fn parse_body<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| Error::SerializationError {
        message: format!("unexpected response from {url}: {e}"),
        source: Some(e),
    })
}

#[async_trait]
impl MapSource for WarApiClient {
    async fn tiles(&self) -> Result<Vec<TileId>> {
        self.get_json(&self.tiles_url()).await
    }

    async fn tile_details(&self, tile: &TileId) -> Result<Vec<MapTextItem>> {
        let details: TileStatic = self.get_json(&self.static_url(tile)).await?;
        Ok(details.map_text_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> WarApiClient {
        let config = SourceConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        };
        WarApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_default_urls() {
        let client = WarApiClient::new(&SourceConfig::default()).unwrap();
        assert_eq!(
            client.tiles_url(),
            "https://war-service-live.foxholeservices.com/api/worldconquest/maps"
        );
        assert_eq!(
            client.static_url(&TileId::new("DeadLandsHex")),
            "https://war-service-live.foxholeservices.com/api/worldconquest/maps/DeadLandsHex/static"
        );
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        let client = client("http://localhost:8080/maps//");
        assert_eq!(client.tiles_url(), "http://localhost:8080/maps");
    }

    #[test]
    fn test_client_with_timeout() {
        let config = SourceConfig {
            timeout_seconds: Some(5),
            ..Default::default()
        };
        assert!(WarApiClient::new(&config).is_ok());
    }

    #[test]
    fn test_parse_tile_list() {
        let tiles: Vec<TileId> =
            parse_body("u", br#"["StonecradleHex", "AllodsBightHex"]"#).unwrap();
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[1].as_str(), "AllodsBightHex");
    }

    #[test]
    fn test_parse_static_missing_field_names_url() {
        let err = parse_body::<TileStatic>("http://x/maps/A/static", br#"{"mapItems": []}"#)
            .unwrap_err();
        assert!(err.is_serialization_error());
        assert!(err.to_string().contains("http://x/maps/A/static"));
    }

    #[test]
    fn test_parse_non_json_body() {
        let err = parse_body::<Vec<TileId>>("u", b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(err.is_serialization_error());
    }

    /// Serves canned responses keyed by request path on a local port.
    fn serve(routes: Vec<(&'static str, u16, &'static str)>) -> String {
        use std::io::{BufRead, BufReader, Write};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();
                let path = request_line.split_whitespace().nth(1).unwrap_or("").to_string();
                loop {
                    let mut header = String::new();
                    if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                        break;
                    }
                }

                let (status, body) = routes
                    .iter()
                    .find(|(route, _, _)| *route == path)
                    .map_or((404, ""), |(_, status, body)| (*status, *body));
                let response = format!(
                    "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).unwrap();
            }
        });

        format!("http://{addr}/maps")
    }

    #[tokio::test]
    async fn test_refused_connection_is_connection_failed() {
        // Port 1 is reserved and nothing listens on it.
        let client = client("http://127.0.0.1:1/maps");

        let err = client.tiles().await.unwrap_err();
        assert!(matches!(err, Error::ConnectionFailed { .. }));
        assert!(err.is_connection_error());
        assert!(err.to_string().contains("http://127.0.0.1:1/maps"));
    }

    #[tokio::test]
    async fn test_tile_list_and_details_over_http() {
        let base = serve(vec![
            ("/maps", 200, r#"["AHex"]"#),
            (
                "/maps/AHex/static",
                200,
                r#"{"mapTextItems":[{"text":"Alpha","x":0.5,"y":0.25,"mapMarkerType":"Major"}]}"#,
            ),
        ]);
        let client = client(&base);

        let tiles = client.tiles().await.unwrap();
        assert_eq!(tiles, vec![TileId::new("AHex")]);

        let items = client.tile_details(&tiles[0]).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Alpha");
        assert_eq!(items[0].map_marker_type, "Major");
    }

    #[tokio::test]
    async fn test_server_error_is_http_status() {
        let base = serve(vec![
            ("/maps", 200, r#"["AHex"]"#),
            ("/maps/AHex/static", 500, "{}"),
        ]);
        let client = client(&base);

        let tiles = client.tiles().await.unwrap();
        let err = client.tile_details(&tiles[0]).await.unwrap_err();

        match &err {
            Error::HttpStatus { url, status } => {
                assert_eq!(*status, 500);
                assert_eq!(url, &format!("{base}/AHex/static"));
            }
            other => panic!("Expected HttpStatus, got {other:?}"),
        }
        assert!(err.is_connection_error());
    }

    #[tokio::test]
    async fn test_html_body_with_ok_status_is_serialization_error() {
        let base = serve(vec![("/maps", 200, "<html>maintenance</html>")]);

        let err = client(&base).tiles().await.unwrap_err();
        assert!(err.is_serialization_error());
    }
}
