//! Generate command implementation.
//!
//! Produces the map code file. This command:
//! 1. Fetches the tile list and every tile's static data
//! 2. Renders the per-tile blocks, divider, trait and top-level enum
//! 3. Writes the document in one call, or prints it with `--stdout`
//!
//! Nothing is written unless every step succeeds, so a failed run leaves
//! any previous output file untouched.

use crate::formatters::format_output;
use anyhow::{Context, Result};
use hexmap_codegen::{GeneratedDocument, MapGenerator};
use hexmap_core::GeneratorConfig;
use hexmap_core::cli::{ExitCode, OutputFormat};
use hexmap_core::traits::MapSource;
use hexmap_introspector::{Introspector, WarApiClient, WorldInfo};
use serde::Serialize;
use tracing::info;

/// Result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    /// Code style used
    pub style: String,
    /// Number of tiles emitted
    pub tiles: usize,
    /// Number of locations across all tiles
    pub locations: usize,
    /// Size of the generated text in bytes
    pub bytes: usize,
    /// File written
    pub output: String,
}

impl GenerationSummary {
    fn new(world: &WorldInfo, doc: &GeneratedDocument, bytes: usize, output: String) -> Self {
        Self {
            style: doc.style().to_string(),
            tiles: world.tiles.len(),
            locations: world.location_count(),
            bytes,
            output,
        }
    }
}

/// Fetches map data from `source` and renders the document in memory.
///
/// # Errors
///
/// Returns an error naming the failing step if any request fails, a
/// response cannot be decoded, or the strict identifier policy rejects
/// the data.
pub async fn generate_document<S: MapSource>(
    source: S,
    config: &GeneratorConfig,
) -> Result<(WorldInfo, GeneratedDocument)> {
    let world = Introspector::new(source)
        .with_concurrency(config.source.concurrency)
        .discover()
        .await
        .context("failed to fetch map data")?;

    let doc = MapGenerator::new(config.output.style)
        .context("failed to load code templates")?
        .with_policy(config.output.policy())
        .generate(&world)
        .context("failed to generate map code")?;

    Ok((world, doc))
}

/// Generates the document and writes it to the configured output path.
///
/// # Errors
///
/// Returns an error if generation fails or the file cannot be written.
pub async fn generate_to_file<S: MapSource>(
    source: S,
    config: &GeneratorConfig,
) -> Result<GenerationSummary> {
    let (world, doc) = generate_document(source, config).await?;

    let path = &config.output.path;
    let bytes = doc
        .write_to(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(GenerationSummary::new(
        &world,
        &doc,
        bytes,
        path.display().to_string(),
    ))
}

/// Runs the generate command against the War API.
///
/// With `to_stdout` the document is printed instead of written and no
/// summary is shown, so the output can be piped.
pub async fn run(
    config: &GeneratorConfig,
    to_stdout: bool,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    info!("Fetching map data from {}", config.source.base_url);

    let client = WarApiClient::new(&config.source).context("failed to create HTTP client")?;

    if to_stdout {
        let (_, doc) = generate_document(client, config).await?;
        print!("{}", doc.render());
        return Ok(ExitCode::SUCCESS);
    }

    let summary = generate_to_file(client, config).await?;
    println!("{}", format_output(&summary, output_format)?);

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hexmap_core::{CodeStyle, MapTextItem, TileId};
    use tempfile::TempDir;

    struct TwoTiles;

    #[async_trait]
    impl MapSource for TwoTiles {
        async fn tiles(&self) -> hexmap_core::Result<Vec<TileId>> {
            Ok(vec![TileId::new("StonecradleHex"), TileId::new("AllodsBightHex")])
        }

        async fn tile_details(&self, tile: &TileId) -> hexmap_core::Result<Vec<MapTextItem>> {
            let text = if tile.as_str() == "StonecradleHex" {
                "The Heir's Knife"
            } else {
                "Mercy's Wail"
            };
            Ok(vec![MapTextItem {
                text: text.to_string(),
                map_marker_type: "Major".to_string(),
                x: 0.5,
                y: 0.25,
            }])
        }
    }

    fn config_in(dir: &TempDir) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        config.output.path = dir.path().join("mapdump.txt");
        config
    }

    #[tokio::test]
    async fn test_generate_document_in_memory() {
        let (world, doc) = generate_document(TwoTiles, &GeneratorConfig::default())
            .await
            .unwrap();

        assert_eq!(world.tiles.len(), 2);
        assert_eq!(doc.tile_names(), ["Stonecradle", "AllodsBight"]);
        assert!(doc.render().contains("Stonecradle::TheHeirsKnife => (0.5, 0.25),"));
    }

    #[tokio::test]
    async fn test_generate_to_file_summary() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.output.style = CodeStyle::Rich;

        let summary = generate_to_file(TwoTiles, &config).await.unwrap();

        let written = std::fs::read_to_string(&config.output.path).unwrap();
        assert_eq!(summary.bytes, written.len());
        assert_eq!(summary.tiles, 2);
        assert_eq!(summary.locations, 2);
        assert_eq!(summary.style, "rich");
        assert!(written.contains("impl Location for Map {"));
    }

    #[tokio::test]
    async fn test_generate_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.output.path = dir.path().join("no").join("such").join("mapdump.txt");

        let err = generate_to_file(TwoTiles, &config).await.unwrap_err();
        assert!(err.to_string().starts_with("failed to write"));
    }
}
