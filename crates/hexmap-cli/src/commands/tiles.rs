//! Tiles command implementation.
//!
//! Lists the tiles published by the map list endpoint together with the
//! enum name each one becomes in generated code.

use crate::formatters::format_output;
use anyhow::{Context, Result};
use hexmap_core::GeneratorConfig;
use hexmap_core::cli::{ExitCode, OutputFormat};
use hexmap_core::traits::MapSource;
use hexmap_introspector::{Introspector, WarApiClient};
use serde::Serialize;

/// One listed tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileEntry {
    /// Upstream identifier
    pub id: String,
    /// Generated enum name
    pub name: String,
}

/// Tiles in upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileListing {
    /// Number of tiles
    pub count: usize,
    /// Listed tiles
    pub tiles: Vec<TileEntry>,
}

/// Fetches the tile list from `source`.
///
/// # Errors
///
/// Returns an error if the tile list cannot be fetched or decoded.
pub async fn list_tiles<S: MapSource>(source: S) -> Result<TileListing> {
    let tiles: Vec<TileEntry> = Introspector::new(source)
        .list_tiles()
        .await
        .context("failed to fetch tile list")?
        .into_iter()
        .map(|(id, name)| TileEntry {
            id: id.into_inner(),
            name,
        })
        .collect();

    Ok(TileListing {
        count: tiles.len(),
        tiles,
    })
}

/// Runs the tiles command against the War API.
pub async fn run(config: &GeneratorConfig, output_format: OutputFormat) -> Result<ExitCode> {
    let client = WarApiClient::new(&config.source).context("failed to create HTTP client")?;
    let listing = list_tiles(client).await?;

    println!("{}", format_output(&listing, output_format)?);
    Ok(ExitCode::SUCCESS)
}
