//! Validate command implementation: map-file inspection.

use std::path::Path;

use serde::Serialize;
use warfront::World;

use super::{CliError, OutputFormat};

/// JSON-serializable summary of a loaded map.
#[derive(Debug, Serialize)]
struct MapSummary {
    /// Number of provinces loaded.
    provinces: usize,
    /// Bounding-box width.
    width: u16,
    /// Bounding-box height.
    height: u16,
    /// Cities on the map, in position order.
    cities: Vec<CitySummary>,
}

/// One city in the summary.
#[derive(Debug, Serialize)]
struct CitySummary {
    /// City name.
    name: String,
    /// Point value.
    points: u32,
    /// X coordinate of the province.
    x: u16,
    /// Y coordinate of the province.
    y: u16,
}

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its map data is
/// malformed.
pub(crate) fn execute(map: &Path, format: OutputFormat) -> Result<(), CliError> {
    let data = std::fs::read_to_string(map)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", map.display())))?;
    let world = World::load(&data)
        .map_err(|e| CliError::new(format!("{}: {e}", map.display())))?;

    let summary = MapSummary {
        provinces: world.len(),
        width: world.width(),
        height: world.height(),
        cities: world
            .cities()
            .map(|(position, city)| CitySummary {
                name: city.name.clone(),
                points: city.points,
                x: position.x,
                y: position.y,
            })
            .collect(),
    };

    match format {
        OutputFormat::Text => {
            println!(
                "{}: {} provinces in a {}x{} box, {} cities",
                map.display(),
                summary.provinces,
                summary.width,
                summary.height,
                summary.cities.len()
            );
            for city in &summary.cities {
                println!("- {} ({} points) at ({}, {})", city.name, city.points, city.x, city.y);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
