pub mod cli;
pub mod error;
pub mod logging;
pub mod model;
pub mod parser;
pub mod writer;

pub use error::ConvertError;
pub use model::{ConversionRequest, Coordinate, PointSequence};

use anyhow::Context;
use tracing::info;

/// Convert one listing into an OpenSCAD declaration; returns the number
/// of points written.
///
/// The source is read and parsed completely before the destination is
/// opened, so a read or parse failure never creates or touches the output.
pub fn convert(request: &ConversionRequest) -> Result<usize, ConvertError> {
    // 1. ── Read ───────────────────────────────────────────────────────
    let text = std::fs::read_to_string(&request.source).map_err(|source| {
        ConvertError::ReadSource {
            path: request.source.clone(),
            source,
        }
    })?;

    // 2. ── Parse ──────────────────────────────────────────────────────
    let points = parser::parse_points(&text)?;

    // 3. ── Write output ───────────────────────────────────────────────
    let label = request.source.display().to_string();
    writer::scad::emit(&label, &request.variable, &points, &request.destination).map_err(
        |source| ConvertError::WriteDestination {
            path: request.destination.clone(),
            source,
        },
    )?;

    info!(
        points = points.len(),
        output = %request.destination.display(),
        "wrote `{}`",
        request.variable
    );
    Ok(points.len())
}

pub fn run(request: &ConversionRequest) -> anyhow::Result<()> {
    convert(request)
        .with_context(|| format!("Converting {}", request.source.display()))?;
    Ok(())
}
