use std::path::PathBuf;

/// A single parsed `(x, y)` pair.
///
/// Values keep full `f64` precision; rounding only happens when the
/// literal is written out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Points in input order – output order is the same.
pub type PointSequence = Vec<Coordinate>;

/// The three positional inputs of one run.
///
/// Only the count is checked upstream (by the CLI); `variable` is written
/// verbatim into the output, so sanitising it is the caller's job.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub source: PathBuf,
    pub variable: String,
    pub destination: PathBuf,
}
