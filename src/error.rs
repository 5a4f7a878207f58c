//! Typed per-file outcomes that a batch recovers from.

use thiserror::Error;

/// Invalid input to the grid size calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("viewBox dimensions must be positive, got {width}×{height}")]
    InvalidViewBox { width: f64, height: f64 },
    #[error("stroke width must be positive, got {0}")]
    InvalidStrokeWidth(f64),
    #[error("target stroke must be positive, got {0}")]
    InvalidTargetStroke(f64),
    #[error("current grid size {width}×{height} cannot be rescaled")]
    DegenerateGridSize { width: f64, height: f64 },
}

/// Why the normalizer left a component file untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipReason {
    #[error("not a component record: {0}")]
    NotAComponent(String),
    #[error("malformed SVG markup: {0}")]
    MalformedSvg(String),
    #[error("no viewBox found")]
    MissingViewBox,
    #[error("stroke-width declarations present but none is numeric: {0:?}")]
    UnparseableStrokeWidth(Vec<String>),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
