//! Grid size calculation for a consistent on-screen stroke width.
//!
//! The editor scales a component's SVG into a box of `grid * 10` pixels, so a
//! stroke of `s` SVG units appears `s * grid * 10 / viewbox` pixels wide.
//! Solving for `grid` with a target visual stroke `t` gives
//! `grid = t * viewbox / (s * 10)`, applied to width and height independently.

use crate::error::GeometryError;
use crate::model::Endpoint;

/// Pixels per grid unit when the editor renders a component.
pub const PIXELS_PER_GRID_UNIT: f64 = 10.0;

/// Resolution of computed grid sizes.
pub const GRID_STEP: f64 = 0.5;

/// Target stroke and size floors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    pub target_stroke: f64,
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            target_stroke: 3.0,
            min_width: 1.5,
            min_height: 1.5,
        }
    }
}

/// Grid size of a component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSize {
    pub width: f64,
    pub height: f64,
}

/// Compute the grid size that renders `stroke_width` as `params.target_stroke` pixels.
pub fn normalized_grid_size(
    viewbox_width: f64,
    viewbox_height: f64,
    stroke_width: f64,
    params: GridParams,
) -> Result<GridSize, GeometryError> {
    if !(viewbox_width > 0.0 && viewbox_height > 0.0)
        || !viewbox_width.is_finite()
        || !viewbox_height.is_finite()
    {
        return Err(GeometryError::InvalidViewBox {
            width: viewbox_width,
            height: viewbox_height,
        });
    }
    if !(stroke_width > 0.0 && stroke_width.is_finite()) {
        return Err(GeometryError::InvalidStrokeWidth(stroke_width));
    }
    if !(params.target_stroke > 0.0 && params.target_stroke.is_finite()) {
        return Err(GeometryError::InvalidTargetStroke(params.target_stroke));
    }

    let grid = |dim: f64| (params.target_stroke * dim) / (stroke_width * PIXELS_PER_GRID_UNIT);
    Ok(GridSize {
        width: round_to_step(grid(viewbox_width)).max(params.min_width),
        height: round_to_step(grid(viewbox_height)).max(params.min_height),
    })
}

/// Round to the nearest [`GRID_STEP`], ties to even.
pub fn round_to_step(value: f64) -> f64 {
    (value / GRID_STEP).round_ties_even() * GRID_STEP
}

/// Pixel width a stroke of `stroke_width` SVG units has when the component is
/// `grid_width` units wide.
pub fn visual_stroke(stroke_width: f64, grid_width: f64, viewbox_width: f64) -> f64 {
    stroke_width * (grid_width * PIXELS_PER_GRID_UNIT / viewbox_width)
}

/// Move endpoints from an `old` grid size to a `new` one, keeping
/// `x / width` and `y / height` unchanged.
pub fn rescale_endpoints(
    endpoints: &mut [Endpoint],
    old: GridSize,
    new: GridSize,
) -> Result<(), GeometryError> {
    if !(old.width > 0.0 && old.height > 0.0) {
        return Err(GeometryError::DegenerateGridSize {
            width: old.width,
            height: old.height,
        });
    }
    for ep in endpoints {
        ep.x = ep.x / old.width * new.width;
        ep.y = ep.y / old.height * new.height;
    }
    Ok(())
}
