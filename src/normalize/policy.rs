//! Stroke width sourcing.

use crate::config::{NormalizeConfig, StrokeMode};
use crate::error::SkipReason;
use crate::svg::{FragmentInfo, dominant_value};

/// Where a component's SVG stroke width comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokePolicy {
    /// The same width for every component.
    Assumed(f64),
    /// The most frequent declared width; `fallback` when nothing is declared.
    Detected { fallback: f64 },
}

impl StrokePolicy {
    pub fn from_config(cfg: &NormalizeConfig) -> Self {
        match cfg.stroke {
            StrokeMode::Assumed => StrokePolicy::Assumed(cfg.assumed_stroke_width),
            StrokeMode::Detected => StrokePolicy::Detected {
                fallback: cfg.assumed_stroke_width,
            },
        }
    }

    pub fn mode(&self) -> StrokeMode {
        match self {
            StrokePolicy::Assumed(_) => StrokeMode::Assumed,
            StrokePolicy::Detected { .. } => StrokeMode::Detected,
        }
    }

    /// Stroke width to normalize a fragment with. Positivity is checked later
    /// by the grid size calculation.
    pub fn stroke_width(&self, info: &FragmentInfo) -> Result<f64, SkipReason> {
        match *self {
            StrokePolicy::Assumed(width) => Ok(width),
            StrokePolicy::Detected { fallback } => {
                if info.stroke_declarations.is_empty() {
                    log::debug!("No stroke-width declared, using {}", fallback);
                    return Ok(fallback);
                }
                dominant_value(&info.stroke_widths()).ok_or_else(|| {
                    SkipReason::UnparseableStrokeWidth(info.stroke_declarations.clone())
                })
            }
        }
    }
}
