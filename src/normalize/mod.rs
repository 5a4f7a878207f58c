//! Stroke normalization of component records.
//!
//! - [`geometry`] – Grid size formula, rounding and endpoint rescaling
//! - [`policy`] – Assumed vs. detected stroke width

pub mod geometry;
pub mod policy;

pub use geometry::{GridParams, GridSize, normalized_grid_size, rescale_endpoints, visual_stroke};
pub use policy::StrokePolicy;

use crate::config::NormalizeConfig;
use crate::error::SkipReason;
use crate::model::{Component, ViewBox};
use crate::store::ComponentStore;
use crate::svg::scan_fragment;
use anyhow::{Context, Result};
use camino::Utf8Path;

/// Settings of one normalization run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    pub policy: StrokePolicy,
    pub params: GridParams,
}

impl Normalizer {
    pub fn from_config(cfg: &NormalizeConfig) -> Self {
        Self {
            policy: StrokePolicy::from_config(cfg),
            params: GridParams {
                target_stroke: cfg.target_stroke,
                min_width: cfg.min_width,
                min_height: cfg.min_height,
            },
        }
    }

    /// Normalize `component` in place and describe what changed.
    ///
    /// On `Err` the component is left untouched.
    pub fn normalize(&self, component: &mut Component) -> Result<Normalized, SkipReason> {
        let info = scan_fragment(&component.svg)
            .map_err(|e| SkipReason::MalformedSvg(e.to_string()))?;
        let viewbox = info.viewbox.ok_or(SkipReason::MissingViewBox)?;
        let stroke_width = self.policy.stroke_width(&info)?;

        let new = normalized_grid_size(viewbox.width, viewbox.height, stroke_width, self.params)?;
        let old = GridSize {
            width: component.width,
            height: component.height,
        };
        // Same size: leave endpoints bit-identical so a rerun is a no-op.
        let changed = old != new;
        if changed {
            rescale_endpoints(&mut component.endpoints, old, new)?;
            component.width = new.width;
            component.height = new.height;
        }

        Ok(Normalized {
            viewbox,
            stroke_width,
            old,
            new,
            visual_stroke: visual_stroke(stroke_width, new.width, viewbox.width),
            changed,
        })
    }
}

/// Result of normalizing one component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    pub viewbox: ViewBox,
    pub stroke_width: f64,
    pub old: GridSize,
    pub new: GridSize,
    /// Stroke width in pixels after normalization.
    pub visual_stroke: f64,
    pub changed: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Batch
// ────────────────────────────────────────────────────────────────────────────

/// What a normalization batch did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeSummary {
    pub updated: Vec<String>,
    pub unchanged: Vec<String>,
    /// File name and reason of every skipped file.
    pub skipped: Vec<(String, SkipReason)>,
}

impl NormalizeSummary {
    pub fn total(&self) -> usize {
        self.updated.len() + self.unchanged.len() + self.skipped.len()
    }
}

/// Outcome for a single file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Updated(Normalized),
    Unchanged(Normalized),
    Skipped(SkipReason),
}

/// Normalize one component file. Read and write failures are returned as errors;
/// everything else is a [`FileOutcome`].
pub fn normalize_file<S: ComponentStore>(
    store: &mut S,
    path: &Utf8Path,
    normalizer: &Normalizer,
    dry_run: bool,
) -> Result<FileOutcome> {
    let text = store.read_to_string(path)?;
    let mut component = match Component::from_json(&text) {
        Ok(c) => c,
        Err(e) => return Ok(FileOutcome::Skipped(SkipReason::NotAComponent(e.to_string()))),
    };
    let result = match normalizer.normalize(&mut component) {
        Ok(r) => r,
        Err(reason) => return Ok(FileOutcome::Skipped(reason)),
    };
    log::info!(
        "✓ {:20} SVG stroke: {:4}  ViewBox: {:>3}×{:<3}  Grid: {:4.1}×{:4.1} → {:4.1}×{:4.1}  Visual: {:.1}px{}",
        component.name,
        result.stroke_width,
        result.viewbox.width,
        result.viewbox.height,
        result.old.width,
        result.old.height,
        result.new.width,
        result.new.height,
        result.visual_stroke,
        if result.changed { "" } else { "  (unchanged)" },
    );
    if !result.changed {
        return Ok(FileOutcome::Unchanged(result));
    }
    if !dry_run {
        let json = component
            .to_json_pretty()
            .with_context(|| format!("Failed to serialize {}", path))?;
        store.write_string(path, &json)?;
    }
    Ok(FileOutcome::Updated(result))
}

/// Normalize every `*.json` component in `dir`, in file name order.
///
/// Files that cannot be normalized are skipped with a warning. I/O failures
/// stop the batch.
pub fn normalize_dir<S: ComponentStore>(
    store: &mut S,
    dir: &Utf8Path,
    normalizer: &Normalizer,
    dry_run: bool,
) -> Result<NormalizeSummary> {
    let files = store.list_files(dir, "json")?;
    log::info!(
        "Normalizing {} components ({:?} stroke width, target {}px)",
        files.len(),
        normalizer.policy.mode(),
        normalizer.params.target_stroke
    );

    let mut summary = NormalizeSummary::default();
    for path in files {
        let file_name = path.file_name().unwrap_or(path.as_str()).to_string();
        match normalize_file(store, &path, normalizer, dry_run)? {
            FileOutcome::Updated(_) => summary.updated.push(file_name),
            FileOutcome::Unchanged(_) => summary.unchanged.push(file_name),
            FileOutcome::Skipped(reason) => {
                log::warn!("⚠ {}: {}, skipping", file_name, reason);
                summary.skipped.push((file_name, reason));
            }
        }
    }

    log::info!(
        "{} {} of {} components, {} unchanged, {} skipped",
        if dry_run { "Would update" } else { "Updated" },
        summary.updated.len(),
        summary.total(),
        summary.unchanged.len(),
        summary.skipped.len()
    );
    Ok(summary)
}
