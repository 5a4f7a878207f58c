//! Pipeline configuration loaded from `pipeline.toml`.
//!
//! | Section               | Purpose                                        |
//! |-----------------------|------------------------------------------------|
//! | `[normalize]`         | Stroke policy, target stroke and size floors   |
//! | `[defaults]`          | Size and category for icons without an entry   |
//! | `[components.<id>]`   | Curated size, category and endpoint layout     |
//!
//! Every section is optional. Without a file the shipped table is used
//! ([`PipelineConfig::builtin`]).

use anyhow::{Context, Result};
use camino::Utf8Path;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the config file looked up inside the component directory.
pub const CONFIG_FILE_NAME: &str = "pipeline.toml";

/// Curated table of the built-in symbol library.
const BUILTIN_CONFIG: &str = include_str!("../data/pipeline.toml");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub normalize: NormalizeConfig,
    pub defaults: ComponentMetadata,
    pub components: IndexMap<String, ComponentMetadata>,
}

impl PipelineConfig {
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    pub fn from_path(path: &Utf8Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        Self::from_str(&content).with_context(|| format!("Invalid config {}", path))
    }

    /// The shipped `data/pipeline.toml`: curated sizes and categories of the
    /// built-in symbols (ground included).
    pub fn builtin() -> Result<Self> {
        Self::from_str(BUILTIN_CONFIG).context("Invalid built-in config")
    }

    /// Load `explicit` if given, else `<dir>/pipeline.toml` if it exists, else
    /// the [`builtin`](Self::builtin) table.
    pub fn resolve(explicit: Option<&Utf8Path>, dir: &Utf8Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            log::debug!("Using config {}", candidate);
            Self::from_path(&candidate)
        } else {
            Self::builtin()
        }
    }

    /// Curated metadata for `id`, falling back to `[defaults]`.
    pub fn metadata_for(&self, id: &str) -> &ComponentMetadata {
        self.components.get(id).unwrap_or(&self.defaults)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// [normalize]
// ────────────────────────────────────────────────────────────────────────────

/// Where the SVG stroke width used for normalization comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrokeMode {
    /// Use `assumed_stroke_width` for every component.
    Assumed,
    /// Use the most frequent `stroke-width` declared in the component's SVG.
    #[default]
    Detected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeConfig {
    pub stroke: StrokeMode,
    /// SVG stroke width used by [`StrokeMode::Assumed`], and by
    /// [`StrokeMode::Detected`] when an icon declares none.
    pub assumed_stroke_width: f64,
    /// Desired on-screen stroke width in pixels.
    pub target_stroke: f64,
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            stroke: StrokeMode::default(),
            assumed_stroke_width: 10.0,
            target_stroke: 3.0,
            min_width: 1.5,
            min_height: 1.5,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// [defaults] / [components.<id>]
// ────────────────────────────────────────────────────────────────────────────

/// Initial endpoint arrangement written by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointLayout {
    /// A single endpoint at top-center (ground symbols).
    Top,
    /// One endpoint on each horizontal side at mid-height.
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentMetadata {
    pub width: f64,
    pub height: f64,
    pub category: String,
    /// Overrides the layout derived from id and category.
    pub layout: Option<EndpointLayout>,
}

impl Default for ComponentMetadata {
    fn default() -> Self {
        Self {
            width: 4.0,
            height: 3.0,
            category: "passive".to_string(),
            layout: None,
        }
    }
}
