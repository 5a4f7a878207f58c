//! SVG icon → component record conversion.

use crate::config::{ComponentMetadata, EndpointLayout, PipelineConfig};
use crate::model::{Component, Direction, Endpoint};
use crate::store::ComponentStore;
use crate::svg::extract_svg;
use anyhow::{Context, Result, anyhow, bail};
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Component id for an icon file name: lowercase, runs of anything other than
/// `[a-z0-9]` collapsed to `-`, no leading or trailing dashes.
pub fn component_id(file_name: &str) -> String {
    let stem = strip_svg_extension(file_name).to_lowercase();
    let mut id = String::with_capacity(stem.len());
    for ch in stem.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            id.push(ch);
        } else if !id.ends_with('-') {
            id.push('-');
        }
    }
    id.trim_matches('-').to_string()
}

/// Display name for an icon file name: the file stem, trimmed.
pub fn display_name(file_name: &str) -> String {
    strip_svg_extension(file_name).trim().to_string()
}

fn strip_svg_extension(file_name: &str) -> &str {
    file_name.strip_suffix(".svg").unwrap_or(file_name)
}

/// Default endpoints for a component of the given size.
pub fn default_endpoints(id: &str, meta: &ComponentMetadata) -> Vec<Endpoint> {
    let layout = meta.layout.unwrap_or(if id == "ground" && meta.category == "power" {
        EndpointLayout::Top
    } else {
        EndpointLayout::Horizontal
    });
    match layout {
        EndpointLayout::Top => vec![Endpoint::new("top", meta.width / 2.0, 0.0, Direction::Up)],
        EndpointLayout::Horizontal => vec![
            Endpoint::new("left", 0.0, meta.height / 2.0, Direction::Left),
            Endpoint::new("right", meta.width, meta.height / 2.0, Direction::Right),
        ],
    }
}

/// Build a component record from an icon file's name and content.
pub fn convert_svg(file_name: &str, text: &str, config: &PipelineConfig) -> Result<Component> {
    let id = component_id(file_name);
    if id.is_empty() {
        bail!("File name {:?} yields an empty component id", file_name);
    }
    let name = display_name(file_name);
    let source = extract_svg(text)?;
    if source.viewbox.is_none() {
        log::warn!("{}: no viewBox or size attributes, stroke normalization will skip it", file_name);
    }
    let meta = config.metadata_for(&id);

    Ok(Component {
        endpoints: default_endpoints(&id, meta),
        description: format!("{} component", name),
        svg: source.to_fragment(),
        category: meta.category.clone(),
        width: meta.width,
        height: meta.height,
        id,
        name,
        extra: IndexMap::new(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Batch
// ────────────────────────────────────────────────────────────────────────────

/// What a conversion batch did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertSummary {
    /// Ids of converted components, in processing order.
    pub converted: Vec<String>,
    /// File name and error message of every file that failed.
    pub failed: Vec<(String, String)>,
}

impl ConvertSummary {
    /// Every candidate file failed: nothing was produced.
    pub fn is_total_failure(&self) -> bool {
        self.converted.is_empty() && !self.failed.is_empty()
    }

    /// Converted ids, sorted: the list the editor loads its built-in library from.
    pub fn component_index(&self) -> Vec<String> {
        let mut ids = self.converted.clone();
        ids.sort();
        ids
    }
}

/// Convert one icon file and write `<id>.json` next to it in `out_dir`.
pub fn convert_file<S: ComponentStore>(
    store: &mut S,
    path: &Utf8Path,
    out_dir: &Utf8Path,
    config: &PipelineConfig,
) -> Result<Component> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("No file name in {}", path))?;
    let text = store.read_to_string(path)?;
    let component =
        convert_svg(file_name, &text, config).with_context(|| format!("Failed to convert {}", path))?;
    let out_path = component_path(out_dir, &component.id);
    let json = component
        .to_json_pretty()
        .with_context(|| format!("Failed to serialize {}", out_path))?;
    store.write_string(&out_path, &json)?;
    Ok(component)
}

pub fn component_path(dir: &Utf8Path, id: &str) -> Utf8PathBuf {
    dir.join(format!("{}.json", id))
}

/// Convert every `*.svg` file in `dir`, writing components into the same directory.
///
/// A file that fails to convert is logged and skipped. Two files mapping to the
/// same id are reported as a failure of the second one.
pub fn convert_dir<S: ComponentStore>(
    store: &mut S,
    dir: &Utf8Path,
    config: &PipelineConfig,
) -> Result<ConvertSummary> {
    let files = store.list_files(dir, "svg")?;
    let mut summary = ConvertSummary::default();
    if files.is_empty() {
        log::info!("No SVG files found in {}", dir);
        return Ok(summary);
    }
    log::info!("Found {} SVG files to convert", files.len());

    let mut seen: BTreeSet<String> = BTreeSet::new();
    for path in files {
        let file_name = path.file_name().unwrap_or(path.as_str()).to_string();
        let id = component_id(&file_name);
        if !id.is_empty() && !seen.insert(id.clone()) {
            let msg = format!("component id '{}' already produced by another file", id);
            log::error!("✗ Error converting {}: {}", file_name, msg);
            summary.failed.push((file_name, msg));
            continue;
        }
        match convert_file(store, &path, dir, config) {
            Ok(component) => {
                log::info!("✓ Converted {} -> {}.json", file_name, component.id);
                summary.converted.push(component.id);
            }
            Err(e) => {
                log::error!("✗ Error converting {}: {:#}", file_name, e);
                summary.failed.push((file_name, format!("{:#}", e)));
            }
        }
    }

    log::info!(
        "Successfully converted {} components ({} failed)",
        summary.converted.len(),
        summary.failed.len()
    );
    if !summary.converted.is_empty() {
        log::info!("Component IDs: {}", summary.component_index().join(", "));
    }
    Ok(summary)
}
