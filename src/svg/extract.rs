//! Extraction of inner markup and viewBox from a complete SVG icon file.

use crate::model::ViewBox;
use crate::svg::helpers::parse_length;
use anyhow::{Context, Result, bail};
use roxmltree::{Document, ParsingOptions};

/// The parts of an icon file the converter keeps.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgSource {
    /// Source text between the root element's first and last child, trimmed.
    pub inner: String,
    pub viewbox: Option<ViewBox>,
}

impl SvgSource {
    /// Inner markup prefixed with the viewBox comment, as stored in a component.
    pub fn to_fragment(&self) -> String {
        match &self.viewbox {
            Some(vb) => format!("{}\n    {}", viewbox_comment(vb), self.inner),
            None => self.inner.clone(),
        }
    }
}

/// The comment that records the original viewBox inside a stored fragment.
pub fn viewbox_comment(vb: &ViewBox) -> String {
    format!("<!-- viewBox: {} -->", vb)
}

/// Parse an SVG document and extract its inner markup and viewBox.
///
/// The XML prolog and any DTD are dropped with the root element. When the root
/// has no `viewBox`, numeric `width`/`height` attributes yield `0 0 width height`.
pub fn extract_svg(text: &str) -> Result<SvgSource> {
    let opts = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, opts).context("Failed to parse SVG")?;
    let root = doc.root_element();
    if !root.has_tag_name("svg") {
        bail!("Root element is <{}>, expected <svg>", root.tag_name().name());
    }

    let inner = match (root.first_child(), root.last_child()) {
        (Some(first), Some(last)) => text[first.range().start..last.range().end].trim(),
        _ => "",
    };

    let viewbox = match root.attribute("viewBox") {
        Some(v) => Some(
            ViewBox::parse(v).with_context(|| format!("Invalid viewBox attribute {:?}", v))?,
        ),
        None => size_viewbox(root.attribute("width"), root.attribute("height")),
    };

    Ok(SvgSource {
        inner: inner.to_string(),
        viewbox,
    })
}

fn size_viewbox(width: Option<&str>, height: Option<&str>) -> Option<ViewBox> {
    let width = parse_length(width?)?;
    let height = parse_length(height?)?;
    (width > 0.0 && height > 0.0).then_some(ViewBox {
        min_x: 0.0,
        min_y: 0.0,
        width,
        height,
    })
}
