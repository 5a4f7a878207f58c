//! Streaming scan over a stored SVG fragment.
//!
//! A fragment has several top-level nodes and may use namespace prefixes whose
//! declarations were dropped with the original `<svg>` element, so it is read
//! event by event instead of being built into a tree.

use crate::model::ViewBox;
use crate::svg::helpers::parse_leading_number;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

/// What the normalizer needs to know about a fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FragmentInfo {
    /// From the `<!-- viewBox: … -->` comment, else the first `viewBox` attribute.
    pub viewbox: Option<ViewBox>,
    /// Raw `stroke-width` declarations in document order (attributes and
    /// `style` entries).
    pub stroke_declarations: Vec<String>,
}

impl FragmentInfo {
    /// Numeric stroke widths in document order; non-numeric declarations are dropped.
    pub fn stroke_widths(&self) -> Vec<f64> {
        self.stroke_declarations
            .iter()
            .filter_map(|d| parse_leading_number(d))
            .collect()
    }
}

/// Scan a fragment. Fails only on malformed markup.
pub fn scan_fragment(fragment: &str) -> Result<FragmentInfo, quick_xml::Error> {
    let mut reader = Reader::from_str(fragment);
    let mut comment_viewbox: Option<ViewBox> = None;
    let mut attr_viewbox: Option<ViewBox> = None;
    let mut stroke_declarations = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Comment(c) => {
                if comment_viewbox.is_none() {
                    comment_viewbox = parse_viewbox_comment(&String::from_utf8_lossy(&c));
                }
            }
            Event::Start(e) | Event::Empty(e) => {
                scan_element(&e, &mut attr_viewbox, &mut stroke_declarations);
            }
            _ => {}
        }
    }

    Ok(FragmentInfo {
        viewbox: comment_viewbox.or(attr_viewbox),
        stroke_declarations,
    })
}

fn scan_element(e: &BytesStart, viewbox: &mut Option<ViewBox>, strokes: &mut Vec<String>) {
    for attr in e.attributes().flatten() {
        let value = String::from_utf8_lossy(&attr.value);
        match attr.key.into_inner() {
            b"stroke-width" => strokes.push(value.trim().to_string()),
            b"style" => strokes.extend(style_stroke_widths(&value)),
            b"viewBox" if viewbox.is_none() => *viewbox = ViewBox::parse(&value),
            _ => {}
        }
    }
}

/// `stroke-width` values inside an inline style like `fill:none;stroke-width:2px`.
fn style_stroke_widths(style: &str) -> impl Iterator<Item = String> + '_ {
    style.split(';').filter_map(|decl| {
        let (prop, value) = decl.split_once(':')?;
        (prop.trim() == "stroke-width").then(|| value.trim().to_string())
    })
}

/// Parse the body of a `viewBox: x y w h` comment.
fn parse_viewbox_comment(text: &str) -> Option<ViewBox> {
    let rest = text.trim().strip_prefix("viewBox:")?;
    ViewBox::parse(rest)
}
