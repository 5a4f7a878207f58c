use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Component
// ────────────────────────────────────────────────────────────────────────────

/// A schematic component as stored in `<id>.json` next to its source icon.
///
/// `width` and `height` are grid units of the editor (1 unit renders as 10 px).
/// Fields this crate does not know about are kept in `extra` so that a
/// normalization pass writes them back untouched and in their original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Inner SVG markup, prefixed with a `<!-- viewBox: … -->` comment.
    pub svg: String,
    pub width: f64,
    pub height: f64,
    pub endpoints: Vec<Endpoint>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Component {
    /// Serialize as pretty JSON (2-space indent) with a trailing newline.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Endpoint
// ────────────────────────────────────────────────────────────────────────────

/// A connection point of a component, in grid units relative to its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub direction: Direction,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Endpoint {
    pub fn new(id: impl Into<String>, x: f64, y: f64, direction: Direction) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            direction,
            extra: IndexMap::new(),
        }
    }
}

/// Side a wire leaves an endpoint from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

// ────────────────────────────────────────────────────────────────────────────
// ViewBox
// ────────────────────────────────────────────────────────────────────────────

/// SVG `viewBox` of the original icon: `min-x min-y width height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Parse a viewBox value. Numbers may be separated by whitespace and/or
    /// commas. Returns `None` unless there are exactly four finite numbers and
    /// the width and height are positive.
    pub fn parse(s: &str) -> Option<Self> {
        let nums: Vec<f64> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<f64>().ok().filter(|v| v.is_finite()))
            .collect::<Option<Vec<_>>>()?;
        if nums.len() != 4 {
            return None;
        }
        let vb = ViewBox {
            min_x: nums[0],
            min_y: nums[1],
            width: nums[2],
            height: nums[3],
        };
        (vb.width > 0.0 && vb.height > 0.0).then_some(vb)
    }
}

impl std::fmt::Display for ViewBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}
