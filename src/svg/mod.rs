//! SVG handling.
//!
//! - [`extract`] – Parse a whole icon file and pull out inner markup and viewBox
//! - [`scan`] – Stream over a stored fragment for its viewBox comment and stroke widths
//! - [`helpers`] – Number parsing shared by both

pub mod extract;
pub mod helpers;
pub mod scan;

pub use extract::{SvgSource, extract_svg, viewbox_comment};
pub use helpers::{dominant_value, parse_leading_number, parse_length};
pub use scan::{FragmentInfo, scan_fragment};
