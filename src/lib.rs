//! Schematic component asset pipeline.
//!
//! Converts SVG icons into component records for the schematic editor
//! ([`convert`]) and normalizes their grid size so every symbol renders with
//! the same stroke width ([`normalize`]).
//!
//! The binary `schematic-assets` runs both passes over a components directory.

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod normalize;
pub mod store;
pub mod svg;
