//! Helper functions for parsing SVG attribute values.

use indexmap::IndexMap;

/// Parse the numeric prefix of a value such as `"2"`, `"2.5px"` or `" 3 "`.
///
/// Accepts an optional sign, digits and a fractional part. Returns `None` when
/// the value does not start with a number.
pub fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, ch) in s.char_indices() {
        match ch {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + ch.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an SVG length that must be a plain number or a number in `px`.
pub fn parse_length(s: &str) -> Option<f64> {
    let s = s.trim();
    let s = s.strip_suffix("px").unwrap_or(s).trim_end();
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Most frequent value in `values`. Ties go to the value encountered first.
pub fn dominant_value(values: &[f64]) -> Option<f64> {
    let mut counts: IndexMap<u64, usize> = IndexMap::new();
    for v in values {
        // Fold -0.0 into 0.0 so both count as the same width.
        let v = if *v == 0.0 { 0.0 } else { *v };
        *counts.entry(v.to_bits()).or_insert(0) += 1;
    }
    let mut best: Option<(u64, usize)> = None;
    for (&bits, &count) in &counts {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((bits, count));
        }
    }
    best.map(|(bits, _)| f64::from_bits(bits))
}
