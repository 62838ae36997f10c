//! Kubernetes resource quantity parsing and display.
//!
//! Parsing is approximate (to `f64`) and only feeds percentage math.
//! Display normalization is cosmetic and never changes the parsed value.

use regex::Regex;
use std::sync::LazyLock;

const KI: f64 = 1024.0;
const MI: i64 = 1024 * 1024;
const GI: i64 = 1024 * 1024 * 1024;

/// Suffixes that are always shown exactly as the API returned them
const BINARY_DISPLAY_SUFFIXES: [&str; 3] = ["Ki", "Mi", "Gi"];

/// `<number>[<suffix>|<exponent>]`, e.g. "500m", "4Gi", "1.5", "12e3"
static QUANTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+))(?:(Ki|Mi|Gi|Ti|Pi|Ei|n|u|m|k|M|G|T|P|E)|[eE]([+-]?\d+))?$")
        .unwrap()
});

/// Parse a quantity string into an approximate float.
///
/// # Examples
/// - "500m" -> 0.5
/// - "4Gi" -> 4294967296.0
/// - "1e3" -> 1000.0
pub fn parse_quantity(quantity: &str) -> Option<f64> {
    let caps = QUANTITY_REGEX.captures(quantity.trim())?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;

    if let Some(exponent) = caps.get(3) {
        let exponent: i32 = exponent.as_str().parse().ok()?;
        return Some(value * 10f64.powi(exponent));
    }

    let multiplier = match caps.get(2).map(|m| m.as_str()).unwrap_or("") {
        "" => 1.0,
        "Ki" => KI,
        "Mi" => KI.powi(2),
        "Gi" => KI.powi(3),
        "Ti" => KI.powi(4),
        "Pi" => KI.powi(5),
        "Ei" => KI.powi(6),
        // Decimal units
        "n" => 1e-9,
        "u" => 1e-6,
        "m" => 1e-3,
        "k" => 1e3,
        "M" => 1e6,
        "G" => 1e9,
        "T" => 1e12,
        "P" => 1e15,
        "E" => 1e18,
        _ => return None,
    };

    Some(value * multiplier)
}

/// Like [`parse_quantity`], counting unparseable input as zero.
pub fn quantity_value(quantity: &str) -> f64 {
    parse_quantity(quantity).unwrap_or_else(|| {
        log::warn!("Could not parse quantity {:?}, treating it as 0", quantity);
        0.0
    })
}

/// Usage as a percentage of the hard limit.
///
/// A non-positive hard limit yields 0 instead of dividing by zero.
/// Values above 100 are returned as is.
pub fn usage_percentage(used: &str, hard: &str) -> f64 {
    let hard = quantity_value(hard);
    if hard > 0.0 {
        (quantity_value(used) / hard) * 100.0
    } else {
        0.0
    }
}

/// Render a raw quantity for the table.
///
/// Strings already carrying a Ki/Mi/Gi suffix are shown unmodified. Plain integers
/// of at least 1Mi are rewritten to Mi or Gi with two decimals. Everything else,
/// including integers below 1Mi, is shown unchanged.
pub fn display_quantity(raw: &str) -> String {
    if BINARY_DISPLAY_SUFFIXES.iter().any(|suffix| raw.ends_with(suffix)) {
        return raw.to_string();
    }

    match raw.parse::<i64>() {
        Ok(bytes) if bytes >= GI => format!("{:.2}Gi", bytes as f64 / GI as f64),
        Ok(bytes) if bytes >= MI => format!("{:.2}Mi", bytes as f64 / MI as f64),
        _ => raw.to_string(),
    }
}
