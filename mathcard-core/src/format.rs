//! Display formatting for numbers
//!
//! Results are formatted to a fixed number of decimal places (4 unless
//! configured otherwise). Formatted strings are for display only; nothing
//! parses them back or compares them.

use serde::{Deserialize, Serialize};

/// Default number of decimal places shown for computed values
pub const DEFAULT_DECIMALS: u32 = 4;

/// Largest supported number of decimal places
pub const MAX_DECIMALS: u32 = 12;

/// Number display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    decimals: u32,
}

impl NumberFormat {
    pub fn new(decimals: u32) -> Self {
        Self { decimals: decimals.min(MAX_DECIMALS) }
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Fixed decimal places: `3.0000`, `-0.5000`.
    pub fn fixed(&self, x: f64) -> String {
        if x.is_nan() {
            return "undefined".to_string();
        }
        if x.is_infinite() {
            return if x > 0.0 { "∞".to_string() } else { "-∞".to_string() };
        }
        let s = format!("{:.*}", self.decimals as usize, x);
        strip_negative_zero(s)
    }

    /// Rounded like [`fixed`](Self::fixed) with trailing zeros removed: `3`, `-0.5`, `1.4142`.
    pub fn compact(&self, x: f64) -> String {
        let s = self.fixed(x);
        if !s.contains('.') {
            return s;
        }
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        strip_negative_zero(trimmed.to_string())
    }

    /// A term preceded by its sign, for building polynomial text: `+ 3`, `- 2.5`.
    pub fn signed(&self, x: f64) -> String {
        let magnitude = self.compact(x.abs());
        if x < 0.0 && magnitude != "0" {
            format!("- {}", magnitude)
        } else {
            format!("+ {}", magnitude)
        }
    }

    /// A leading coefficient in front of a factor: `""` for 1, `"-"` for -1, else the number.
    pub fn coefficient(&self, x: f64) -> String {
        match self.compact(x).as_str() {
            "1" => String::new(),
            "-1" => "-".to_string(),
            other => other.to_string(),
        }
    }

    /// `(x - r)` for a root `r`, written `(x + |r|)` when `r` is negative.
    pub fn shifted(&self, var: &str, root: f64) -> String {
        let magnitude = self.compact(root.abs());
        if magnitude == "0" {
            var.to_string()
        } else if root < 0.0 {
            format!("({} + {})", var, magnitude)
        } else {
            format!("({} - {})", var, magnitude)
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DECIMALS)
    }
}

fn strip_negative_zero(s: String) -> String {
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}
