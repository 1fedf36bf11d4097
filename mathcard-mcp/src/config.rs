//! Host configuration from environment variables

use mathcard_core::{DEFAULT_DECIMALS, MAX_DECIMALS};
use mathcard_plugin::DEFAULT_SAMPLES;
use std::env;
use std::str::FromStr;
use tracing::warn;

pub const PRECISION_VAR: &str = "MATHCARD_PRECISION";
pub const SAMPLES_VAR: &str = "MATHCARD_SAMPLES";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    /// Decimal places in display text
    pub precision: u32,
    /// Default grid size for `sample`
    pub samples: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_DECIMALS,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build from a variable lookup. Unparseable values are logged and
    /// replaced by the default.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let precision: u32 = parse_or(&lookup, PRECISION_VAR, defaults.precision);
        let samples: usize = parse_or(&lookup, SAMPLES_VAR, defaults.samples);

        if precision > MAX_DECIMALS {
            warn!(var = PRECISION_VAR, value = precision, max = MAX_DECIMALS, "precision clamped");
        }
        let samples = if samples < 2 {
            warn!(var = SAMPLES_VAR, value = samples, "sample count below 2, using default");
            defaults.samples
        } else {
            samples
        };

        Self {
            precision: precision.min(MAX_DECIMALS),
            samples,
        }
    }
}

fn parse_or<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T {
    match lookup(name) {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(var = name, value = %raw, "invalid value, using default");
                default
            }
        },
    }
}
