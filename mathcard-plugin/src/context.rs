//! Call context

use mathcard_core::NumberFormat;

/// Default number of points produced by sampling tools
pub const DEFAULT_SAMPLES: usize = 200;

/// Settings passed to every tool call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalContext {
    pub precision: u32,
    pub samples: usize,
}

impl EvalContext {
    pub fn new() -> Self {
        Self {
            precision: mathcard_core::DEFAULT_DECIMALS,
            samples: DEFAULT_SAMPLES,
        }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision.min(mathcard_core::MAX_DECIMALS);
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples.max(2);
        self
    }

    /// Number formatting for display strings
    pub fn format(&self) -> NumberFormat {
        NumberFormat::new(self.precision)
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}
