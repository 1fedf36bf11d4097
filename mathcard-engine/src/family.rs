//! Function families and dispatch
//!
//! [`FunctionParams`] is the tagged parameter record callers hand to the
//! engine. Every operation on it is an exhaustive `match`, so a new family
//! is a compile error everywhere it still needs handling.

use crate::exponential::{ExponentialAnalysis, ExponentialParams};
use crate::linear::{LinearParams, LinearProperties};
use crate::logarithmic::{LogarithmicAnalysis, LogarithmicParams};
use crate::quadratic::{QuadraticAnalysis, QuadraticParams};
use mathcard_core::NumberFormat;
use serde::{Deserialize, Serialize};

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Direction of an exponential or logarithmic curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Growth,
    Decay,
    Constant,
}

/// Growth/decay classification shared by the exponential and logarithmic families.
///
/// `negative` marks a negative coefficient, which mirrors the curve and
/// swaps growth for decay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionType {
    pub trend: Trend,
    pub negative: bool,
}

impl FunctionType {
    /// Classify `coef · g(x)` where `g` is increasing iff `base > 1`.
    pub(crate) fn classify(base: f64, coef: f64) -> Self {
        let trend = if coef == 0.0 || base == 1.0 {
            Trend::Constant
        } else if (base > 1.0) == (coef > 0.0) {
            Trend::Growth
        } else {
            Trend::Decay
        };
        Self { trend, negative: coef < 0.0 }
    }

    /// `exponential growth`, `logarithmic decay (negative)`, `constant`
    pub fn label(&self, family: Family) -> String {
        let trend = match self.trend {
            Trend::Constant => return "constant".to_string(),
            Trend::Growth => "growth",
            Trend::Decay => "decay",
        };
        let suffix = if self.negative { " (negative)" } else { "" };
        format!("{} {}{}", family.name(), trend, suffix)
    }
}

/// A base that the family cannot use
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidBase {
    pub standard_form: String,
    pub base: f64,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Linear,
    Quadratic,
    Exponential,
    Logarithmic,
}

impl Family {
    pub fn name(&self) -> &'static str {
        match self {
            Family::Linear => "linear",
            Family::Quadratic => "quadratic",
            Family::Exponential => "exponential",
            Family::Logarithmic => "logarithmic",
        }
    }
}

/// Parameters of one function from one of the four families
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum FunctionParams {
    Linear(LinearParams),
    Quadratic(QuadraticParams),
    Exponential(ExponentialParams),
    Logarithmic(LogarithmicParams),
}

/// Analysis result matching a [`FunctionParams`] variant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum FunctionProperties {
    Linear(LinearProperties),
    Quadratic(QuadraticAnalysis),
    Exponential(ExponentialAnalysis),
    Logarithmic(LogarithmicAnalysis),
}

impl FunctionParams {
    pub fn family(&self) -> Family {
        match self {
            FunctionParams::Linear(_) => Family::Linear,
            FunctionParams::Quadratic(_) => Family::Quadratic,
            FunctionParams::Exponential(_) => Family::Exponential,
            FunctionParams::Logarithmic(_) => Family::Logarithmic,
        }
    }

    pub fn analyze(&self, fmt: NumberFormat) -> FunctionProperties {
        match self {
            FunctionParams::Linear(p) => FunctionProperties::Linear(p.analyze(fmt)),
            FunctionParams::Quadratic(p) => FunctionProperties::Quadratic(p.analyze(fmt)),
            FunctionParams::Exponential(p) => FunctionProperties::Exponential(p.analyze(fmt)),
            FunctionParams::Logarithmic(p) => FunctionProperties::Logarithmic(p.analyze(fmt)),
        }
    }

    /// `f(x)`, or `None` outside the domain or when the result is not finite
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        match self {
            FunctionParams::Linear(p) => p.evaluate(x),
            FunctionParams::Quadratic(p) => p.evaluate(x),
            FunctionParams::Exponential(p) => p.evaluate(x),
            FunctionParams::Logarithmic(p) => p.evaluate(x),
        }
    }

    pub fn standard_form(&self, fmt: NumberFormat) -> String {
        match self {
            FunctionParams::Linear(p) => p.standard_form(fmt),
            FunctionParams::Quadratic(p) => p.standard_form(fmt),
            FunctionParams::Exponential(p) => p.standard_form(fmt),
            FunctionParams::Logarithmic(p) => p.standard_form(fmt),
        }
    }
}

impl From<LinearParams> for FunctionParams {
    fn from(p: LinearParams) -> Self {
        FunctionParams::Linear(p)
    }
}

impl From<QuadraticParams> for FunctionParams {
    fn from(p: QuadraticParams) -> Self {
        FunctionParams::Quadratic(p)
    }
}

impl From<ExponentialParams> for FunctionParams {
    fn from(p: ExponentialParams) -> Self {
        FunctionParams::Exponential(p)
    }
}

impl From<LogarithmicParams> for FunctionParams {
    fn from(p: LogarithmicParams) -> Self {
        FunctionParams::Logarithmic(p)
    }
}
