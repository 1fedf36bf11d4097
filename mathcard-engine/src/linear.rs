//! Linear functions `f(x) = mx + b`

use crate::helpers::polynomial_text;
use mathcard_core::{numeric, NumberFormat, RealSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearParams {
    pub m: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlopeType {
    Increasing,
    Decreasing,
    Constant,
}

impl SlopeType {
    pub fn description(&self) -> &'static str {
        match self {
            SlopeType::Increasing => "Positive slope (increasing function)",
            SlopeType::Decreasing => "Negative slope (decreasing function)",
            SlopeType::Constant => "Zero slope (constant function)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinearSpecialCase {
    Constant,
    Identity,
    NegativeIdentity,
    DirectProportion,
}

impl LinearSpecialCase {
    pub fn label(&self) -> &'static str {
        match self {
            LinearSpecialCase::Constant => "Constant function (horizontal line)",
            LinearSpecialCase::Identity => "Identity function (y = x)",
            LinearSpecialCase::NegativeIdentity => "Negative identity function (y = -x)",
            LinearSpecialCase::DirectProportion => "Direct proportion (passes through origin)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearProperties {
    pub standard_form: String,
    pub slope: f64,
    pub slope_type: SlopeType,
    pub slope_description: String,
    pub y_intercept: f64,
    pub y_intercept_description: String,
    pub x_intercept: Option<f64>,
    pub x_intercept_description: String,
    pub special_cases: Vec<LinearSpecialCase>,
    pub domain: RealSet,
    pub domain_description: String,
    pub range: RealSet,
    pub range_description: String,
}

impl LinearParams {
    pub fn new(m: f64, b: f64) -> Self {
        Self { m, b }
    }

    pub fn evaluate(&self, x: f64) -> Option<f64> {
        numeric::finite(self.m * x + self.b)
    }

    /// `f(x) = 2x + 3`
    pub fn standard_form(&self, fmt: NumberFormat) -> String {
        format!("f(x) = {}", polynomial_text(fmt, &[(self.m, "x"), (self.b, "")]))
    }

    pub fn slope_type(&self) -> SlopeType {
        if self.m > 0.0 {
            SlopeType::Increasing
        } else if self.m < 0.0 {
            SlopeType::Decreasing
        } else {
            SlopeType::Constant
        }
    }

    /// Root of `mx + b`, absent for horizontal lines
    pub fn x_intercept(&self) -> Option<f64> {
        if self.m == 0.0 {
            return None;
        }
        numeric::finite(-self.b / self.m)
    }

    /// Every matching rule, in a fixed order
    pub fn special_cases(&self) -> Vec<LinearSpecialCase> {
        let rules = [
            (self.m == 0.0, LinearSpecialCase::Constant),
            (self.m == 1.0 && self.b == 0.0, LinearSpecialCase::Identity),
            (self.m == -1.0 && self.b == 0.0, LinearSpecialCase::NegativeIdentity),
            (self.b == 0.0, LinearSpecialCase::DirectProportion),
        ];
        rules.into_iter().filter(|(hit, _)| *hit).map(|(_, case)| case).collect()
    }

    pub fn analyze(&self, fmt: NumberFormat) -> LinearProperties {
        let slope_type = self.slope_type();
        let x_intercept = self.x_intercept();
        let x_intercept_description = match x_intercept {
            Some(x) => format!("x = {}", fmt.fixed(x)),
            None if self.m == 0.0 => "No x-intercept (horizontal line)".to_string(),
            None => "No x-intercept".to_string(),
        };
        let domain = RealSet::all_reals();
        let range = RealSet::all_reals();

        LinearProperties {
            standard_form: self.standard_form(fmt),
            slope: self.m,
            slope_type,
            slope_description: slope_type.description().to_string(),
            y_intercept: self.b,
            y_intercept_description: format!("y = {}", fmt.fixed(self.b)),
            x_intercept,
            x_intercept_description,
            special_cases: self.special_cases(),
            domain_description: domain.display(fmt),
            domain,
            range_description: range.display(fmt),
            range,
        }
    }
}
