//! Exponential functions `f(x) = b·a^(x+c) + d`

use crate::family::{Family, FunctionType, InvalidBase, Trend};
use crate::helpers::{offset, scaled};
use mathcard_core::{numeric, Bound, Interval, NumberFormat, RealSet};
use serde::{Deserialize, Serialize};
use std::f64::consts::E;

/// Distance from `e` within which a base counts as natural
pub const NATURAL_BASE_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentialParams {
    /// Base
    pub a: f64,
    /// Coefficient
    pub b: f64,
    /// Horizontal shift inside the exponent
    #[serde(default)]
    pub c: f64,
    /// Vertical shift
    #[serde(default)]
    pub d: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExponentialSpecialCase {
    Constant,
    NaturalExponential,
    Basic,
}

impl ExponentialSpecialCase {
    pub fn label(&self) -> &'static str {
        match self {
            ExponentialSpecialCase::Constant => "Constant function",
            ExponentialSpecialCase::NaturalExponential => "Natural exponential function",
            ExponentialSpecialCase::Basic => "Basic exponential function",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExponentialProperties {
    pub standard_form: String,
    pub function_type: FunctionType,
    pub function_type_label: String,
    pub domain: RealSet,
    pub domain_description: String,
    pub range: RealSet,
    pub range_description: String,
    /// Horizontal asymptote `y = d`, absent for constant functions
    pub asymptote: Option<f64>,
    pub asymptote_description: String,
    pub y_intercept: Option<f64>,
    pub y_intercept_description: String,
    pub x_intercept: Option<f64>,
    pub x_intercept_description: String,
    pub special_cases: Vec<ExponentialSpecialCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExponentialAnalysis {
    Exponential(Box<ExponentialProperties>),
    InvalidBase(InvalidBase),
}

impl ExponentialAnalysis {
    pub fn properties(&self) -> Option<&ExponentialProperties> {
        match self {
            ExponentialAnalysis::Exponential(props) => Some(props),
            ExponentialAnalysis::InvalidBase(_) => None,
        }
    }
}

pub(crate) fn is_natural_base(a: f64) -> bool {
    (a - E).abs() < NATURAL_BASE_TOLERANCE
}

impl ExponentialParams {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    pub fn evaluate(&self, x: f64) -> Option<f64> {
        if self.a > 0.0 {
            numeric::finite(self.b * self.a.powf(x + self.c) + self.d)
        } else {
            None
        }
    }

    /// `f(x) = 3·2^(x + 1) - 4`
    pub fn standard_form(&self, fmt: NumberFormat) -> String {
        if fmt.compact(self.b) == "0" {
            return format!("f(x) = {}", fmt.compact(self.d));
        }
        let base = if is_natural_base(self.a) { "e".to_string() } else { fmt.compact(self.a) };
        let body = format!("{}^{}", base, fmt.shifted("x", -self.c));
        format!("f(x) = {}{}", scaled(fmt, self.b, &body), offset(fmt, self.d))
    }

    pub fn special_cases(&self) -> Vec<ExponentialSpecialCase> {
        let rules = [
            (self.a == 1.0, ExponentialSpecialCase::Constant),
            (is_natural_base(self.a), ExponentialSpecialCase::NaturalExponential),
            (self.b == 1.0 && self.c == 0.0 && self.d == 0.0, ExponentialSpecialCase::Basic),
        ];
        rules.into_iter().filter(|(hit, _)| *hit).map(|(_, case)| case).collect()
    }

    /// Solves `a^(x+c) = -d/b`; absent for constants and when `-d/b ≤ 0`
    pub fn x_intercept(&self) -> Option<f64> {
        if self.b == 0.0 || self.a == 1.0 || !(self.a > 0.0) {
            return None;
        }
        let ratio = -self.d / self.b;
        if !(ratio > 0.0) {
            return None;
        }
        numeric::finite(ratio.ln() / self.a.ln() - self.c)
    }

    pub fn analyze(&self, fmt: NumberFormat) -> ExponentialAnalysis {
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        let standard_form = self.standard_form(fmt);

        if !(a > 0.0) {
            return ExponentialAnalysis::InvalidBase(InvalidBase {
                standard_form,
                base: a,
                reason: "Exponential base must be positive (a > 0)".to_string(),
            });
        }

        let function_type = FunctionType::classify(a, b);
        let range = match function_type.trend {
            // a = 1 leaves b·1 + d, b = 0 leaves d
            Trend::Constant => Interval::point(if b == 0.0 { d } else { b + d }),
            _ if b > 0.0 => Interval::above(Bound::Open(d)),
            _ => Interval::below(Bound::Open(d)),
        };
        let asymptote = (function_type.trend != Trend::Constant).then_some(d);
        let y_intercept = numeric::finite(b * a.powf(c) + d);
        let x_intercept = self.x_intercept();
        let domain = RealSet::all_reals();
        let range = RealSet::from(range);

        ExponentialAnalysis::Exponential(Box::new(ExponentialProperties {
            standard_form,
            function_type,
            function_type_label: function_type.label(Family::Exponential),
            domain_description: domain.display(fmt),
            domain,
            range_description: range.display(fmt),
            range,
            asymptote,
            asymptote_description: match asymptote {
                Some(y) => format!("y = {}", fmt.compact(y)),
                None => "None (constant function)".to_string(),
            },
            y_intercept,
            y_intercept_description: match y_intercept {
                Some(y) => format!("y = {}", fmt.fixed(y)),
                None => "undefined".to_string(),
            },
            x_intercept,
            x_intercept_description: match x_intercept {
                Some(x) => format!("x = {}", fmt.fixed(x)),
                None => "No x-intercept".to_string(),
            },
            special_cases: self.special_cases(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(a: f64, b: f64, c: f64, d: f64) -> ExponentialProperties {
        match ExponentialParams::new(a, b, c, d).analyze(NumberFormat::default()) {
            ExponentialAnalysis::Exponential(p) => *p,
            other => panic!("expected exponential, got {:?}", other),
        }
    }

    #[test]
    fn test_basic_growth() {
        let p = props(2.0, 1.0, 0.0, 0.0);
        assert_eq!(p.standard_form, "f(x) = 2^x");
        assert_eq!(p.y_intercept, Some(1.0));
        assert_eq!(p.range.intervals[0].lower, Bound::Open(0.0));
        assert_eq!(p.range_description, "(0, ∞)");
        assert_eq!(p.function_type.trend, Trend::Growth);
        assert!(!p.function_type.negative);
        assert_eq!(p.function_type_label, "exponential growth");
        assert_eq!(p.x_intercept, None);
        assert_eq!(p.asymptote, Some(0.0));
        assert_eq!(p.special_cases, vec![ExponentialSpecialCase::Basic]);
    }

    #[test]
    fn test_shifted_and_scaled() {
        let p = props(2.0, 3.0, 0.0, 1.0);
        assert_eq!(p.standard_form, "f(x) = 3·2^x + 1");
        assert_eq!(p.y_intercept, Some(4.0));
        assert_eq!(p.range_description, "(1, ∞)");
        assert_eq!(p.asymptote_description, "y = 1");
        assert_eq!(p.x_intercept, None);
    }

    #[test]
    fn test_exponent_shift() {
        let p = props(2.0, 1.0, 1.0, 0.0);
        assert_eq!(p.standard_form, "f(x) = 2^(x + 1)");
        assert_eq!(p.y_intercept, Some(2.0));
    }

    #[test]
    fn test_x_intercept() {
        let p = props(2.0, 1.0, 0.0, -8.0);
        let x = p.x_intercept.unwrap();
        assert!((x - 3.0).abs() < 1e-9);
        assert_eq!(p.x_intercept_description, "x = 3.0000");
        assert_eq!(p.standard_form, "f(x) = 2^x - 8");

        // Shift moves the root left by c
        let shifted = props(2.0, 1.0, 1.0, -8.0);
        assert!((shifted.x_intercept.unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_coefficient() {
        let p = props(0.5, -2.0, 0.0, 0.0);
        assert_eq!(p.function_type.trend, Trend::Growth);
        assert!(p.function_type.negative);
        assert_eq!(p.function_type_label, "exponential growth (negative)");
        assert_eq!(p.range_description, "(-∞, 0)");
        assert_eq!(p.standard_form, "f(x) = -2·0.5^x");

        let p = props(3.0, -1.0, 0.0, 9.0);
        assert_eq!(p.function_type_label, "exponential decay (negative)");
        assert!((p.x_intercept.unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_decay() {
        let p = props(0.5, 1.0, 0.0, 0.0);
        assert_eq!(p.function_type.trend, Trend::Decay);
        assert_eq!(p.function_type_label, "exponential decay");
    }

    #[test]
    fn test_base_one_is_constant() {
        let p = props(1.0, 3.0, 0.0, 2.0);
        assert_eq!(p.function_type.trend, Trend::Constant);
        assert_eq!(p.function_type_label, "constant");
        assert_eq!(p.range_description, "{5}");
        assert_eq!(p.asymptote, None);
        assert_eq!(p.asymptote_description, "None (constant function)");
        assert_eq!(p.x_intercept, None);
        assert_eq!(p.special_cases, vec![ExponentialSpecialCase::Constant]);
    }

    #[test]
    fn test_zero_coefficient_is_constant() {
        let p = props(2.0, 0.0, 0.0, -3.0);
        assert_eq!(p.standard_form, "f(x) = -3");
        assert_eq!(p.range_description, "{-3}");
        assert_eq!(p.x_intercept, None);
    }

    #[test]
    fn test_natural_base() {
        let p = props(E, 1.0, 0.0, 0.0);
        assert_eq!(p.standard_form, "f(x) = e^x");
        assert_eq!(
            p.special_cases,
            vec![ExponentialSpecialCase::NaturalExponential, ExponentialSpecialCase::Basic]
        );
        // Slider values close to e still count
        assert!(props(2.718, 2.0, 0.0, 0.0)
            .special_cases
            .contains(&ExponentialSpecialCase::NaturalExponential));
        assert!(props(2.71, 2.0, 0.0, 0.0).special_cases.is_empty());
    }

    #[test]
    fn test_invalid_base() {
        for a in [0.0, -2.0, f64::NAN] {
            match ExponentialParams::new(a, 1.0, 0.0, 0.0).analyze(NumberFormat::default()) {
                ExponentialAnalysis::InvalidBase(invalid) => {
                    assert!(invalid.reason.contains("positive"));
                }
                other => panic!("a={}: {:?}", a, other),
            }
        }
    }

    #[test]
    fn test_overflowing_y_intercept() {
        let p = props(10.0, 1.0, 400.0, 0.0);
        assert_eq!(p.y_intercept, None);
        assert_eq!(p.y_intercept_description, "undefined");
    }

    #[test]
    fn test_evaluate() {
        let f = ExponentialParams::new(2.0, 3.0, 0.0, 1.0);
        assert_eq!(f.evaluate(2.0), Some(13.0));
        assert_eq!(ExponentialParams::new(-2.0, 1.0, 0.0, 0.0).evaluate(0.5), None);
    }
}
