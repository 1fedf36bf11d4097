//! Logarithmic functions `f(x) = b·log_a(x+c) + d`
//!
//! The domain `x > -c` is open. Intercepts are only reported when they lie
//! inside it.

use crate::exponential::is_natural_base;
use crate::family::{Family, FunctionType, InvalidBase, Trend};
use crate::helpers::{offset, scaled};
use mathcard_core::{numeric, Bound, Interval, NumberFormat, RealSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogarithmicParams {
    /// Base
    pub a: f64,
    /// Coefficient
    pub b: f64,
    /// Shift inside the logarithm
    #[serde(default)]
    pub c: f64,
    /// Vertical shift
    #[serde(default)]
    pub d: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogarithmicSpecialCase {
    NaturalLogarithm,
    CommonLogarithm,
    Basic,
}

impl LogarithmicSpecialCase {
    pub fn label(&self) -> &'static str {
        match self {
            LogarithmicSpecialCase::NaturalLogarithm => "Natural logarithm",
            LogarithmicSpecialCase::CommonLogarithm => "Common logarithm",
            LogarithmicSpecialCase::Basic => "Basic logarithmic function",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogarithmicProperties {
    pub standard_form: String,
    pub function_type: FunctionType,
    pub function_type_label: String,
    pub domain: RealSet,
    pub domain_description: String,
    pub range: RealSet,
    pub range_description: String,
    /// Vertical asymptote `x = -c`
    pub asymptote: f64,
    pub asymptote_description: String,
    pub y_intercept: Option<f64>,
    pub y_intercept_description: String,
    pub x_intercept: Option<f64>,
    pub x_intercept_description: String,
    pub special_cases: Vec<LogarithmicSpecialCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogarithmicAnalysis {
    Logarithmic(Box<LogarithmicProperties>),
    InvalidBase(InvalidBase),
}

impl LogarithmicAnalysis {
    pub fn properties(&self) -> Option<&LogarithmicProperties> {
        match self {
            LogarithmicAnalysis::Logarithmic(props) => Some(props),
            LogarithmicAnalysis::InvalidBase(_) => None,
        }
    }
}

/// Why `a` cannot be a logarithm base, if it cannot
pub(crate) fn base_problem(a: f64) -> Option<&'static str> {
    if !(a > 0.0) {
        Some("Logarithm base must be positive (a > 0)")
    } else if a == 1.0 {
        Some("Logarithm base cannot be 1")
    } else {
        None
    }
}

impl LogarithmicParams {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    fn log(&self, x: f64) -> f64 {
        x.ln() / self.a.ln()
    }

    pub fn evaluate(&self, x: f64) -> Option<f64> {
        let arg = x + self.c;
        if base_problem(self.a).is_some() || !(arg > 0.0) {
            return None;
        }
        numeric::finite(self.b * self.log(arg) + self.d)
    }

    /// `f(x) = 2·log_2(x + 1)`, `f(x) = ln(x) - 3`
    pub fn standard_form(&self, fmt: NumberFormat) -> String {
        if fmt.compact(self.b) == "0" {
            return format!("f(x) = {}", fmt.compact(self.d));
        }
        let arg = match fmt.shifted("x", -self.c).as_str() {
            "x" => "(x)".to_string(),
            shifted => shifted.to_string(),
        };
        let body = if is_natural_base(self.a) {
            format!("ln{}", arg)
        } else {
            format!("log_{}{}", fmt.compact(self.a), arg)
        };
        format!("f(x) = {}{}", scaled(fmt, self.b, &body), offset(fmt, self.d))
    }

    pub fn special_cases(&self) -> Vec<LogarithmicSpecialCase> {
        let rules = [
            (is_natural_base(self.a), LogarithmicSpecialCase::NaturalLogarithm),
            (self.a == 10.0, LogarithmicSpecialCase::CommonLogarithm),
            (self.b == 1.0 && self.c == 0.0 && self.d == 0.0, LogarithmicSpecialCase::Basic),
        ];
        rules.into_iter().filter(|(hit, _)| *hit).map(|(_, case)| case).collect()
    }

    /// `f(0)`, defined only when `0` is in the domain (`c > 0`)
    pub fn y_intercept(&self) -> Option<f64> {
        if base_problem(self.a).is_some() || !(self.c > 0.0) {
            return None;
        }
        numeric::finite(self.b * self.log(self.c) + self.d)
    }

    /// `x = a^(-d/b) - c`, kept only when finite and inside the domain
    pub fn x_intercept(&self) -> Option<f64> {
        if self.b == 0.0 || base_problem(self.a).is_some() {
            return None;
        }
        let x = self.a.powf(-self.d / self.b) - self.c;
        numeric::finite(x).filter(|x| *x > -self.c)
    }

    pub fn analyze(&self, fmt: NumberFormat) -> LogarithmicAnalysis {
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        let standard_form = self.standard_form(fmt);

        if let Some(reason) = base_problem(a) {
            return LogarithmicAnalysis::InvalidBase(InvalidBase {
                standard_form,
                base: a,
                reason: reason.to_string(),
            });
        }

        let function_type = FunctionType::classify(a, b);
        // c = 0 would otherwise give -0.0
        let asymptote = if c == 0.0 { 0.0 } else { -c };
        let domain = RealSet::from(Interval::above(Bound::Open(asymptote)));
        let range = match function_type.trend {
            Trend::Constant => RealSet::from(Interval::point(d)),
            _ => RealSet::all_reals(),
        };
        let y_intercept = self.y_intercept();
        let x_intercept = self.x_intercept();

        LogarithmicAnalysis::Logarithmic(Box::new(LogarithmicProperties {
            standard_form,
            function_type,
            function_type_label: function_type.label(Family::Logarithmic),
            domain_description: domain.display(fmt),
            domain,
            range_description: range.display(fmt),
            range,
            asymptote,
            asymptote_description: format!("x = {}", fmt.compact(asymptote)),
            y_intercept,
            y_intercept_description: match y_intercept {
                Some(y) => format!("y = {}", fmt.fixed(y)),
                None if c > 0.0 => "undefined".to_string(),
                None => "No y-intercept (outside domain)".to_string(),
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
    use std::f64::consts::E;

    fn props(a: f64, b: f64, c: f64, d: f64) -> LogarithmicProperties {
        match LogarithmicParams::new(a, b, c, d).analyze(NumberFormat::default()) {
            LogarithmicAnalysis::Logarithmic(p) => *p,
            other => panic!("expected logarithmic, got {:?}", other),
        }
    }

    #[test]
    fn test_common_log() {
        let p = props(10.0, 1.0, 0.0, 0.0);
        assert_eq!(p.standard_form, "f(x) = log_10(x)");
        assert_eq!(p.y_intercept, None);
        assert_eq!(p.y_intercept_description, "No y-intercept (outside domain)");
        assert_eq!(p.domain_description, "(0, ∞)");
        assert_eq!(p.domain.intervals[0].lower, Bound::Open(0.0));
        assert!(p.asymptote.is_sign_positive());
        assert_eq!(p.asymptote_description, "x = 0");
        assert_eq!(p.range_description, "(-∞, ∞)");
        assert_eq!(p.x_intercept, Some(1.0));
        assert_eq!(p.function_type_label, "logarithmic growth");
        assert_eq!(
            p.special_cases,
            vec![LogarithmicSpecialCase::CommonLogarithm, LogarithmicSpecialCase::Basic]
        );
    }

    #[test]
    fn test_shifted_log() {
        let p = props(2.0, 2.0, 1.0, 0.0);
        assert_eq!(p.standard_form, "f(x) = 2·log_2(x + 1)");
        assert_eq!(p.domain_description, "(-1, ∞)");
        assert_eq!(p.asymptote, -1.0);
        assert_eq!(p.asymptote_description, "x = -1");
        assert_eq!(p.y_intercept, Some(0.0));
        assert_eq!(p.x_intercept, Some(0.0));
    }

    #[test]
    fn test_domain_stays_open_for_negative_shift() {
        let p = props(2.0, 1.0, -3.0, 0.0);
        assert_eq!(p.domain_description, "(3, ∞)");
        assert!(!p.domain.contains(3.0));
        assert_eq!(p.standard_form, "f(x) = log_2(x - 3)");
        assert_eq!(p.y_intercept, None);
        assert_eq!(p.x_intercept, Some(4.0));
    }

    #[test]
    fn test_intercept_values() {
        let p = props(2.0, 1.0, 4.0, 1.0);
        assert_eq!(p.y_intercept, Some(3.0));
        assert_eq!(p.y_intercept_description, "y = 3.0000");
        // log_2(x + 4) = -1
        assert_eq!(p.x_intercept, Some(-3.5));
    }

    #[test]
    fn test_x_intercept_outside_domain_rejected() {
        // 2^-2000 underflows to 0, landing on the excluded boundary
        let p = props(2.0, 1.0, 0.0, 2000.0);
        assert_eq!(p.x_intercept, None);
        assert_eq!(p.x_intercept_description, "No x-intercept");

        let p = props(2.0, 1.0, 0.0, -2000.0);
        assert_eq!(p.x_intercept, None);
    }

    #[test]
    fn test_function_types() {
        assert_eq!(props(0.5, 1.0, 0.0, 0.0).function_type_label, "logarithmic decay");
        assert_eq!(props(2.0, -1.0, 0.0, 0.0).function_type_label, "logarithmic decay (negative)");
        assert_eq!(props(0.5, -1.0, 0.0, 0.0).function_type_label, "logarithmic growth (negative)");
    }

    #[test]
    fn test_zero_coefficient() {
        let p = props(2.0, 0.0, 1.0, 4.0);
        assert_eq!(p.standard_form, "f(x) = 4");
        assert_eq!(p.function_type.trend, Trend::Constant);
        assert_eq!(p.range_description, "{4}");
        assert_eq!(p.x_intercept, None);
        assert_eq!(p.domain_description, "(-1, ∞)");
    }

    #[test]
    fn test_natural_log() {
        let p = props(E, 1.0, 0.0, -3.0);
        assert_eq!(p.standard_form, "f(x) = ln(x) - 3");
        assert_eq!(p.special_cases, vec![LogarithmicSpecialCase::NaturalLogarithm]);
        assert!((p.x_intercept.unwrap() - E.powi(3)).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_bases() {
        let check = |a: f64, needle: &str| match LogarithmicParams::new(a, 1.0, 0.0, 0.0)
            .analyze(NumberFormat::default())
        {
            LogarithmicAnalysis::InvalidBase(invalid) => {
                assert!(invalid.reason.contains(needle), "a={}: {}", a, invalid.reason);
                assert_eq!(invalid.base.to_bits(), a.to_bits());
            }
            other => panic!("a={}: {:?}", a, other),
        };
        check(1.0, "cannot be 1");
        check(0.0, "positive");
        check(-4.0, "positive");
    }

    #[test]
    fn test_evaluate() {
        let f = LogarithmicParams::new(2.0, 1.0, 0.0, 0.0);
        assert_eq!(f.evaluate(8.0).map(|y| (y - 3.0).abs() < 1e-12), Some(true));
        assert_eq!(f.evaluate(0.0), None);
        assert_eq!(f.evaluate(-1.0), None);
        assert_eq!(LogarithmicParams::new(1.0, 1.0, 0.0, 0.0).evaluate(2.0), None);
    }
}
