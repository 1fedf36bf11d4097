//! Named standard functions with known domain and range

use mathcard_core::{numeric, Bound, EngineError, Interval, NumberFormat, RealSet};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Below this `|cos x|`, `tan x` is treated as undefined
const TAN_POLE_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown function '{0}'")]
pub struct ParseFunctionError(pub String);

impl From<ParseFunctionError> for EngineError {
    fn from(e: ParseFunctionError) -> Self {
        let known: Vec<&str> = StandardFunction::ALL.iter().map(|f| f.expression()).collect();
        EngineError::parse_error(e.to_string())
            .with_suggestion(format!("Known functions: {}", known.join(", ")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardFunction {
    Square,
    Reciprocal,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Log,
    Exp,
    Abs,
    Cube,
}

impl StandardFunction {
    pub const ALL: [StandardFunction; 10] = [
        StandardFunction::Square,
        StandardFunction::Reciprocal,
        StandardFunction::Sqrt,
        StandardFunction::Sin,
        StandardFunction::Cos,
        StandardFunction::Tan,
        StandardFunction::Log,
        StandardFunction::Exp,
        StandardFunction::Abs,
        StandardFunction::Cube,
    ];

    /// Canonical expression text
    pub fn expression(&self) -> &'static str {
        match self {
            StandardFunction::Square => "x**2",
            StandardFunction::Reciprocal => "1/x",
            StandardFunction::Sqrt => "sqrt(x)",
            StandardFunction::Sin => "sin(x)",
            StandardFunction::Cos => "cos(x)",
            StandardFunction::Tan => "tan(x)",
            StandardFunction::Log => "log(x)",
            StandardFunction::Exp => "exp(x)",
            StandardFunction::Abs => "abs(x)",
            StandardFunction::Cube => "x**3",
        }
    }

    pub fn domain(&self) -> RealSet {
        match self {
            StandardFunction::Reciprocal => punctured_at_zero(),
            StandardFunction::Sqrt => RealSet::from(Interval::above(Bound::Closed(0.0))),
            StandardFunction::Log => RealSet::from(Interval::above(Bound::Open(0.0))),
            StandardFunction::Tan => RealSet::all_reals().excluding("π/2 + nπ"),
            _ => RealSet::all_reals(),
        }
    }

    pub fn range(&self) -> RealSet {
        match self {
            StandardFunction::Square | StandardFunction::Sqrt | StandardFunction::Abs => {
                RealSet::from(Interval::above(Bound::Closed(0.0)))
            }
            StandardFunction::Reciprocal => punctured_at_zero(),
            StandardFunction::Sin | StandardFunction::Cos => {
                RealSet::from(Interval::between(Bound::Closed(-1.0), Bound::Closed(1.0)))
            }
            StandardFunction::Exp => RealSet::from(Interval::above(Bound::Open(0.0))),
            StandardFunction::Tan | StandardFunction::Log | StandardFunction::Cube => {
                RealSet::all_reals()
            }
        }
    }

    /// `f(x)`, or `None` outside the domain
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        let y = match self {
            StandardFunction::Square => x * x,
            StandardFunction::Reciprocal if x == 0.0 => return None,
            StandardFunction::Reciprocal => 1.0 / x,
            StandardFunction::Sqrt if x < 0.0 => return None,
            StandardFunction::Sqrt => x.sqrt(),
            StandardFunction::Sin => x.sin(),
            StandardFunction::Cos => x.cos(),
            StandardFunction::Tan if x.cos().abs() <= TAN_POLE_TOLERANCE => return None,
            StandardFunction::Tan => x.tan(),
            StandardFunction::Log if x <= 0.0 => return None,
            StandardFunction::Log => x.ln(),
            StandardFunction::Exp => x.exp(),
            StandardFunction::Abs => x.abs(),
            StandardFunction::Cube => x * x * x,
        };
        numeric::finite(y)
    }

    pub fn domain_range(&self, fmt: NumberFormat) -> DomainRange {
        let domain = self.domain();
        let range = self.range();
        DomainRange {
            function: self.expression().to_string(),
            domain_description: domain.display(fmt),
            domain,
            range_description: range.display(fmt),
            range,
        }
    }
}

fn punctured_at_zero() -> RealSet {
    RealSet::union(vec![
        Interval::below(Bound::Open(0.0)),
        Interval::above(Bound::Open(0.0)),
    ])
}

impl FromStr for StandardFunction {
    type Err = ParseFunctionError;

    /// Accepts the canonical text with any spacing, plus `x^2` and `x^3`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let compact = match compact.as_str() {
            "x^2" => "x**2",
            "x^3" => "x**3",
            other => other,
        };
        StandardFunction::ALL
            .into_iter()
            .find(|f| f.expression() == compact)
            .ok_or_else(|| ParseFunctionError(s.trim().to_string()))
    }
}

impl std::fmt::Display for StandardFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainRange {
    pub function: String,
    pub domain: RealSet,
    pub domain_description: String,
    pub range: RealSet,
    pub range_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathcard_core::codes;

    fn describe(expr: &str) -> (String, String) {
        let f: StandardFunction = expr.parse().unwrap();
        let dr = f.domain_range(NumberFormat::default());
        (dr.domain_description, dr.range_description)
    }

    #[test]
    fn test_domain_range_table() {
        let expected = [
            ("x**2", "(-∞, ∞)", "[0, ∞)"),
            ("1/x", "(-∞, 0) ∪ (0, ∞)", "(-∞, 0) ∪ (0, ∞)"),
            ("sqrt(x)", "[0, ∞)", "[0, ∞)"),
            ("sin(x)", "(-∞, ∞)", "[-1, 1]"),
            ("cos(x)", "(-∞, ∞)", "[-1, 1]"),
            ("tan(x)", "(-∞, ∞) except π/2 + nπ", "(-∞, ∞)"),
            ("log(x)", "(0, ∞)", "(-∞, ∞)"),
            ("exp(x)", "(-∞, ∞)", "(0, ∞)"),
            ("abs(x)", "(-∞, ∞)", "[0, ∞)"),
            ("x**3", "(-∞, ∞)", "(-∞, ∞)"),
        ];
        for (expr, domain, range) in expected {
            assert_eq!(describe(expr), (domain.to_string(), range.to_string()), "{}", expr);
        }
    }

    #[test]
    fn test_parse_aliases_and_spacing() {
        assert_eq!("x^2".parse::<StandardFunction>(), Ok(StandardFunction::Square));
        assert_eq!(" x ** 3 ".parse::<StandardFunction>(), Ok(StandardFunction::Cube));
        assert_eq!("sqrt( x )".parse::<StandardFunction>(), Ok(StandardFunction::Sqrt));
        for f in StandardFunction::ALL {
            assert_eq!(f.expression().parse::<StandardFunction>(), Ok(f));
        }
    }

    #[test]
    fn test_unknown_function() {
        let err = "x**4".parse::<StandardFunction>().unwrap_err();
        assert_eq!(err, ParseFunctionError("x**4".to_string()));

        let err = EngineError::from(err);
        assert_eq!(err.code, codes::PARSE_ERROR);
        assert!(err.message.contains("x**4"));
        assert!(err.suggestion.unwrap().contains("sqrt(x)"));
    }

    #[test]
    fn test_evaluate_respects_domain() {
        assert_eq!(StandardFunction::Reciprocal.evaluate(0.0), None);
        assert_eq!(StandardFunction::Reciprocal.evaluate(4.0), Some(0.25));
        assert_eq!(StandardFunction::Sqrt.evaluate(-1.0), None);
        assert_eq!(StandardFunction::Sqrt.evaluate(9.0), Some(3.0));
        assert_eq!(StandardFunction::Log.evaluate(0.0), None);
        assert_eq!(StandardFunction::Log.evaluate(1.0), Some(0.0));
        assert_eq!(StandardFunction::Tan.evaluate(std::f64::consts::FRAC_PI_2), None);
        assert_eq!(StandardFunction::Tan.evaluate(0.0), Some(0.0));
        assert_eq!(StandardFunction::Exp.evaluate(1000.0), None);
        assert_eq!(StandardFunction::Abs.evaluate(-2.5), Some(2.5));
        assert_eq!(StandardFunction::Cube.evaluate(-2.0), Some(-8.0));
    }

    #[test]
    fn test_values_land_in_range() {
        let xs = [-3.0, -1.0, -0.5, 0.25, 1.0, 2.0, 7.5];
        for f in StandardFunction::ALL {
            let range = f.range();
            for x in xs {
                if let Some(y) = f.evaluate(x) {
                    assert!(f.domain().contains(x), "{} at {}", f, x);
                    assert!(range.contains(y), "{}({}) = {}", f, x, y);
                }
            }
        }
    }

    #[test]
    fn test_serialized_exclusion() {
        let json = serde_json::to_value(StandardFunction::Tan.domain_range(NumberFormat::default())).unwrap();
        assert_eq!(json["domain"]["excluded"], "π/2 + nπ");
        let json = serde_json::to_value(StandardFunction::Sin.domain()).unwrap();
        assert!(json.get("excluded").is_none());
    }
}
