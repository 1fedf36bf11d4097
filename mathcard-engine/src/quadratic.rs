//! Quadratic functions `f(x) = ax² + bx + c`
//!
//! The discriminant decides everything else: how many real roots there are,
//! whether a real factored form exists, and (in [`crate::inequality`]) the
//! shape of the solution set. A discriminant within rounding noise of zero
//! is treated as exactly zero.

use crate::family::Point;
use crate::helpers::polynomial_text;
use crate::linear::{LinearParams, LinearProperties};
use mathcard_core::{numeric, Bound, Interval, NumberFormat, RealSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Roots of a quadratic.
///
/// `Distinct` keeps the quadratic-formula pair as computed:
/// `plus = (-b + √D) / 2a` and `minus = (-b - √D) / 2a`. Which one is
/// smaller depends on the sign of `a`; use [`Roots::real`] for an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Roots {
    Distinct { plus: f64, minus: f64 },
    Repeated { root: f64 },
    /// `re ± i·im` with `im > 0`
    Complex { re: f64, im: f64 },
}

impl Roots {
    /// Real roots in ascending order
    pub fn real(&self) -> Vec<f64> {
        match *self {
            Roots::Distinct { plus, minus } => {
                if plus <= minus {
                    vec![plus, minus]
                } else {
                    vec![minus, plus]
                }
            }
            Roots::Repeated { root } => vec![root],
            Roots::Complex { .. } => Vec::new(),
        }
    }

    pub fn root_type(&self) -> RootType {
        match self {
            Roots::Distinct { .. } => RootType::TwoDistinct,
            Roots::Repeated { .. } => RootType::OneRepeated,
            Roots::Complex { .. } => RootType::NoReal,
        }
    }

    pub fn describe(&self, fmt: NumberFormat) -> String {
        match *self {
            Roots::Distinct { plus, minus } => format!(
                "2 distinct real roots: x = {}, x = {}",
                fmt.fixed(plus),
                fmt.fixed(minus)
            ),
            Roots::Repeated { root } => format!("1 repeated root: x = {}", fmt.fixed(root)),
            Roots::Complex { re, im } => format!(
                "No real roots (complex roots: {} ± {}i)",
                fmt.fixed(re),
                fmt.fixed(im)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootType {
    TwoDistinct,
    OneRepeated,
    NoReal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtremumKind {
    Minimum,
    Maximum,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extremum {
    pub kind: ExtremumKind,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuadraticSpecialCase {
    Basic,
    AxisSymmetric,
    ThroughOrigin,
}

impl QuadraticSpecialCase {
    pub fn label(&self) -> &'static str {
        match self {
            QuadraticSpecialCase::Basic => "Basic quadratic function (y = x²)",
            QuadraticSpecialCase::AxisSymmetric => "Axis-symmetric function (y = ax²)",
            QuadraticSpecialCase::ThroughOrigin => "Passes through the origin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadraticProperties {
    pub standard_form: String,
    pub vertex_form: String,
    pub factored_form: Option<String>,
    pub factored_description: String,
    pub discriminant: f64,
    pub roots: Roots,
    pub root_type: RootType,
    pub roots_description: String,
    pub vertex: Point,
    pub extremum: Extremum,
    pub y_intercept: f64,
    pub y_intercept_description: String,
    pub domain: RealSet,
    pub domain_description: String,
    pub range: RealSet,
    pub range_description: String,
    pub special_cases: Vec<QuadraticSpecialCase>,
}

/// `a = 0`: the expression is the line `bx + c`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegenerateQuadratic {
    pub standard_form: String,
    pub reason: String,
    pub linear: LinearProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuadraticAnalysis {
    Quadratic(Box<QuadraticProperties>),
    NotQuadratic(DegenerateQuadratic),
    /// Coefficients so large or small that intermediate values overflow
    IllConditioned { standard_form: String, message: String },
}

impl QuadraticAnalysis {
    pub fn properties(&self) -> Option<&QuadraticProperties> {
        match self {
            QuadraticAnalysis::Quadratic(props) => Some(props),
            _ => None,
        }
    }
}

/// Discriminant (snapped to zero when negligible) and roots.
///
/// `None` when `a = 0` or any intermediate value is not finite.
pub(crate) fn solve_roots(a: f64, b: f64, c: f64) -> Option<(f64, Roots)> {
    if a == 0.0 {
        return None;
    }
    let b2 = b * b;
    let four_ac = 4.0 * a * c;
    let mut d = b2 - four_ac;
    if !numeric::all_finite(&[b2, four_ac, d]) {
        return None;
    }
    if numeric::is_negligible(d, b2.max(four_ac.abs())) {
        d = 0.0;
    }
    let two_a = 2.0 * a;
    let roots = if d > 0.0 {
        let sq = d.sqrt();
        Roots::Distinct {
            plus: numeric::finite((-b + sq) / two_a)?,
            minus: numeric::finite((-b - sq) / two_a)?,
        }
    } else if d == 0.0 {
        Roots::Repeated { root: numeric::finite(-b / two_a)? }
    } else {
        Roots::Complex {
            re: numeric::finite(-b / two_a)?,
            im: numeric::finite((-d).sqrt() / two_a.abs())?,
        }
    };
    Some((d, roots))
}

/// `a(x - r1)(x - r2)` or `a(x - r)²`, absent for complex roots
pub(crate) fn factored_text(a: f64, roots: &Roots, fmt: NumberFormat) -> Option<String> {
    let lead = fmt.coefficient(a);
    match roots.real().as_slice() {
        [r1, r2] => Some(format!("{}{}{}", lead, fmt.shifted("x", *r1), fmt.shifted("x", *r2))),
        [r] => Some(format!("{}{}²", lead, fmt.shifted("x", *r))),
        _ => None,
    }
}

impl QuadraticParams {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn evaluate(&self, x: f64) -> Option<f64> {
        numeric::finite(self.a * x * x + self.b * x + self.c)
    }

    /// `f(x) = x² - 4x + 3`
    pub fn standard_form(&self, fmt: NumberFormat) -> String {
        format!(
            "f(x) = {}",
            polynomial_text(fmt, &[(self.a, "x²"), (self.b, "x"), (self.c, "")])
        )
    }

    pub fn special_cases(&self) -> Vec<QuadraticSpecialCase> {
        let (a, b, c) = (self.a, self.b, self.c);
        let rules = [
            (a == 1.0 && b == 0.0 && c == 0.0, QuadraticSpecialCase::Basic),
            (b == 0.0 && c == 0.0, QuadraticSpecialCase::AxisSymmetric),
            (c == 0.0, QuadraticSpecialCase::ThroughOrigin),
        ];
        rules.into_iter().filter(|(hit, _)| *hit).map(|(_, case)| case).collect()
    }

    pub fn analyze(&self, fmt: NumberFormat) -> QuadraticAnalysis {
        let (a, b, c) = (self.a, self.b, self.c);
        let standard_form = self.standard_form(fmt);

        if a == 0.0 {
            return QuadraticAnalysis::NotQuadratic(DegenerateQuadratic {
                standard_form,
                reason: "Not a quadratic function (a = 0); analyzed as the linear function bx + c"
                    .to_string(),
                linear: LinearParams::new(b, c).analyze(fmt),
            });
        }

        let h = -b / (2.0 * a);
        let k = a * h * h + b * h + c;
        let solved = solve_roots(a, b, c);
        let (discriminant, roots, h, k) = match (solved, numeric::finite(h), numeric::finite(k)) {
            (Some((d, roots)), Some(h), Some(k)) => (d, roots, h, k),
            _ => {
                return QuadraticAnalysis::IllConditioned {
                    standard_form,
                    message: "Coefficients produce non-finite intermediate values".to_string(),
                }
            }
        };

        let sign = if a > 0.0 { "" } else { "-" };
        let magnitude = fmt.coefficient(a.abs());
        let mut vertex_form = format!("f(x) = {}{}{}²", sign, magnitude, fmt.shifted("x", h));
        if fmt.compact(k) != "0" {
            vertex_form = format!("{} {}", vertex_form, fmt.signed(k));
        }

        let factored_form = factored_text(a, &roots, fmt).map(|f| format!("f(x) = {}", f));
        let factored_description = match roots.root_type() {
            RootType::TwoDistinct => "Product of two distinct linear factors",
            RootType::OneRepeated => "Perfect square",
            RootType::NoReal => "No real factored form (complex roots)",
        }
        .to_string();

        let (extremum_kind, range) = if a > 0.0 {
            (ExtremumKind::Minimum, Interval::above(Bound::Closed(k)))
        } else {
            (ExtremumKind::Maximum, Interval::below(Bound::Closed(k)))
        };
        let domain = RealSet::all_reals();
        let range = RealSet::from(range);

        QuadraticAnalysis::Quadratic(Box::new(QuadraticProperties {
            standard_form,
            vertex_form,
            factored_form,
            factored_description,
            discriminant,
            root_type: roots.root_type(),
            roots_description: roots.describe(fmt),
            roots,
            vertex: Point { x: h, y: k },
            extremum: Extremum { kind: extremum_kind, value: k },
            y_intercept: c,
            y_intercept_description: format!("y = {}", fmt.fixed(c)),
            domain_description: domain.display(fmt),
            domain,
            range_description: range.display(fmt),
            range,
            special_cases: self.special_cases(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(a: f64, b: f64, c: f64) -> QuadraticAnalysis {
        QuadraticParams::new(a, b, c).analyze(NumberFormat::default())
    }

    fn props(a: f64, b: f64, c: f64) -> QuadraticProperties {
        match analyze(a, b, c) {
            QuadraticAnalysis::Quadratic(p) => *p,
            other => panic!("expected quadratic, got {:?}", other),
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_two_roots_with_vertex() {
        let p = props(1.0, -4.0, 3.0);
        assert_eq!(p.discriminant, 4.0);
        assert_eq!(p.roots, Roots::Distinct { plus: 3.0, minus: 1.0 });
        assert_eq!(p.roots.real(), vec![1.0, 3.0]);
        assert_eq!(p.vertex, Point { x: 2.0, y: -1.0 });
        assert_eq!(p.extremum.kind, ExtremumKind::Minimum);
        assert_eq!(p.extremum.value, -1.0);
        assert_eq!(p.standard_form, "f(x) = x² - 4x + 3");
        assert_eq!(p.vertex_form, "f(x) = (x - 2)² - 1");
        assert_eq!(p.factored_form.as_deref(), Some("f(x) = (x - 1)(x - 3)"));
        assert_eq!(p.roots_description, "2 distinct real roots: x = 3.0000, x = 1.0000");
        assert_eq!(p.range_description, "[-1, ∞)");
    }

    #[test]
    fn test_formula_pair_with_negative_leading_coefficient() {
        // (-b + √D) / 2a is the smaller root when a < 0
        let p = props(-1.0, 0.0, 4.0);
        assert_eq!(p.roots, Roots::Distinct { plus: -2.0, minus: 2.0 });
        assert_eq!(p.roots.real(), vec![-2.0, 2.0]);
        assert_eq!(p.extremum.kind, ExtremumKind::Maximum);
        assert_eq!(p.range_description, "(-∞, 4]");
        assert_eq!(p.vertex_form, "f(x) = -x² + 4");
        assert_eq!(p.factored_form.as_deref(), Some("f(x) = -(x + 2)(x - 2)"));
    }

    #[test]
    fn test_repeated_root_is_vertex() {
        let p = props(1.0, -4.0, 4.0);
        assert_eq!(p.discriminant, 0.0);
        assert_eq!(p.roots, Roots::Repeated { root: 2.0 });
        assert_eq!(p.root_type, RootType::OneRepeated);
        assert_eq!(p.roots.real(), vec![p.vertex.x]);
        assert_eq!(p.factored_form.as_deref(), Some("f(x) = (x - 2)²"));
        assert_eq!(p.roots_description, "1 repeated root: x = 2.0000");
    }

    #[test]
    fn test_repeated_root_property() {
        for (a, r) in [(1.0, 3.0), (-2.0, -1.5), (0.5, 0.25), (4.0, 0.0)] {
            // a(x - r)² expanded
            let p = props(a, -2.0 * a * r, a * r * r);
            match p.roots {
                Roots::Repeated { root } => assert!(approx(root, p.vertex.x)),
                other => panic!("a={} r={}: {:?}", a, r, other),
            }
        }
    }

    #[test]
    fn test_nearly_zero_discriminant_snaps() {
        // 0.1² - 4 · 0.0025 · 1 is not exactly zero in binary
        let p = props(0.0025, 0.1, 1.0);
        assert_eq!(p.discriminant, 0.0);
        assert_eq!(p.root_type, RootType::OneRepeated);
    }

    #[test]
    fn test_distinct_roots_satisfy_equation() {
        let cases = [(1.0, -3.0, 2.0), (2.0, 5.0, -3.0), (-3.0, 1.0, 7.0), (0.5, -2.0, 0.0), (1e-3, 10.0, 1.0)];
        for (a, b, c) in cases {
            let p = props(a, b, c);
            assert!(p.discriminant > 0.0);
            let roots = p.roots.real();
            assert_eq!(roots.len(), 2);
            for x in roots {
                let y = a * x * x + b * x + c;
                assert!(y.abs() < 1e-6, "a={} b={} c={} x={} y={}", a, b, c, x, y);
            }
        }
    }

    #[test]
    fn test_small_coefficients_are_not_snapped() {
        // 0.0001x² - 0.000001: D = 4e-10, roots ±0.1
        let p = props(1e-4, 0.0, -1e-6);
        assert!(p.discriminant > 0.0);
        assert_eq!(p.root_type, RootType::TwoDistinct);
        let roots = p.roots.real();
        assert!(approx(roots[0], -0.1));
        assert!(approx(roots[1], 0.1));

        // 0.001x² + 0.00001x: roots -0.01 and 0
        let p = props(1e-3, 1e-5, 0.0);
        assert_eq!(p.root_type, RootType::TwoDistinct);
        let roots = p.roots.real();
        assert!(approx(roots[0], -0.01));
        assert!(approx(roots[1], 0.0));
        for x in roots {
            assert!((1e-3 * x * x + 1e-5 * x).abs() < 1e-12);
        }
    }

    #[test]
    fn test_complex_roots() {
        let p = props(1.0, 2.0, 5.0);
        assert_eq!(p.discriminant, -16.0);
        assert_eq!(p.roots, Roots::Complex { re: -1.0, im: 2.0 });
        assert!(p.roots.real().is_empty());
        assert_eq!(p.root_type, RootType::NoReal);
        assert_eq!(p.factored_form, None);
        assert_eq!(p.factored_description, "No real factored form (complex roots)");
        assert_eq!(p.roots_description, "No real roots (complex roots: -1.0000 ± 2.0000i)");
    }

    #[test]
    fn test_complex_imaginary_part_positive_for_negative_a() {
        let p = props(-1.0, 0.0, -4.0);
        assert_eq!(p.roots, Roots::Complex { re: 0.0, im: 2.0 });
    }

    #[test]
    fn test_not_quadratic() {
        match analyze(0.0, 2.0, -4.0) {
            QuadraticAnalysis::NotQuadratic(degenerate) => {
                assert_eq!(degenerate.standard_form, "f(x) = 2x - 4");
                assert!(degenerate.reason.starts_with("Not a quadratic function"));
                assert_eq!(degenerate.linear.x_intercept, Some(2.0));
            }
            other => panic!("expected not quadratic, got {:?}", other),
        }
    }

    #[test]
    fn test_ill_conditioned() {
        match analyze(1e300, 1e300, 1e300) {
            QuadraticAnalysis::IllConditioned { message, .. } => {
                assert!(message.contains("non-finite"));
            }
            other => panic!("expected ill-conditioned, got {:?}", other),
        }
    }

    #[test]
    fn test_special_cases_independent() {
        assert_eq!(
            props(1.0, 0.0, 0.0).special_cases,
            vec![
                QuadraticSpecialCase::Basic,
                QuadraticSpecialCase::AxisSymmetric,
                QuadraticSpecialCase::ThroughOrigin
            ]
        );
        assert_eq!(
            props(3.0, 0.0, 0.0).special_cases,
            vec![QuadraticSpecialCase::AxisSymmetric, QuadraticSpecialCase::ThroughOrigin]
        );
        assert_eq!(props(0.5, -2.0, 0.0).special_cases, vec![QuadraticSpecialCase::ThroughOrigin]);
        assert!(props(1.0, 2.0, -3.0).special_cases.is_empty());
    }

    #[test]
    fn test_factored_form_with_zero_root() {
        let p = props(0.5, -2.0, 0.0);
        assert_eq!(p.factored_form.as_deref(), Some("f(x) = 0.5x(x - 4)"));
        assert_eq!(p.vertex_form, "f(x) = 0.5(x - 2)² - 2");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(analyze(1.0, -3.0, 2.0)).unwrap();
        assert_eq!(json["kind"], "quadratic");
        assert_eq!(json["roots"]["kind"], "distinct");
        assert_eq!(json["root_type"], "two_distinct");
        assert_eq!(json["extremum"]["kind"], "minimum");

        let json = serde_json::to_value(analyze(0.0, 1.0, 1.0)).unwrap();
        assert_eq!(json["kind"], "not_quadratic");
    }
}
