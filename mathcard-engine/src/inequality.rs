//! Linear and quadratic inequalities against zero
//!
//! `ax + b ⋈ 0` and `ax² + bx + c ⋈ 0` with `⋈` one of `>`, `≥`, `<`, `≤`.
//! The result is always a [`SolutionSet`]; an empty set is an ordinary
//! answer, not an error.

use crate::helpers::polynomial_text;
use crate::quadratic::{factored_text, solve_roots, RootType};
use mathcard_core::{numeric, Bound, Interval, NumberFormat, RealSet, Relation};
use serde::{Deserialize, Serialize};

/// Set of `x` satisfying an inequality
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolutionSet {
    AllReals,
    Empty,
    Interval(Interval),
    /// Two disjoint rays, `left` below `right`
    Union { left: Interval, right: Interval },
    Point { x: f64 },
    /// Every real number except one
    AllExcept { x: f64 },
}

impl SolutionSet {
    pub fn contains(&self, x: f64) -> bool {
        match self {
            SolutionSet::AllReals => true,
            SolutionSet::Empty => false,
            SolutionSet::Interval(i) => i.contains(x),
            SolutionSet::Union { left, right } => left.contains(x) || right.contains(x),
            SolutionSet::Point { x: p } => x == *p,
            SolutionSet::AllExcept { x: p } => x != *p,
        }
    }

    pub fn to_real_set(&self) -> RealSet {
        match *self {
            SolutionSet::AllReals => RealSet::all_reals(),
            SolutionSet::Empty => RealSet::union(Vec::new()),
            SolutionSet::Interval(i) => RealSet::from(i),
            SolutionSet::Union { left, right } => RealSet::union(vec![left, right]),
            SolutionSet::Point { x } => RealSet::from(Interval::point(x)),
            SolutionSet::AllExcept { x } => RealSet::union(vec![
                Interval::below(Bound::Open(x)),
                Interval::above(Bound::Open(x)),
            ]),
        }
    }

    /// `x > 3`, `1 ≤ x ≤ 2`, `x < 1 or x > 2`, `x ≠ 2`
    pub fn describe(&self, fmt: NumberFormat) -> String {
        match self {
            SolutionSet::AllReals => "All real numbers".to_string(),
            SolutionSet::Empty => "No solution".to_string(),
            SolutionSet::Interval(i) => describe_interval(i, fmt),
            SolutionSet::Union { left, right } => format!(
                "{} or {}",
                describe_interval(left, fmt),
                describe_interval(right, fmt)
            ),
            SolutionSet::Point { x } => format!("x = {}", fmt.compact(*x)),
            SolutionSet::AllExcept { x } => format!("x ≠ {}", fmt.compact(*x)),
        }
    }
}

fn describe_interval(interval: &Interval, fmt: NumberFormat) -> String {
    let num = |v: f64| fmt.compact(v);
    match (interval.lower, interval.upper) {
        (Bound::Unbounded, Bound::Unbounded) => "All real numbers".to_string(),
        (Bound::Open(l), Bound::Unbounded) => format!("x > {}", num(l)),
        (Bound::Closed(l), Bound::Unbounded) => format!("x ≥ {}", num(l)),
        (Bound::Unbounded, Bound::Open(u)) => format!("x < {}", num(u)),
        (Bound::Unbounded, Bound::Closed(u)) => format!("x ≤ {}", num(u)),
        (lower, upper) => {
            let left = match lower {
                Bound::Closed(l) => format!("{} ≤", num(l)),
                _ => format!("{} <", num(lower.value().unwrap_or(f64::NEG_INFINITY))),
            };
            let right = match upper {
                Bound::Closed(u) => format!("≤ {}", num(u)),
                _ => format!("< {}", num(upper.value().unwrap_or(f64::INFINITY))),
            };
            format!("{} x {}", left, right)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryType {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InequalityDetails {
    Linear {
        /// `-b/a`, absent when `a = 0`
        boundary: Option<f64>,
        boundary_type: Option<BoundaryType>,
    },
    Quadratic {
        /// Absent when the coefficients overflow
        discriminant: Option<f64>,
        /// Real roots, ascending
        roots: Vec<f64>,
        root_type: RootType,
        factored_form: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InequalitySolution {
    pub inequality: String,
    pub relation: Relation,
    pub solution: SolutionSet,
    pub description: String,
    pub interval_notation: String,
    pub details: InequalityDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl InequalitySolution {
    fn new(
        inequality: String,
        relation: Relation,
        solution: SolutionSet,
        details: InequalityDetails,
        fmt: NumberFormat,
    ) -> Self {
        Self {
            inequality,
            relation,
            description: solution.describe(fmt),
            interval_notation: solution.to_real_set().display(fmt),
            solution,
            details,
            note: None,
        }
    }

    fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// `ax + b ⋈ 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearInequality {
    pub a: f64,
    pub b: f64,
    pub relation: Relation,
}

/// `ax² + bx + c ⋈ 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticInequality {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub relation: Relation,
}

fn boundary_bound(x: f64, relation: Relation) -> Bound {
    if relation.is_strict() {
        Bound::Open(x)
    } else {
        Bound::Closed(x)
    }
}

impl LinearInequality {
    pub fn new(a: f64, b: f64, relation: Relation) -> Self {
        Self { a, b, relation }
    }

    pub fn text(&self, fmt: NumberFormat) -> String {
        format!(
            "{} {} 0",
            polynomial_text(fmt, &[(self.a, "x"), (self.b, "")]),
            self.relation
        )
    }

    /// Solution set alone
    pub fn solution_set(&self) -> SolutionSet {
        let (a, b, relation) = (self.a, self.b, self.relation);
        if a == 0.0 {
            // b ⋈ 0 holds for every x or for none
            return if relation.holds(b) { SolutionSet::AllReals } else { SolutionSet::Empty };
        }
        let Some(x) = numeric::finite(-b / a) else {
            return SolutionSet::Empty;
        };
        let effective = if a < 0.0 { relation.flipped() } else { relation };
        let bound = boundary_bound(x, effective);
        if effective.is_greater() {
            SolutionSet::Interval(Interval::above(bound))
        } else {
            SolutionSet::Interval(Interval::below(bound))
        }
    }

    pub fn solve(&self, fmt: NumberFormat) -> InequalitySolution {
        let solution = self.solution_set();
        let boundary = if self.a == 0.0 { None } else { numeric::finite(-self.b / self.a) };
        let boundary_type = boundary.map(|_| {
            if self.relation.is_strict() {
                BoundaryType::Open
            } else {
                BoundaryType::Closed
            }
        });
        let result = InequalitySolution::new(
            self.text(fmt),
            self.relation,
            solution,
            InequalityDetails::Linear { boundary, boundary_type },
            fmt,
        );
        if self.a != 0.0 && boundary.is_none() {
            result.with_note("Boundary -b/a is not finite; coefficients are ill-conditioned")
        } else {
            result
        }
    }
}

impl QuadraticInequality {
    pub fn new(a: f64, b: f64, c: f64, relation: Relation) -> Self {
        Self { a, b, c, relation }
    }

    pub fn text(&self, fmt: NumberFormat) -> String {
        format!(
            "{} {} 0",
            polynomial_text(fmt, &[(self.a, "x²"), (self.b, "x"), (self.c, "")]),
            self.relation
        )
    }

    pub fn solve(&self, fmt: NumberFormat) -> InequalitySolution {
        let (a, b, c, relation) = (self.a, self.b, self.c, self.relation);

        if a == 0.0 {
            let linear = LinearInequality::new(b, c, relation).solve(fmt);
            return InequalitySolution {
                inequality: self.text(fmt),
                note: Some(format!(
                    "Not quadratic (a = 0); solved as the linear inequality {}",
                    linear.inequality
                )),
                ..linear
            };
        }

        let Some((discriminant, roots)) = solve_roots(a, b, c) else {
            return InequalitySolution::new(
                self.text(fmt),
                relation,
                SolutionSet::Empty,
                InequalityDetails::Quadratic {
                    discriminant: None,
                    roots: Vec::new(),
                    root_type: RootType::NoReal,
                    factored_form: None,
                },
                fmt,
            )
            .with_note("Coefficients produce non-finite intermediate values");
        };

        let real = roots.real();
        // Divide through by a so the parabola opens upward
        let upward = if a < 0.0 { relation.flipped() } else { relation };
        let solution = match (real.as_slice(), upward.is_greater()) {
            // Outside the roots
            ([r1, r2], true) => SolutionSet::Union {
                left: Interval::below(boundary_bound(*r1, upward)),
                right: Interval::above(boundary_bound(*r2, upward)),
            },
            // Between the roots
            ([r1, r2], false) => SolutionSet::Interval(Interval::between(
                boundary_bound(*r1, upward),
                boundary_bound(*r2, upward),
            )),
            // Touches zero at r and is positive elsewhere
            ([r], true) if upward.is_strict() => SolutionSet::AllExcept { x: *r },
            ([_], true) => SolutionSet::AllReals,
            ([_], false) if upward.is_strict() => SolutionSet::Empty,
            ([r], false) => SolutionSet::Point { x: *r },
            // Strictly positive everywhere
            (_, true) => SolutionSet::AllReals,
            (_, false) => SolutionSet::Empty,
        };

        InequalitySolution::new(
            self.text(fmt),
            relation,
            solution,
            InequalityDetails::Quadratic {
                discriminant: Some(discriminant),
                factored_form: factored_text(a, &roots, fmt),
                root_type: roots.root_type(),
                roots: real,
            },
            fmt,
        )
    }
}
