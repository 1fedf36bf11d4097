//! Intervals and unions of intervals on the real line
//!
//! Domains, ranges and inequality solution sets are all described with
//! these types. Endpoints are raw `f64` values; text is produced on demand
//! through a [`NumberFormat`].

use crate::NumberFormat;
use serde::{Deserialize, Serialize};

/// One end of an interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Bound {
    Unbounded,
    Open(f64),
    Closed(f64),
}

impl Bound {
    pub fn value(&self) -> Option<f64> {
        match self {
            Bound::Unbounded => None,
            Bound::Open(v) | Bound::Closed(v) => Some(*v),
        }
    }
}

/// A connected subset of ℝ
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lower: Bound,
    pub upper: Bound,
}

impl Interval {
    pub const fn all_reals() -> Self {
        Self { lower: Bound::Unbounded, upper: Bound::Unbounded }
    }

    /// `(x, ∞)` or `[x, ∞)`
    pub const fn above(lower: Bound) -> Self {
        Self { lower, upper: Bound::Unbounded }
    }

    /// `(-∞, x)` or `(-∞, x]`
    pub const fn below(upper: Bound) -> Self {
        Self { lower: Bound::Unbounded, upper }
    }

    pub const fn between(lower: Bound, upper: Bound) -> Self {
        Self { lower, upper }
    }

    /// The degenerate interval `[x, x]`
    pub const fn point(x: f64) -> Self {
        Self { lower: Bound::Closed(x), upper: Bound::Closed(x) }
    }

    pub fn is_point(&self) -> bool {
        matches!((self.lower, self.upper), (Bound::Closed(a), Bound::Closed(b)) if a == b)
    }

    pub fn contains(&self, x: f64) -> bool {
        let above_lower = match self.lower {
            Bound::Unbounded => true,
            Bound::Open(l) => x > l,
            Bound::Closed(l) => x >= l,
        };
        let below_upper = match self.upper {
            Bound::Unbounded => true,
            Bound::Open(u) => x < u,
            Bound::Closed(u) => x <= u,
        };
        above_lower && below_upper
    }

    /// Interval notation: `(-∞, ∞)`, `[2, ∞)`, `(-1, 3]`, `{5}`.
    pub fn display(&self, fmt: NumberFormat) -> String {
        if self.is_point() {
            if let Some(v) = self.lower.value() {
                return format!("{{{}}}", fmt.compact(v));
            }
        }
        let lower = match self.lower {
            Bound::Unbounded => "(-∞".to_string(),
            Bound::Open(v) => format!("({}", fmt.compact(v)),
            Bound::Closed(v) => format!("[{}", fmt.compact(v)),
        };
        let upper = match self.upper {
            Bound::Unbounded => "∞)".to_string(),
            Bound::Open(v) => format!("{})", fmt.compact(v)),
            Bound::Closed(v) => format!("{}]", fmt.compact(v)),
        };
        format!("{}, {}", lower, upper)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(NumberFormat::default()))
    }
}

/// A union of disjoint intervals, optionally minus a periodic set of points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealSet {
    pub intervals: Vec<Interval>,
    /// Description of a periodic exclusion such as `π/2 + nπ`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded: Option<String>,
}

impl RealSet {
    pub fn all_reals() -> Self {
        Self::from(Interval::all_reals())
    }

    pub fn union(intervals: Vec<Interval>) -> Self {
        Self { intervals, excluded: None }
    }

    pub fn excluding(mut self, points: impl Into<String>) -> Self {
        self.excluded = Some(points.into());
        self
    }

    /// Membership, ignoring any periodic exclusion
    pub fn contains(&self, x: f64) -> bool {
        self.intervals.iter().any(|i| i.contains(x))
    }

    pub fn display(&self, fmt: NumberFormat) -> String {
        let parts: Vec<String> = self.intervals.iter().map(|i| i.display(fmt)).collect();
        let joined = if parts.is_empty() { "∅".to_string() } else { parts.join(" ∪ ") };
        match &self.excluded {
            Some(points) => format!("{} except {}", joined, points),
            None => joined,
        }
    }
}

impl From<Interval> for RealSet {
    fn from(interval: Interval) -> Self {
        Self { intervals: vec![interval], excluded: None }
    }
}

impl std::fmt::Display for RealSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(NumberFormat::default()))
    }
}
