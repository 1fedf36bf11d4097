//! Inequality relations `>`, `≥`, `<`, `≤`

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error for an unrecognized relation symbol
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown relation '{0}'")]
pub struct ParseRelationError(pub String);

/// Comparison of an expression against zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=", alias = "≥")]
    GreaterEq,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=", alias = "≤")]
    LessEq,
}

impl Relation {
    pub const ALL: [Relation; 4] = [
        Relation::Greater,
        Relation::GreaterEq,
        Relation::Less,
        Relation::LessEq,
    ];

    /// Unicode symbol used in display text
    pub fn symbol(&self) -> &'static str {
        match self {
            Relation::Greater => ">",
            Relation::GreaterEq => "≥",
            Relation::Less => "<",
            Relation::LessEq => "≤",
        }
    }

    /// `>` and `<` exclude the boundary
    pub fn is_strict(&self) -> bool {
        matches!(self, Relation::Greater | Relation::Less)
    }

    /// `>` and `≥` ask for the positive side
    pub fn is_greater(&self) -> bool {
        matches!(self, Relation::Greater | Relation::GreaterEq)
    }

    /// The relation obtained when both sides are multiplied by a negative number
    pub fn flipped(&self) -> Relation {
        match self {
            Relation::Greater => Relation::Less,
            Relation::GreaterEq => Relation::LessEq,
            Relation::Less => Relation::Greater,
            Relation::LessEq => Relation::GreaterEq,
        }
    }

    /// Whether `value ⋈ 0` holds
    pub fn holds(&self, value: f64) -> bool {
        match self {
            Relation::Greater => value > 0.0,
            Relation::GreaterEq => value >= 0.0,
            Relation::Less => value < 0.0,
            Relation::LessEq => value <= 0.0,
        }
    }
}

impl FromStr for Relation {
    type Err = ParseRelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            ">" | "gt" => Ok(Relation::Greater),
            ">=" | "≥" | "ge" | "gte" => Ok(Relation::GreaterEq),
            "<" | "lt" => Ok(Relation::Less),
            "<=" | "≤" | "le" | "lte" => Ok(Relation::LessEq),
            other => Err(ParseRelationError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
