//! MathCard Core - Fundamental types
//!
//! This crate provides the core types used throughout MathCard:
//! - `EngineError`: Structured errors for tool callers
//! - `NumberFormat`: Fixed-precision display of computed values
//! - `Interval` / `RealSet`: Domains, ranges and solution sets
//! - `Relation`: Inequality relations

mod error;
mod format;
mod interval;
mod relation;
pub mod numeric;

pub use error::{EngineError, ErrorContext, Severity, codes};
pub use format::{NumberFormat, DEFAULT_DECIMALS, MAX_DECIMALS};
pub use interval::{Bound, Interval, RealSet};
pub use relation::{ParseRelationError, Relation};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Bound, EngineError, Interval, NumberFormat, RealSet, Relation, Severity};
    pub use crate::error::codes;
    pub use crate::numeric::finite;
}
