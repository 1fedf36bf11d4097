//! MathCard Function Analysis Engine
//!
//! Closed-form analysis of linear, quadratic, exponential and logarithmic
//! functions, plus exponential/logarithmic equations, linear/quadratic
//! inequalities and a small catalog of standard functions.
//! All computation is plain `f64`; degenerate input is reported in the
//! result records rather than as errors.

mod helpers;
pub mod family;
pub mod linear;
pub mod quadratic;
pub mod exponential;
pub mod logarithmic;
pub mod equation;
pub mod inequality;
pub mod catalog;
pub mod sample;
pub mod tools;

pub use family::{Family, FunctionParams, FunctionProperties, FunctionType, InvalidBase, Point, Trend};
pub use linear::{LinearParams, LinearProperties};
pub use quadratic::{QuadraticAnalysis, QuadraticParams, QuadraticProperties, Roots, RootType};
pub use exponential::{ExponentialAnalysis, ExponentialParams, ExponentialProperties};
pub use logarithmic::{LogarithmicAnalysis, LogarithmicParams, LogarithmicProperties};
pub use equation::{EquationOutcome, EquationSolution, ExponentialEquation, LogarithmicEquation};
pub use inequality::{InequalitySolution, LinearInequality, QuadraticInequality, SolutionSet};
pub use catalog::{DomainRange, ParseFunctionError, StandardFunction};
pub use sample::{sample, Evaluate, PlotSeries};

use mathcard_plugin::ToolRegistry;

/// Load engine tools into registry
pub fn load_engine_tools(registry: ToolRegistry) -> ToolRegistry {
    registry
        // Analysis
        .with_tool(tools::Analyze)
        .with_tool(tools::Linear)
        .with_tool(tools::Quadratic)
        .with_tool(tools::Exponential)
        .with_tool(tools::Logarithmic)
        // Solvers
        .with_tool(tools::SolveExponential)
        .with_tool(tools::SolveLogarithmic)
        .with_tool(tools::LinearInequalityTool)
        .with_tool(tools::QuadraticInequalityTool)
        // Catalog
        .with_tool(tools::DomainRangeTool)
        .with_tool(tools::Sample)
}

/// Create registry with every engine tool
pub fn engine_registry() -> ToolRegistry {
    load_engine_tools(ToolRegistry::new())
}
