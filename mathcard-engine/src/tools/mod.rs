//! Engine operations exposed as registry tools
//!
//! Every tool reads its arguments from a JSON object, runs one engine
//! operation and returns the serialized record.

mod analysis;
mod catalog;
mod solvers;

pub use analysis::{Analyze, Exponential, Linear, Logarithmic, Quadratic};
pub use catalog::{DomainRangeTool, Sample};
pub use solvers::{LinearInequalityTool, QuadraticInequalityTool, SolveExponential, SolveLogarithmic};

use crate::family::FunctionParams;
use crate::helpers::json_type_name;
use mathcard_core::EngineError;
use serde_json::Value;

/// Read a tagged `FunctionParams` from `value` (`{"family": ..., "a": ...}`)
pub(crate) fn function_params(value: &Value, tool: &str, arg: &str) -> Result<FunctionParams, EngineError> {
    if !value.is_object() {
        return Err(EngineError::arg_type(tool, arg, "object", json_type_name(value)));
    }
    serde_json::from_value(value.clone()).map_err(|e| {
        EngineError::from(e)
            .with_suggestion("Expected {\"family\": \"linear|quadratic|exponential|logarithmic\", ...coefficients}")
            .in_tool(tool)
            .for_arg(arg)
    })
}
