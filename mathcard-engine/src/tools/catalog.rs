//! Standard-function and plotting tools: domain_range, sample

use super::function_params;
use crate::catalog::StandardFunction;
use crate::helpers::{optional_count, optional_number, string_arg, to_json};
use crate::sample::{sample, Evaluate, DEFAULT_X_MAX, DEFAULT_X_MIN};
use mathcard_plugin::prelude::*;
use serde_json::Value;

const CATEGORY: &str = "catalog";

fn standard_function(args: &Value, tool: &str) -> Result<StandardFunction, EngineError> {
    let text = string_arg(args, tool, "function")?;
    text.parse::<StandardFunction>()
        .map_err(|e| EngineError::from(e).in_tool(tool).for_arg("function"))
}

// ============ domain_range ============

pub struct DomainRangeTool;

static DOMAIN_RANGE_ARGS: [ArgMeta; 1] = [ArgMeta::required(
    "function",
    "string",
    "x**2, 1/x, sqrt(x), sin(x), cos(x), tan(x), log(x), exp(x), abs(x) or x**3",
)];

static DOMAIN_RANGE_EXAMPLES: [&str; 2] = [
    "domain_range('1/x') → domain (-∞, 0) ∪ (0, ∞)",
    "domain_range('tan(x)') → domain (-∞, ∞) except π/2 + nπ",
];

static DOMAIN_RANGE_RELATED: [&str; 1] = ["sample"];

impl ToolPlugin for DomainRangeTool {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "domain_range",
            description: "Domain and range of a standard function",
            usage: "domain_range(function)",
            args: &DOMAIN_RANGE_ARGS,
            returns: "DomainRange",
            examples: &DOMAIN_RANGE_EXAMPLES,
            category: CATEGORY,
            related: &DOMAIN_RANGE_RELATED,
        }
    }

    fn call(&self, args: &Value, ctx: &EvalContext) -> Result<Value, EngineError> {
        let f = standard_function(args, "domain_range")?;
        to_json(&f.domain_range(ctx.format()))
    }
}

// ============ sample ============

pub struct Sample;

static SAMPLE_ARGS: [ArgMeta; 5] = [
    ArgMeta::optional("function", "string", "Standard function name; use this or 'params'", "-"),
    ArgMeta::optional("params", "object", "Family parameters, as accepted by analyze", "-"),
    ArgMeta::optional("x_min", "number", "Left end of the range", "-10"),
    ArgMeta::optional("x_max", "number", "Right end of the range", "10"),
    ArgMeta::optional("count", "integer", "Number of grid points", "200"),
];

static SAMPLE_EXAMPLES: [&str; 2] = [
    "sample(function='sqrt(x)', x_min=-1, x_max=4, count=6) → points with x ≥ 0",
    r#"sample(params={"family": "linear", "m": 1, "b": 0}, count=3) → (-10,-10), (0,0), (10,10)"#,
];

static SAMPLE_RELATED: [&str; 2] = ["domain_range", "analyze"];

impl ToolPlugin for Sample {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "sample",
            description: "Evaluate a function on an evenly spaced grid, dropping undefined points",
            usage: "sample(function | params, [x_min], [x_max], [count])",
            args: &SAMPLE_ARGS,
            returns: "PlotSeries",
            examples: &SAMPLE_EXAMPLES,
            category: CATEGORY,
            related: &SAMPLE_RELATED,
        }
    }

    fn call(&self, args: &Value, ctx: &EvalContext) -> Result<Value, EngineError> {
        let tool = "sample";
        let f: Box<dyn Evaluate> = match (args.get("function"), args.get("params")) {
            (Some(_), Some(_)) => {
                return Err(EngineError::invalid_param("pass either 'function' or 'params', not both")
                    .in_tool(tool))
            }
            (Some(_), None) => Box::new(standard_function(args, tool)?),
            (None, Some(params)) => Box::new(function_params(params, tool, "params")?),
            (None, None) => {
                return Err(EngineError::arg_missing(tool, "function")
                    .with_note("either 'function' or 'params' is required"))
            }
        };
        let x_min = optional_number(args, tool, "x_min", DEFAULT_X_MIN)?;
        let x_max = optional_number(args, tool, "x_max", DEFAULT_X_MAX)?;
        let count = optional_count(args, tool, "count", ctx.samples)?;

        let series = sample(f.as_ref(), x_min, x_max, count, ctx.format()).map_err(|e| e.in_tool(tool))?;
        to_json(&series)
    }
}
