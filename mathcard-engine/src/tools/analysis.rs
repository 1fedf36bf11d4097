//! Function analysis tools: analyze, linear, quadratic, exponential, logarithmic

use super::function_params;
use crate::exponential::ExponentialParams;
use crate::helpers::{number_arg, optional_number, to_json};
use crate::linear::LinearParams;
use crate::logarithmic::LogarithmicParams;
use crate::quadratic::QuadraticParams;
use mathcard_plugin::prelude::*;
use serde_json::Value;

const CATEGORY: &str = "analysis";

// ============ analyze ============

pub struct Analyze;

static ANALYZE_ARGS: [ArgMeta; 6] = [
    ArgMeta::required("family", "string", "linear, quadratic, exponential or logarithmic"),
    ArgMeta::optional("m", "number", "Slope (linear)", "-"),
    ArgMeta::optional("a", "number", "Leading coefficient (quadratic) or base (exponential, logarithmic)", "-"),
    ArgMeta::optional("b", "number", "Intercept (linear), linear coefficient (quadratic) or coefficient", "-"),
    ArgMeta::optional("c", "number", "Constant term (quadratic) or inner shift", "0"),
    ArgMeta::optional("d", "number", "Vertical shift (exponential, logarithmic)", "0"),
];

static ANALYZE_EXAMPLES: [&str; 3] = [
    r#"analyze({"family": "linear", "m": 2, "b": -4}) → x-intercept 2"#,
    r#"analyze({"family": "quadratic", "a": 1, "b": -4, "c": 3}) → roots 1, 3"#,
    r#"analyze({"family": "logarithmic", "a": 10, "b": 1}) → domain (0, ∞)"#,
];

static ANALYZE_RELATED: [&str; 4] = ["linear", "quadratic", "exponential", "logarithmic"];

impl ToolPlugin for Analyze {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "analyze",
            description: "Analyze a function from any of the four families",
            usage: r#"analyze({"family": ..., coefficients})"#,
            args: &ANALYZE_ARGS,
            returns: "Properties record tagged by family",
            examples: &ANALYZE_EXAMPLES,
            category: CATEGORY,
            related: &ANALYZE_RELATED,
        }
    }

    fn call(&self, args: &Value, ctx: &EvalContext) -> Result<Value, EngineError> {
        let params = function_params(args, "analyze", "family")?;
        to_json(&params.analyze(ctx.format()))
    }
}

// ============ linear ============

pub struct Linear;

static LINEAR_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("m", "number", "Slope"),
    ArgMeta::required("b", "number", "y-intercept"),
];

static LINEAR_EXAMPLES: [&str; 2] = [
    "linear(m=2, b=-4) → slope increasing, x-intercept 2",
    "linear(m=0, b=5) → constant function, no x-intercept",
];

static LINEAR_RELATED: [&str; 2] = ["analyze", "linear_inequality"];

impl ToolPlugin for Linear {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "linear",
            description: "Slope, intercepts and special cases of f(x) = mx + b",
            usage: "linear(m, b)",
            args: &LINEAR_ARGS,
            returns: "LinearProperties",
            examples: &LINEAR_EXAMPLES,
            category: CATEGORY,
            related: &LINEAR_RELATED,
        }
    }

    fn call(&self, args: &Value, ctx: &EvalContext) -> Result<Value, EngineError> {
        let m = number_arg(args, "linear", "m")?;
        let b = number_arg(args, "linear", "b")?;
        to_json(&LinearParams::new(m, b).analyze(ctx.format()))
    }
}

// ============ quadratic ============

pub struct Quadratic;

static QUADRATIC_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("a", "number", "Coefficient of x²"),
    ArgMeta::required("b", "number", "Coefficient of x"),
    ArgMeta::required("c", "number", "Constant term"),
];

static QUADRATIC_EXAMPLES: [&str; 3] = [
    "quadratic(a=1, b=-4, c=3) → roots 1, 3; vertex (2, -1)",
    "quadratic(a=1, b=2, c=5) → complex roots -1 ± 2i",
    "quadratic(a=0, b=2, c=-4) → not quadratic, analyzed as linear",
];

static QUADRATIC_RELATED: [&str; 2] = ["analyze", "quadratic_inequality"];

impl ToolPlugin for Quadratic {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "quadratic",
            description: "Discriminant, roots, vertex and forms of f(x) = ax² + bx + c",
            usage: "quadratic(a, b, c)",
            args: &QUADRATIC_ARGS,
            returns: "QuadraticAnalysis",
            examples: &QUADRATIC_EXAMPLES,
            category: CATEGORY,
            related: &QUADRATIC_RELATED,
        }
    }

    fn call(&self, args: &Value, ctx: &EvalContext) -> Result<Value, EngineError> {
        let a = number_arg(args, "quadratic", "a")?;
        let b = number_arg(args, "quadratic", "b")?;
        let c = number_arg(args, "quadratic", "c")?;
        to_json(&QuadraticParams::new(a, b, c).analyze(ctx.format()))
    }
}

// ============ exponential ============

pub struct Exponential;

static EXPONENTIAL_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("a", "number", "Base, must be positive"),
    ArgMeta::required("b", "number", "Coefficient"),
    ArgMeta::optional("c", "number", "Horizontal shift inside the exponent", "0"),
    ArgMeta::optional("d", "number", "Vertical shift", "0"),
];

static EXPONENTIAL_EXAMPLES: [&str; 2] = [
    "exponential(a=2, b=1) → growth, y-intercept 1, asymptote y = 0",
    "exponential(a=0.5, b=3, d=1) → decay, range (1, ∞)",
];

static EXPONENTIAL_RELATED: [&str; 2] = ["analyze", "solve_exponential"];

impl ToolPlugin for Exponential {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "exponential",
            description: "Trend, asymptote, intercepts and range of f(x) = b·a^(x+c) + d",
            usage: "exponential(a, b, [c], [d])",
            args: &EXPONENTIAL_ARGS,
            returns: "ExponentialAnalysis",
            examples: &EXPONENTIAL_EXAMPLES,
            category: CATEGORY,
            related: &EXPONENTIAL_RELATED,
        }
    }

    fn call(&self, args: &Value, ctx: &EvalContext) -> Result<Value, EngineError> {
        let a = number_arg(args, "exponential", "a")?;
        let b = number_arg(args, "exponential", "b")?;
        let c = optional_number(args, "exponential", "c", 0.0)?;
        let d = optional_number(args, "exponential", "d", 0.0)?;
        to_json(&ExponentialParams::new(a, b, c, d).analyze(ctx.format()))
    }
}

// ============ logarithmic ============

pub struct Logarithmic;

static LOGARITHMIC_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("a", "number", "Base, positive and not 1"),
    ArgMeta::required("b", "number", "Coefficient"),
    ArgMeta::optional("c", "number", "Shift inside the logarithm", "0"),
    ArgMeta::optional("d", "number", "Vertical shift", "0"),
];

static LOGARITHMIC_EXAMPLES: [&str; 2] = [
    "logarithmic(a=10, b=1) → domain (0, ∞), x-intercept 1",
    "logarithmic(a=2, b=2, c=1) → asymptote x = -1",
];

static LOGARITHMIC_RELATED: [&str; 2] = ["analyze", "solve_logarithmic"];

impl ToolPlugin for Logarithmic {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "logarithmic",
            description: "Domain, asymptote and intercepts of f(x) = b·log_a(x+c) + d",
            usage: "logarithmic(a, b, [c], [d])",
            args: &LOGARITHMIC_ARGS,
            returns: "LogarithmicAnalysis",
            examples: &LOGARITHMIC_EXAMPLES,
            category: CATEGORY,
            related: &LOGARITHMIC_RELATED,
        }
    }

    fn call(&self, args: &Value, ctx: &EvalContext) -> Result<Value, EngineError> {
        let a = number_arg(args, "logarithmic", "a")?;
        let b = number_arg(args, "logarithmic", "b")?;
        let c = optional_number(args, "logarithmic", "c", 0.0)?;
        let d = optional_number(args, "logarithmic", "d", 0.0)?;
        to_json(&LogarithmicParams::new(a, b, c, d).analyze(ctx.format()))
    }
}
