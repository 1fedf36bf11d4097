//! Equation and inequality tools

use crate::equation::{ExponentialEquation, LogarithmicEquation};
use crate::helpers::{number_arg, optional_number, relation_arg, to_json};
use crate::inequality::{LinearInequality, QuadraticInequality};
use mathcard_plugin::prelude::*;
use serde_json::Value;

const CATEGORY: &str = "solvers";

// ============ solve_exponential ============

pub struct SolveExponential;

static SOLVE_EXPONENTIAL_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("a", "number", "Coefficient of b^x"),
    ArgMeta::required("b", "number", "Base"),
    ArgMeta::optional("c", "number", "Constant added on the left", "0"),
    ArgMeta::optional("target", "number", "Right-hand side", "0"),
];

static SOLVE_EXPONENTIAL_EXAMPLES: [&str; 2] = [
    "solve_exponential(a=1, b=2, c=0, target=8) → x = 3",
    "solve_exponential(a=1, b=2, c=0, target=-8) → no real solution",
];

static SOLVE_EXPONENTIAL_RELATED: [&str; 2] = ["exponential", "solve_logarithmic"];

impl ToolPlugin for SolveExponential {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "solve_exponential",
            description: "Solve a·b^x + c = target for x",
            usage: "solve_exponential(a, b, [c], [target])",
            args: &SOLVE_EXPONENTIAL_ARGS,
            returns: "EquationSolution",
            examples: &SOLVE_EXPONENTIAL_EXAMPLES,
            category: CATEGORY,
            related: &SOLVE_EXPONENTIAL_RELATED,
        }
    }

    fn call(&self, args: &Value, ctx: &EvalContext) -> Result<Value, EngineError> {
        let tool = "solve_exponential";
        let equation = ExponentialEquation::new(
            number_arg(args, tool, "a")?,
            number_arg(args, tool, "b")?,
            optional_number(args, tool, "c", 0.0)?,
            optional_number(args, tool, "target", 0.0)?,
        );
        to_json(&equation.solve(ctx.format()))
    }
}

// ============ solve_logarithmic ============

pub struct SolveLogarithmic;

static SOLVE_LOGARITHMIC_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("a", "number", "Coefficient of log_b(x)"),
    ArgMeta::required("b", "number", "Base, positive and not 1"),
    ArgMeta::optional("c", "number", "Constant added on the left", "0"),
    ArgMeta::optional("target", "number", "Right-hand side", "0"),
];

static SOLVE_LOGARITHMIC_EXAMPLES: [&str; 1] = ["solve_logarithmic(a=2, b=10, c=1, target=5) → x = 100"];

static SOLVE_LOGARITHMIC_RELATED: [&str; 2] = ["logarithmic", "solve_exponential"];

impl ToolPlugin for SolveLogarithmic {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "solve_logarithmic",
            description: "Solve a·log_b(x) + c = target for x",
            usage: "solve_logarithmic(a, b, [c], [target])",
            args: &SOLVE_LOGARITHMIC_ARGS,
            returns: "EquationSolution",
            examples: &SOLVE_LOGARITHMIC_EXAMPLES,
            category: CATEGORY,
            related: &SOLVE_LOGARITHMIC_RELATED,
        }
    }

    fn call(&self, args: &Value, ctx: &EvalContext) -> Result<Value, EngineError> {
        let tool = "solve_logarithmic";
        let equation = LogarithmicEquation::new(
            number_arg(args, tool, "a")?,
            number_arg(args, tool, "b")?,
            optional_number(args, tool, "c", 0.0)?,
            optional_number(args, tool, "target", 0.0)?,
        );
        to_json(&equation.solve(ctx.format()))
    }
}

// ============ linear_inequality ============

pub struct LinearInequalityTool;

static LINEAR_INEQUALITY_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("a", "number", "Coefficient of x"),
    ArgMeta::required("b", "number", "Constant term"),
    ArgMeta::required("relation", "string", "One of >, >=, <, <="),
];

static LINEAR_INEQUALITY_EXAMPLES: [&str; 2] = [
    "linear_inequality(a=2, b=-6, relation='>') → x > 3",
    "linear_inequality(a=0, b=-1, relation='<') → all real numbers",
];

static LINEAR_INEQUALITY_RELATED: [&str; 2] = ["quadratic_inequality", "linear"];

impl ToolPlugin for LinearInequalityTool {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "linear_inequality",
            description: "Solve ax + b ⋈ 0",
            usage: "linear_inequality(a, b, relation)",
            args: &LINEAR_INEQUALITY_ARGS,
            returns: "InequalitySolution",
            examples: &LINEAR_INEQUALITY_EXAMPLES,
            category: CATEGORY,
            related: &LINEAR_INEQUALITY_RELATED,
        }
    }

    fn call(&self, args: &Value, ctx: &EvalContext) -> Result<Value, EngineError> {
        let tool = "linear_inequality";
        let inequality = LinearInequality::new(
            number_arg(args, tool, "a")?,
            number_arg(args, tool, "b")?,
            relation_arg(args, tool, "relation")?,
        );
        to_json(&inequality.solve(ctx.format()))
    }
}

// ============ quadratic_inequality ============

pub struct QuadraticInequalityTool;

static QUADRATIC_INEQUALITY_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("a", "number", "Coefficient of x²"),
    ArgMeta::required("b", "number", "Coefficient of x"),
    ArgMeta::required("c", "number", "Constant term"),
    ArgMeta::required("relation", "string", "One of >, >=, <, <="),
];

static QUADRATIC_INEQUALITY_EXAMPLES: [&str; 3] = [
    "quadratic_inequality(a=1, b=-3, c=2, relation='>') → x < 1 or x > 2",
    "quadratic_inequality(a=1, b=-2, c=1, relation='>=') → all real numbers",
    "quadratic_inequality(a=1, b=0, c=1, relation='<') → no solution",
];

static QUADRATIC_INEQUALITY_RELATED: [&str; 2] = ["linear_inequality", "quadratic"];

impl ToolPlugin for QuadraticInequalityTool {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "quadratic_inequality",
            description: "Solve ax² + bx + c ⋈ 0",
            usage: "quadratic_inequality(a, b, c, relation)",
            args: &QUADRATIC_INEQUALITY_ARGS,
            returns: "InequalitySolution",
            examples: &QUADRATIC_INEQUALITY_EXAMPLES,
            category: CATEGORY,
            related: &QUADRATIC_INEQUALITY_RELATED,
        }
    }

    fn call(&self, args: &Value, ctx: &EvalContext) -> Result<Value, EngineError> {
        let tool = "quadratic_inequality";
        let inequality = QuadraticInequality::new(
            number_arg(args, tool, "a")?,
            number_arg(args, tool, "b")?,
            number_arg(args, tool, "c")?,
            relation_arg(args, tool, "relation")?,
        );
        to_json(&inequality.solve(ctx.format()))
    }
}
