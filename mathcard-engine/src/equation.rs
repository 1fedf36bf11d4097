//! Exponential and logarithmic equations in one unknown
//!
//! `a·b^x + c = target` and `a·log_b(x) + c = target`. Every outcome,
//! including "no solution", is a normal [`EquationSolution`].

use crate::helpers::{offset, scaled};
use crate::logarithmic::base_problem;
use mathcard_core::{numeric, NumberFormat};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquationOutcome {
    Solved,
    NoSolution,
    NoRealSolution,
    /// Every real `x` satisfies the equation
    AllReals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquationSolution {
    pub equation: String,
    pub outcome: EquationOutcome,
    pub solutions: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EquationSolution {
    fn solved(equation: String, x: f64) -> Self {
        Self { equation, outcome: EquationOutcome::Solved, solutions: vec![x], message: None }
    }

    fn unsolved(equation: String, outcome: EquationOutcome, message: &str) -> Self {
        Self { equation, outcome, solutions: Vec::new(), message: Some(message.to_string()) }
    }

    pub fn describe(&self, fmt: NumberFormat) -> String {
        match (&self.message, self.solutions.as_slice()) {
            (Some(message), _) => message.clone(),
            (None, [x]) => format!("x = {}", fmt.fixed(*x)),
            (None, xs) => xs
                .iter()
                .map(|x| format!("x = {}", fmt.fixed(*x)))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// `a·b^x + c = target`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentialEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    #[serde(default)]
    pub target: f64,
}

/// `a·log_b(x) + c = target`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogarithmicEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    #[serde(default)]
    pub target: f64,
}

fn equation_text(fmt: NumberFormat, a: f64, body: &str, c: f64, target: f64) -> String {
    format!("{}{} = {}", scaled(fmt, a, body), offset(fmt, c), fmt.compact(target))
}

impl ExponentialEquation {
    pub fn new(a: f64, b: f64, c: f64, target: f64) -> Self {
        Self { a, b, c, target }
    }

    pub fn text(&self, fmt: NumberFormat) -> String {
        equation_text(fmt, self.a, &format!("{}^x", fmt.compact(self.b)), self.c, self.target)
    }

    pub fn solve(&self, fmt: NumberFormat) -> EquationSolution {
        let (a, b, c, target) = (self.a, self.b, self.c, self.target);
        let equation = self.text(fmt);

        if a == 0.0 {
            return EquationSolution::unsolved(equation, EquationOutcome::NoSolution, "No solution (a = 0)");
        }
        if !(b > 0.0) {
            return EquationSolution::unsolved(equation, EquationOutcome::NoSolution, "No solution (invalid base)");
        }
        if b == 1.0 {
            // b^x is identically 1
            return if numeric::approx_eq(a + c, target) {
                EquationSolution::unsolved(
                    equation,
                    EquationOutcome::AllReals,
                    "All real numbers (base 1 and a + c = target)",
                )
            } else {
                EquationSolution::unsolved(
                    equation,
                    EquationOutcome::NoSolution,
                    "No solution (base 1 and a + c ≠ target)",
                )
            };
        }

        let right_side = (target - c) / a;
        if !(right_side > 0.0) {
            return EquationSolution::unsolved(
                equation,
                EquationOutcome::NoRealSolution,
                "No real solution (right side ≤ 0)",
            );
        }

        match numeric::finite(right_side.ln() / b.ln()) {
            Some(x) => EquationSolution::solved(equation, x),
            None => EquationSolution::unsolved(equation, EquationOutcome::NoRealSolution, "No real solution"),
        }
    }
}

impl LogarithmicEquation {
    pub fn new(a: f64, b: f64, c: f64, target: f64) -> Self {
        Self { a, b, c, target }
    }

    pub fn text(&self, fmt: NumberFormat) -> String {
        equation_text(fmt, self.a, &format!("log_{}(x)", fmt.compact(self.b)), self.c, self.target)
    }

    pub fn solve(&self, fmt: NumberFormat) -> EquationSolution {
        let (a, b, c, target) = (self.a, self.b, self.c, self.target);
        let equation = self.text(fmt);

        if a == 0.0 {
            return EquationSolution::unsolved(equation, EquationOutcome::NoSolution, "No solution (a = 0)");
        }
        if base_problem(b).is_some() {
            return EquationSolution::unsolved(equation, EquationOutcome::NoSolution, "No solution (invalid base)");
        }

        let x = b.powf((target - c) / a);
        match numeric::finite(x).filter(|x| *x > 0.0) {
            Some(x) => EquationSolution::solved(equation, x),
            None => EquationSolution::unsolved(equation, EquationOutcome::NoRealSolution, "No real solution"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt() -> NumberFormat {
        NumberFormat::default()
    }

    fn solve_exp(a: f64, b: f64, c: f64, target: f64) -> EquationSolution {
        ExponentialEquation::new(a, b, c, target).solve(fmt())
    }

    fn solve_log(a: f64, b: f64, c: f64, target: f64) -> EquationSolution {
        LogarithmicEquation::new(a, b, c, target).solve(fmt())
    }

    #[test]
    fn test_power_of_two() {
        let sol = solve_exp(1.0, 2.0, 0.0, 8.0);
        assert_eq!(sol.outcome, EquationOutcome::Solved);
        assert_eq!(sol.solutions.len(), 1);
        assert!((sol.solutions[0] - 3.0).abs() < 1e-9);
        assert_eq!(sol.equation, "2^x = 8");
        assert_eq!(sol.message, None);
        assert_eq!(sol.describe(fmt()), "x = 3.0000");
    }

    #[test]
    fn test_scaled_and_shifted() {
        // 2·3^x + 1 = 19  →  3^x = 9
        let sol = solve_exp(2.0, 3.0, 1.0, 19.0);
        assert_eq!(sol.equation, "2·3^x + 1 = 19");
        assert!((sol.solutions[0] - 2.0).abs() < 1e-9);

        // 0.5^x = 0.25
        let sol = solve_exp(1.0, 0.5, 0.0, 0.25);
        assert!((sol.solutions[0] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_exponential_no_solution_cases() {
        let sol = solve_exp(0.0, 2.0, 0.0, 8.0);
        assert_eq!(sol.outcome, EquationOutcome::NoSolution);
        assert_eq!(sol.message.as_deref(), Some("No solution (a = 0)"));
        assert!(sol.solutions.is_empty());

        for b in [0.0, -2.0] {
            let sol = solve_exp(1.0, b, 0.0, 8.0);
            assert_eq!(sol.outcome, EquationOutcome::NoSolution);
            assert_eq!(sol.message.as_deref(), Some("No solution (invalid base)"));
        }
    }

    #[test]
    fn test_exponential_right_side_not_positive() {
        for (a, c, target) in [(1.0, 0.0, -8.0), (1.0, 5.0, 5.0), (-1.0, 0.0, 3.0)] {
            let sol = solve_exp(a, 2.0, c, target);
            assert_eq!(sol.outcome, EquationOutcome::NoRealSolution);
            assert_eq!(sol.message.as_deref(), Some("No real solution (right side ≤ 0)"));
        }
    }

    #[test]
    fn test_exponential_base_one() {
        let sol = solve_exp(2.0, 1.0, 3.0, 5.0);
        assert_eq!(sol.outcome, EquationOutcome::AllReals);
        assert!(sol.solutions.is_empty());

        let sol = solve_exp(2.0, 1.0, 3.0, 6.0);
        assert_eq!(sol.outcome, EquationOutcome::NoSolution);
    }

    #[test]
    fn test_exponential_overflow() {
        let sol = solve_exp(1e-300, 1.0 + 1e-15, 0.0, 1e300);
        assert_eq!(sol.outcome, EquationOutcome::NoRealSolution);
        assert_eq!(sol.message.as_deref(), Some("No real solution"));
    }

    #[test]
    fn test_logarithm() {
        // 2·log_10(x) + 1 = 5  →  x = 100
        let sol = solve_log(2.0, 10.0, 1.0, 5.0);
        assert_eq!(sol.outcome, EquationOutcome::Solved);
        assert!((sol.solutions[0] - 100.0).abs() < 1e-9);
        assert_eq!(sol.equation, "2·log_10(x) + 1 = 5");

        let sol = solve_log(1.0, 2.0, 0.0, -1.0);
        assert!((sol.solutions[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_logarithm_no_solution_cases() {
        assert_eq!(solve_log(0.0, 2.0, 0.0, 1.0).message.as_deref(), Some("No solution (a = 0)"));
        for b in [1.0, 0.0, -3.0] {
            let sol = solve_log(1.0, b, 0.0, 1.0);
            assert_eq!(sol.outcome, EquationOutcome::NoSolution);
            assert_eq!(sol.message.as_deref(), Some("No solution (invalid base)"));
        }
    }

    #[test]
    fn test_logarithm_out_of_domain() {
        // 2^-5000 underflows to 0, which is not in the domain
        let sol = solve_log(1.0, 2.0, 0.0, -5000.0);
        assert_eq!(sol.outcome, EquationOutcome::NoRealSolution);
        // 2^5000 overflows
        let sol = solve_log(1.0, 2.0, 0.0, 5000.0);
        assert_eq!(sol.outcome, EquationOutcome::NoRealSolution);
    }

    #[test]
    fn test_serialized_outcome() {
        let json = serde_json::to_value(solve_exp(0.0, 2.0, 0.0, 1.0)).unwrap();
        assert_eq!(json["outcome"], "no_solution");
        let json = serde_json::to_value(solve_exp(1.0, 2.0, 0.0, 8.0)).unwrap();
        assert_eq!(json["outcome"], "solved");
        assert!(json.get("message").is_none());
    }
}
