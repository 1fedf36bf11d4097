//! Evenly spaced sampling for plotting

use crate::catalog::StandardFunction;
use crate::family::{FunctionParams, Point};
use mathcard_core::{EngineError, NumberFormat, Severity};
use serde::Serialize;

pub const DEFAULT_X_MIN: f64 = -10.0;
pub const DEFAULT_X_MAX: f64 = 10.0;
pub const MAX_SAMPLES: usize = 10_000;

/// Anything that can be evaluated pointwise and named in a plot
pub trait Evaluate {
    /// `f(x)`, or `None` when undefined or not finite
    fn evaluate(&self, x: f64) -> Option<f64>;

    fn label(&self, fmt: NumberFormat) -> String;
}

impl Evaluate for FunctionParams {
    fn evaluate(&self, x: f64) -> Option<f64> {
        FunctionParams::evaluate(self, x)
    }

    fn label(&self, fmt: NumberFormat) -> String {
        self.standard_form(fmt)
    }
}

impl Evaluate for StandardFunction {
    fn evaluate(&self, x: f64) -> Option<f64> {
        StandardFunction::evaluate(self, x)
    }

    fn label(&self, _fmt: NumberFormat) -> String {
        format!("f(x) = {}", self.expression())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSeries {
    pub function: String,
    pub x_min: f64,
    pub x_max: f64,
    /// Grid size before undefined points were dropped
    pub requested: usize,
    pub points: Vec<Point>,
}

/// Evaluate `f` on `count` evenly spaced points of `[x_min, x_max]`.
///
/// Points where `f` is undefined are dropped, so `points` may be shorter
/// than `requested`. A range where `f` is undefined everywhere is a
/// `DOMAIN_ERROR` with warning severity.
pub fn sample<F: Evaluate + ?Sized>(
    f: &F,
    x_min: f64,
    x_max: f64,
    count: usize,
    fmt: NumberFormat,
) -> Result<PlotSeries, EngineError> {
    if !x_min.is_finite() || !x_max.is_finite() {
        return Err(EngineError::invalid_param("x_min and x_max must be finite"));
    }
    if x_min >= x_max {
        return Err(EngineError::invalid_param(format!(
            "x_min ({}) must be less than x_max ({})",
            x_min, x_max
        ))
        .with_suggestion("Swap the bounds or widen the range"));
    }
    if !(2..=MAX_SAMPLES).contains(&count) {
        return Err(EngineError::invalid_param(format!(
            "count must be between 2 and {}, got {}",
            MAX_SAMPLES, count
        )));
    }

    let step = (x_max - x_min) / (count - 1) as f64;
    let points = (0..count)
        .map(|i| if i == count - 1 { x_max } else { x_min + step * i as f64 })
        .filter_map(|x| f.evaluate(x).map(|y| Point { x, y }))
        .collect::<Vec<_>>();
    if points.is_empty() {
        return Err(EngineError::domain_error(format!(
            "{} is undefined at every sample point in [{}, {}]",
            f.label(fmt),
            fmt.compact(x_min),
            fmt.compact(x_max)
        ))
        .with_suggestion("Move the range into the function's domain")
        .with_severity(Severity::Warning));
    }

    Ok(PlotSeries {
        function: f.label(fmt),
        x_min,
        x_max,
        requested: count,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::LinearParams;
    use crate::logarithmic::LogarithmicParams;
    use mathcard_core::codes;

    fn fmt() -> NumberFormat {
        NumberFormat::default()
    }

    #[test]
    fn test_grid_includes_endpoints() {
        let line = FunctionParams::from(LinearParams::new(2.0, 1.0));
        let series = sample(&line, -1.0, 1.0, 5, fmt()).unwrap();
        let xs: Vec<f64> = series.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(series.points[0].y, -1.0);
        assert_eq!(series.points[4].y, 3.0);
        assert_eq!(series.function, "f(x) = 2x + 1");
        assert_eq!(series.requested, 5);
    }

    #[test]
    fn test_out_of_domain_points_dropped() {
        let series = sample(&StandardFunction::Sqrt, -2.0, 2.0, 5, fmt()).unwrap();
        assert_eq!(series.points.len(), 3);
        assert!(series.points.iter().all(|p| p.x >= 0.0));
        assert_eq!(series.function, "f(x) = sqrt(x)");

        let series = sample(&StandardFunction::Reciprocal, -1.0, 1.0, 3, fmt()).unwrap();
        assert_eq!(series.points.len(), 2);

        let log = FunctionParams::from(LogarithmicParams::new(10.0, 1.0, 0.0, 0.0));
        let series = sample(&log, -10.0, 10.0, 200, fmt()).unwrap();
        assert!(series.points.iter().all(|p| p.x > 0.0 && p.y.is_finite()));
        assert!(series.points.len() < 200);
    }

    #[test]
    fn test_range_outside_domain() {
        let err = sample(&StandardFunction::Sqrt, -5.0, -1.0, 10, fmt()).unwrap_err();
        assert_eq!(err.code, codes::DOMAIN_ERROR);
        assert_eq!(err.severity, Severity::Warning);
        assert_eq!(err.message, "f(x) = sqrt(x) is undefined at every sample point in [-5, -1]");

        let log = FunctionParams::from(LogarithmicParams::new(2.0, 1.0, 0.0, 0.0));
        let err = sample(&log, -3.0, 0.0, 4, fmt()).unwrap_err();
        assert_eq!(err.code, codes::DOMAIN_ERROR);
    }

    #[test]
    fn test_invalid_ranges() {
        let f = StandardFunction::Sin;
        for (x_min, x_max, count) in [
            (1.0, 1.0, 10),
            (2.0, -2.0, 10),
            (f64::NEG_INFINITY, 0.0, 10),
            (0.0, f64::NAN, 10),
            (0.0, 1.0, 1),
            (0.0, 1.0, MAX_SAMPLES + 1),
        ] {
            let err = sample(&f, x_min, x_max, count, fmt()).unwrap_err();
            assert_eq!(err.code, codes::INVALID_PARAM, "{} {} {}", x_min, x_max, count);
        }
    }

    #[test]
    fn test_dyn_evaluate() {
        let boxed: Box<dyn Evaluate> = Box::new(StandardFunction::Abs);
        let series = sample(boxed.as_ref(), -1.0, 1.0, 3, fmt()).unwrap();
        let ys: Vec<f64> = series.points.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![1.0, 0.0, 1.0]);
    }
}
