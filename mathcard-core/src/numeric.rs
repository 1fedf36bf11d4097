//! Floating-point guards
//!
//! Every value that ends up in a display field passes through [`finite`]
//! first, so NaN and infinities never leak out of a computation.

/// Relative tolerance used when a computed quantity is compared against zero.
pub const EPSILON: f64 = 1e-9;

/// Returns the value if it is finite, with negative zero normalized to zero.
pub fn finite(x: f64) -> Option<f64> {
    if x.is_finite() {
        Some(if x == 0.0 { 0.0 } else { x })
    } else {
        None
    }
}

/// True when every value is finite
pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Approximate equality with a tolerance relative to the operands' magnitude
pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = 1.0_f64.max(a.abs()).max(b.abs());
    (a - b).abs() <= EPSILON * scale
}

/// True when `value` is zero up to rounding noise at the magnitude `scale`.
///
/// Used for computed quantities such as the discriminant, where
/// `b² − 4ac` of two nearly equal terms rarely lands exactly on zero.
/// Purely relative: a zero scale only accepts an exact zero.
pub fn is_negligible(value: f64, scale: f64) -> bool {
    let scale = scale.abs();
    if scale == 0.0 {
        return value == 0.0;
    }
    value.abs() <= EPSILON * scale
}
