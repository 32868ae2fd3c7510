//! Classroom score aggregation.

/// Arithmetic mean of a set of scores, rounded to two decimal places.
///
/// Rounding is half-away-from-zero (`f64::round` scaled by 100), which for
/// the 0-100 score domain behaves like ordinary half-up rounding.
///
/// The slice must be non-empty; callers short-circuit the empty case before
/// aggregating.
pub fn class_average(scores: &[f64]) -> f64 {
    debug_assert!(!scores.is_empty());
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    (mean * 100.0).round() / 100.0
}
