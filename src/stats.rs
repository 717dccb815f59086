//! ═══════════════════════════════════════════════════════════════════════════════
//! STATS — Numeric Helpers for Aggregation
//! ═══════════════════════════════════════════════════════════════════════════════
//! Small shared primitives:
//! - mean over a slice (None when empty, never a fake zero)
//! - float-safe comparators for `sort_by`
//! - the two rounding modes the engine uses (one-decimal and whole-percent)
//! ═══════════════════════════════════════════════════════════════════════════════

use std::cmp::Ordering;

/// Arithmetic mean. Returns None for an empty slice so "no data" stays
/// distinguishable from a real zero.
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Total-order comparator for f64 suitable for `sort_by`.
/// NaN compares equal to everything; inputs here are finite by precondition.
pub fn float_cmp(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Descending variant, for rank-by-score sorts
pub fn float_cmp_desc(a: &f64, b: &f64) -> Ordering {
    float_cmp(b, a)
}

/// Round to one decimal place (odds percentages)
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round a [0, 1] ratio to a whole percent (accuracy figures)
pub fn whole_percent(ratio: f64) -> u32 {
    (ratio * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty_is_none() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    }

    #[test]
    fn test_float_cmp_sorts() {
        let mut v = vec![3.0, 1.0, 2.0];
        v.sort_by(float_cmp);
        assert_eq!(v, vec![1.0, 2.0, 3.0]);

        v.sort_by(float_cmp_desc);
        assert_eq!(v, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(61.538461), 61.5);
        assert_eq!(round1(38.461538), 38.5);
        assert_eq!(round1(50.0), 50.0);
    }

    #[test]
    fn test_whole_percent() {
        assert_eq!(whole_percent(0.666), 67);
        assert_eq!(whole_percent(0.0), 0);
        assert_eq!(whole_percent(1.0), 100);
    }
}
