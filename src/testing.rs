//! Testing helpers.

use assert_float_eq::*;

use crate::probs::SliceExt;

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

pub fn assert_sums_to_one(probs: &[f64], tolerance: f64) {
    let sum = probs.sum();
    assert!(
        (sum - 1.0).abs() <= tolerance,
        "probabilities sum to {sum}, expected 1 ± {tolerance}"
    );
}
