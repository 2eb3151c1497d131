use crate::tensor::Tensor;

/// Asserts that two slices have the same length and agree element by
/// element within `tolerance`.
///
/// Panics with the first differing index otherwise.
pub fn check_values_near(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Data length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// [`check_values_near`] on the value of `actual`.
pub fn check_tensor_near(actual: &Tensor, expected: &[f64], tolerance: f64) {
    check_values_near(&actual.values(), expected, tolerance);
}

/// [`check_values_near`] on the gradient of `actual`.
pub fn check_grad_near(actual: &Tensor, expected: &[f64], tolerance: f64) {
    check_values_near(&actual.grads(), expected, tolerance);
}
