//! Finite-difference verification of the gradient rules.

use crate::error::MicroTensorError;
use crate::tensor::Tensor;
use log::trace;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical {analytical_grad} != numerical {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Gradient check input {input_index} must be a leaf node")]
    InputNotLeaf { input_index: usize },

    #[error("Numerical gradient is not finite for input {input_index}, element {element_index}: loss+ {loss_plus}, loss- {loss_minus}")]
    NumericalGradNotFinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is not finite for input {input_index}, element {element_index}: {value}")]
    AnalyticalGradNotFinite {
        input_index: usize,
        element_index: usize,
        value: f64,
    },

    #[error("Forward function failed during gradient check: {0}")]
    ForwardPassError(MicroTensorError),

    #[error("Backward pass failed during gradient check: {0}")]
    BackwardPassError(MicroTensorError),
}

/// Compares the gradients produced by a backward sweep with central finite
/// differences.
///
/// `func` rebuilds the graph from the current values of `inputs` on every
/// call. A non-scalar output is summed before differentiation. Inputs are
/// perturbed in place and restored afterwards; their gradients are
/// overwritten by the check.
///
/// An element passes when `|analytical - numerical| <= tolerance * max(1, |analytical|, |numerical|)`.
pub fn check_grad<F>(
    func: F,
    inputs: &[Tensor],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn() -> Result<Tensor, MicroTensorError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    let output = scalar_output(&func)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<Vec<f64>> = inputs.iter().map(Tensor::grads).collect();

    for (i, input) in inputs.iter().enumerate() {
        let original = input.values();
        for (elem_idx, &value) in original.iter().enumerate() {
            let loss_plus = perturbed_loss(&func, input, elem_idx, value + epsilon)?;
            let loss_minus = perturbed_loss(&func, input, elem_idx, value - epsilon)?;
            input
                .set_value_at(elem_idx, value)
                .map_err(GradCheckError::ForwardPassError)?;

            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
            let analytical_grad = analytical[i][elem_idx];
            trace!(
                "grad_check: input {} element {}: analytical {} numerical {}",
                i,
                elem_idx,
                analytical_grad,
                numerical_grad
            );

            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNotFinite {
                    input_index: i,
                    element_index: elem_idx,
                    loss_plus,
                    loss_minus,
                });
            }
            if !analytical_grad.is_finite() {
                return Err(GradCheckError::AnalyticalGradNotFinite {
                    input_index: i,
                    element_index: elem_idx,
                    value: analytical_grad,
                });
            }

            let difference = (analytical_grad - numerical_grad).abs();
            let scale = 1.0f64.max(analytical_grad.abs()).max(numerical_grad.abs());
            if difference > tolerance * scale {
                return Err(GradCheckError::GradientMismatch {
                    input_index: i,
                    element_index: elem_idx,
                    analytical_grad,
                    numerical_grad,
                    difference,
                });
            }
        }
    }

    Ok(())
}

fn scalar_output<F>(func: &F) -> Result<Tensor, GradCheckError>
where
    F: Fn() -> Result<Tensor, MicroTensorError>,
{
    let output = func().map_err(GradCheckError::ForwardPassError)?;
    if output.is_scalar() {
        Ok(output)
    } else {
        output.sum().map_err(GradCheckError::ForwardPassError)
    }
}

fn perturbed_loss<F>(func: &F, input: &Tensor, index: usize, value: f64) -> Result<f64, GradCheckError>
where
    F: Fn() -> Result<Tensor, MicroTensorError>,
{
    input
        .set_value_at(index, value)
        .map_err(GradCheckError::ForwardPassError)?;
    scalar_output(func)?
        .item()
        .map_err(GradCheckError::ForwardPassError)
}
