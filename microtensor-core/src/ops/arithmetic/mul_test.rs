use super::*;
use crate::autograd::grad_check::check_grad;
use crate::error::MicroTensorError;
use crate::tensor::Tensor;
use approx::assert_relative_eq;

#[test]
fn test_mul_tensors_ok() -> Result<(), MicroTensorError> {
    let a = Tensor::new(vec![1.0, 2.0, 3.0]);
    let b = Tensor::new(vec![4.0, 5.0, 6.0]);
    assert_eq!(mul_op(&a, &b)?.values(), vec![4.0, 10.0, 18.0]);
    assert_eq!(mul_op(&a, -1.0)?.values(), vec![-1.0, -2.0, -3.0]);
    Ok(())
}

#[test]
fn test_mul_backward() -> Result<(), MicroTensorError> {
    let a = Tensor::new(vec![1.0, 2.0, 3.0]);
    let b = Tensor::new(vec![4.0, 5.0, 6.0]);
    let loss = mul_op(&a, &b)?.sum()?;
    loss.backward()?;

    assert_eq!(a.grads(), vec![4.0, 5.0, 6.0]);
    assert_eq!(b.grads(), vec![1.0, 2.0, 3.0]);
    Ok(())
}

#[test]
fn test_mul_square_via_shared_operand() -> Result<(), MicroTensorError> {
    let x = Tensor::new(vec![3.0, -2.0]);
    let loss = mul_op(&x, &x)?.sum()?;
    loss.backward()?;
    assert_eq!(x.grads(), vec![6.0, -4.0]);
    Ok(())
}

#[test]
fn test_mul_broadcast_scalar_node() -> Result<(), MicroTensorError> {
    let w = Tensor::scalar(2.0);
    let x = Tensor::new(vec![1.0, 2.0, 3.0]);
    let loss = mul_op(&x, &w)?.sum()?;
    loss.backward()?;

    assert_relative_eq!(w.grads()[0], 6.0);
    assert_eq!(x.grads(), vec![2.0, 2.0, 2.0]);
    Ok(())
}

#[test]
fn test_mul_grad_check() {
    let a = Tensor::new(vec![0.3, -1.2, 2.5, 0.7]);
    let b = Tensor::new(vec![1.1, 0.4, -0.9, 2.0]);
    let inputs = [a.clone(), b.clone()];
    let result = check_grad(|| mul_op(&a, &b)?.sum(), &inputs, 1e-6, 1e-5);
    assert!(result.is_ok(), "{:?}", result);
}
