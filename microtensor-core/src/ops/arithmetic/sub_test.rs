use super::*;
use crate::error::MicroTensorError;
use crate::tensor::Tensor;

#[test]
fn test_sub_tensors_ok() -> Result<(), MicroTensorError> {
    let a = Tensor::new(vec![5.0, 7.0]);
    let b = Tensor::new(vec![1.0, 10.0]);
    assert_eq!(sub_op(&a, &b)?.values(), vec![4.0, -3.0]);
    assert_eq!(sub_op(&a, 1.0)?.values(), vec![4.0, 6.0]);
    Ok(())
}

#[test]
fn test_sub_backward() -> Result<(), MicroTensorError> {
    let a = Tensor::new(vec![5.0, 7.0]);
    let b = Tensor::new(vec![1.0, 10.0]);
    sub_op(&a, &b)?.sum()?.backward()?;

    assert_eq!(a.grads(), vec![1.0, 1.0]);
    assert_eq!(b.grads(), vec![-1.0, -1.0]);
    Ok(())
}

#[test]
fn test_sub_scalar_node_from_vector() -> Result<(), MicroTensorError> {
    let a = Tensor::new(vec![5.0, 7.0, 9.0]);
    let s = Tensor::scalar(2.0);
    let result = sub_op(&a, &s)?;
    assert_eq!(result.values(), vec![3.0, 5.0, 7.0]);

    result.sum()?.backward()?;
    assert_eq!(s.grads(), vec![-3.0]);
    Ok(())
}
