use super::*;
use crate::error::MicroTensorError;
use crate::tensor::Tensor;

#[test]
fn test_stack_concatenates_in_order() -> Result<(), MicroTensorError> {
    let a = Tensor::scalar(1.0);
    let b = Tensor::new(vec![2.0, 3.0]);
    let c = Tensor::scalar(4.0);
    let stacked = stack_op(&[a.clone(), b.clone(), c.clone()])?;

    assert_eq!(stacked.values(), vec![1.0, 2.0, 3.0, 4.0]);
    let children = stacked.children();
    assert_eq!(children.len(), 3);
    assert!(children[0].ptr_eq(&a));
    assert!(children[1].ptr_eq(&b));
    assert!(children[2].ptr_eq(&c));
    Ok(())
}

#[test]
fn test_stack_empty_list() {
    assert_eq!(stack_op(&[]).err(), Some(MicroTensorError::EmptyTensorList));
}

#[test]
fn test_stack_backward_routes_segments() -> Result<(), MicroTensorError> {
    let a = Tensor::scalar(1.0);
    let b = Tensor::new(vec![2.0, 3.0]);
    let stacked = stack_op(&[a.clone(), b.clone()])?;
    let weights = Tensor::new(vec![10.0, 20.0, 30.0]);
    stacked.mul(&weights)?.sum()?.backward()?;

    assert_eq!(a.grads(), vec![10.0]);
    assert_eq!(b.grads(), vec![20.0, 30.0]);
    Ok(())
}

#[test]
fn test_stack_same_node_twice_accumulates() -> Result<(), MicroTensorError> {
    let a = Tensor::scalar(2.0);
    let stacked = stack_op(&[a.clone(), a.clone()])?;
    let weights = Tensor::new(vec![1.5, 2.5]);
    stacked.mul(&weights)?.sum()?.backward()?;

    assert_eq!(a.grads(), vec![4.0]);
    Ok(())
}
