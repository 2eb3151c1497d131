use super::*;
use crate::error::MicroTensorError;

#[test]
fn test_parameter_deref() {
    let param = Parameter::new(Tensor::new(vec![1.0, 2.0, 3.0]));
    assert_eq!(param.len(), 3);
    assert!(param.is_leaf());
    assert_eq!(param.values(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_parameter_clone_shares_node() -> Result<(), MicroTensorError> {
    let param = Parameter::new(Tensor::new(vec![1.0]));
    let other = param.clone();
    other.set_value_at(0, 4.0)?;
    assert_eq!(param.values(), vec![4.0]);
    assert!(param.tensor().ptr_eq(other.tensor()));
    Ok(())
}

#[test]
fn test_parameter_receives_gradients() -> Result<(), MicroTensorError> {
    let param = Parameter::new(Tensor::new(vec![2.0, 3.0]));
    let x = Tensor::new(vec![5.0, 7.0]);
    param.mul(&x)?.sum()?.backward()?;
    assert_eq!(param.grads(), vec![5.0, 7.0]);
    assert_eq!(param.clone().into_inner().grads(), vec![5.0, 7.0]);
    Ok(())
}
