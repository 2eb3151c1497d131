use super::*;
use crate::nn::{Activation, Flatten, Linear, NeuralContext, Normalize, Softmax};

fn mlp(seed: u64) -> Sequential {
    let mut ctx = NeuralContext::new(seed);
    Sequential::new()
        .with(Linear::new(&mut ctx, 3, 4, true, Activation::Tanh))
        .with(Linear::new(&mut ctx, 4, 4, true, Activation::Tanh))
        .with(Linear::new(&mut ctx, 4, 1, true, Activation::None))
}

#[test]
fn test_forward_threads_layers() -> Result<(), MicroTensorError> {
    let model = mlp(0);
    assert_eq!(model.len(), 3);
    assert_eq!(model.num_parameters(), 16 + 20 + 5);

    let out = model.forward(&Tensor::new(vec![2.0, 3.0, -1.0]))?;
    assert_eq!(out.len(), 1);
    assert!(out.item()?.is_finite());
    Ok(())
}

#[test]
fn test_forward_stops_at_first_error() {
    let model = mlp(0);
    assert!(matches!(
        model.forward(&Tensor::new(vec![1.0, 2.0])),
        Err(MicroTensorError::LengthMismatch { expected: 3, actual: 2, .. })
    ));
}

#[test]
fn test_empty_sequential_is_identity() -> Result<(), MicroTensorError> {
    let model = Sequential::new();
    assert!(model.is_empty());
    let x = Tensor::new(vec![1.0]);
    assert!(model.forward(&x)?.ptr_eq(&x));
    Ok(())
}

#[test]
fn test_zero_grad_and_update_fan_out() -> Result<(), MicroTensorError> {
    let model = mlp(1);
    model.forward(&Tensor::new(vec![0.5, -0.5, 1.0]))?.backward()?;
    assert!(model
        .parameters()
        .iter()
        .any(|p| p.grads().iter().any(|&g| g != 0.0)));

    model.zero_grad();
    for p in model.parameters() {
        assert!(p.grads().iter().all(|&g| g == 0.0));
    }

    let mut count = 0;
    model.update_parameters(&mut |_| count += 1);
    assert_eq!(count, model.parameters().len());
    Ok(())
}

#[test]
fn test_stateless_pipeline() -> Result<(), MicroTensorError> {
    let model = Sequential::from_layers(vec![
        Box::new(Flatten::new()),
        Box::new(Normalize::new()),
        Box::new(Softmax::new()),
    ]);
    let out = model.forward(&Tensor::new(vec![2.0, 6.0, 8.0]))?;
    let total: f64 = out.values().iter().sum();
    assert!((total - 1.0).abs() < 1e-12);
    assert!(model.parameters().is_empty());
    Ok(())
}
