// examples/train_mlp.rs
//!
//! Trains the 3-4-4-1 perceptron on four hand-written samples and prints its
//! predictions. Run with `RUST_LOG=info` to see the loss of every step.

use microtensor_core::{
    error::MicroTensorError,
    nn::{Activation, Layer, Linear, LossKind, NeuralContext, Sequential},
    Tensor, TrainConfig, Trainer,
};

fn main() -> Result<(), MicroTensorError> {
    env_logger::init();

    let mut context = NeuralContext::new(0);
    let model = Sequential::new()
        .with(Linear::new(&mut context, 3, 4, true, Activation::Tanh))
        .with(Linear::new(&mut context, 4, 4, true, Activation::Tanh))
        .with(Linear::new(&mut context, 4, 1, true, Activation::None));

    let xs = vec![
        Tensor::new(vec![2.0, 3.0, -1.0]),
        Tensor::new(vec![3.0, -1.0, 0.5]),
        Tensor::new(vec![0.5, 1.0, 1.0]),
        Tensor::new(vec![1.0, 1.0, -1.0]),
    ];
    let ys = vec![
        Tensor::scalar(1.0),
        Tensor::scalar(1.0),
        Tensor::scalar(-1.0),
        Tensor::scalar(1.0),
    ];

    let config = TrainConfig::default()
        .with_learning_rate(0.05)
        .with_steps(1000)
        .with_batch_size(4)
        .with_log_every(100);
    let history = Trainer::new(config).fit(&model, &xs, &ys, LossKind::MeanSquaredError)?;
    if let (Some(first), Some(last)) = (history.first(), history.last()) {
        println!("Loss: {:.6} -> {:.6}", first, last);
    }

    for (x, y) in xs.iter().zip(&ys) {
        let prediction = model.forward(x)?;
        println!("{} -> {:.4} (target {})", x.value(), prediction.item()?, y.item()?);
    }
    Ok(())
}
