mod common;

use microtensor_core::nn::{Layer, LossKind};
use microtensor_core::{MicroTensorError, Tensor, TrainConfig, Trainer};

/// Loss values below this are treated as converged.
const CONVERGED: f64 = 1e-12;

#[test]
fn test_reference_perceptron_fits_single_sample() -> Result<(), MicroTensorError> {
    common::init_logger();
    let model = common::reference_mlp(0);
    let xs = vec![Tensor::new(vec![2.0, 3.0, -1.0])];
    let ys = vec![Tensor::scalar(1.0)];

    let config = TrainConfig::default()
        .with_learning_rate(0.05)
        .with_steps(40)
        .with_batch_size(1)
        .with_log_every(10);
    let history = Trainer::new(config).fit(&model, &xs, &ys, LossKind::MeanSquaredError)?;

    for (step, pair) in history.windows(2).enumerate().skip(3) {
        if pair[0] < CONVERGED {
            break;
        }
        assert!(
            pair[1] < pair[0],
            "loss rose at step {}: {} -> {}",
            step + 1,
            pair[0],
            pair[1]
        );
    }

    let prediction = model.forward(&xs[0])?.item()?;
    assert!((prediction - 1.0).abs() < 1e-2, "prediction {}", prediction);
    Ok(())
}

#[test]
fn test_reference_perceptron_reduces_batch_loss() -> Result<(), MicroTensorError> {
    let model = common::reference_mlp(0);
    let xs = common::tensors(&[
        &[2.0, 3.0, -1.0],
        &[3.0, -1.0, 0.5],
        &[0.5, 1.0, 1.0],
        &[1.0, 1.0, -1.0],
    ]);
    let ys = common::tensors(&[&[1.0], &[1.0], &[-1.0], &[1.0]]);

    let config = TrainConfig::default().with_steps(200).with_batch_size(4);
    let history = Trainer::new(config).fit(&model, &xs, &ys, LossKind::MeanSquaredError)?;

    let first = history[0];
    let last = history[history.len() - 1];
    assert!(last < 0.5 * first, "loss {} -> {}", first, last);
    Ok(())
}
