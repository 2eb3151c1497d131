// examples/train_idx.rs
//!
//! Trains a small classifier on an IDX image/label pair such as MNIST:
//!
//! ```text
//! cargo run --example train_idx -- train-images.idx train-labels.idx
//! ```

use microtensor_core::nn::{Activation, Flatten, Linear, LossKind, NeuralContext, Normalize, Sequential, Softmax};
use microtensor_core::{Tensor, TrainConfig, Trainer};
use microtensor_data::{chunk_inputs, one_hot_encode, read_idx, DataError, KeySet};
use std::env;
use std::process;

fn main() -> Result<(), DataError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: {} <images.idx> <labels.idx>", args[0]);
        process::exit(2);
    }

    let images = read_idx(&args[1])?;
    let labels = read_idx(&args[2])?;
    let label_values = labels.values::<u8>()?;

    let label_set: KeySet<u8> = label_values.iter().copied().collect();
    let keys: Vec<&str> = label_set.keys().collect();
    let encoded = one_hot_encode(&keys);
    let ys: Vec<Tensor> = label_values
        .iter()
        .map(|label| Tensor::new(encoded[&label.to_string()].clone()))
        .collect();

    let item_len = images.item_len();
    let xs = chunk_inputs(&images.to_f64(), item_len);
    println!("{} samples of {} values, {} classes", xs.len(), item_len, label_set.len());

    let mut context = NeuralContext::new(0);
    let model = Sequential::new()
        .with(Flatten::new())
        .with(Normalize::new())
        .with(Linear::new(&mut context, item_len, 32, true, Activation::Relu))
        .with(Linear::new(&mut context, 32, 16, true, Activation::Tanh))
        .with(Linear::new(&mut context, 16, label_set.len(), true, Activation::None))
        .with(Softmax::new());

    let config = TrainConfig::default()
        .with_learning_rate(0.05)
        .with_steps(1000)
        .with_batch_size(10);
    Trainer::new(config).fit(&model, &xs, &ys, LossKind::MeanSquaredError)?;
    Ok(())
}
