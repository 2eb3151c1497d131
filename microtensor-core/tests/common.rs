use microtensor_core::nn::{Activation, Linear, NeuralContext, Sequential, WeightInit};
use microtensor_core::Tensor;

/// Installs `env_logger` once per test binary; later calls are no-ops.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A stack of [`Linear`] layers, `sizes[i] -> sizes[i + 1]`, each with bias.
#[allow(dead_code)]
pub fn build_mlp(
    context: &mut NeuralContext,
    sizes: &[usize],
    activations: &[Activation],
) -> Sequential {
    sizes
        .windows(2)
        .zip(activations)
        .fold(Sequential::new(), |model, (pair, &activation)| {
            model.with(Linear::new(context, pair[0], pair[1], true, activation))
        })
}

/// The 3-4-4-1 perceptron used by the training tests.
#[allow(dead_code)]
pub fn reference_mlp(seed: u64) -> Sequential {
    let mut context = NeuralContext::new(seed).with_init(WeightInit::Uniform);
    build_mlp(
        &mut context,
        &[3, 4, 4, 1],
        &[Activation::Tanh, Activation::Tanh, Activation::None],
    )
}

#[allow(dead_code)]
pub fn tensors(rows: &[&[f64]]) -> Vec<Tensor> {
    rows.iter().map(|row| Tensor::new(row.to_vec())).collect()
}
