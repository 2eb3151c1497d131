use crate::nn::init::WeightInit;
use crate::tensor::Tensor;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Shared state used while constructing layers.
///
/// Owns the seeded random source that every layer draws its initial weights
/// from, so building the same architecture from the same seed yields the same
/// network.
#[derive(Debug, Clone)]
pub struct NeuralContext {
    rng: StdRng,
    init: WeightInit,
}

impl NeuralContext {
    pub fn new(seed: u64) -> Self {
        NeuralContext {
            rng: StdRng::seed_from_u64(seed),
            init: WeightInit::default(),
        }
    }

    /// Sets the initialization used by layers created afterwards.
    pub fn with_init(mut self, init: WeightInit) -> Self {
        self.init = init;
        self
    }

    pub fn init(&self) -> WeightInit {
        self.init
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// A new leaf of length `len` filled according to the current initialization.
    pub fn parameter_tensor(&mut self, len: usize) -> Tensor {
        self.init.tensor(len, &mut self.rng)
    }
}

impl Default for NeuralContext {
    fn default() -> Self {
        Self::new(0)
    }
}
