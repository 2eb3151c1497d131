//! The training loop and its hyperparameters.

use crate::error::MicroTensorError;
use crate::nn::{batch_loss, Layer, LossKind};
use crate::optim::{Optimizer, Sgd};
use crate::tensor::Tensor;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Hyperparameters of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub momentum: f64,
    pub steps: usize,
    /// Samples drawn per step; the whole dataset when it has fewer.
    pub batch_size: usize,
    /// Seeds batch sampling. Weight initialization is seeded separately by
    /// the [`NeuralContext`](crate::nn::NeuralContext).
    pub seed: u64,
    /// Report the loss every `log_every` steps; 0 disables progress logs.
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: 0.05,
            momentum: 0.0,
            steps: 1000,
            batch_size: 10,
            seed: 0,
            log_every: 1,
        }
    }
}

impl TrainConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }
}

/// Runs gradient descent on a model.
pub struct Trainer {
    config: TrainConfig,
    optimizer: Box<dyn Optimizer>,
    rng: StdRng,
}

impl Trainer {
    /// A trainer using [`Sgd`] configured from `config`.
    pub fn new(config: TrainConfig) -> Self {
        let optimizer = Sgd::with_momentum(config.learning_rate, config.momentum);
        Self::with_optimizer(config, Box::new(optimizer))
    }

    pub fn with_optimizer(config: TrainConfig, optimizer: Box<dyn Optimizer>) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Trainer {
            config,
            optimizer,
            rng,
        }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// One step: reset gradients, build the batch loss, sweep backward and
    /// update the parameters. Returns the loss before the update.
    pub fn step(
        &mut self,
        model: &dyn Layer,
        xs: &[Tensor],
        ys: &[Tensor],
        kind: LossKind,
    ) -> Result<f64, MicroTensorError> {
        self.optimizer.zero_grad(model);
        let loss = batch_loss(model, xs, ys, self.config.batch_size, &mut self.rng, kind)?;
        loss.backward()?;
        self.optimizer.step(model);
        loss.item()
    }

    /// Runs `config.steps` steps and returns the loss of each.
    ///
    /// # Errors
    /// Stops at the first failing step and returns its error.
    pub fn fit(
        &mut self,
        model: &dyn Layer,
        xs: &[Tensor],
        ys: &[Tensor],
        kind: LossKind,
    ) -> Result<Vec<f64>, MicroTensorError> {
        let steps = self.config.steps;
        debug!(
            "Trainer: {} steps over {} samples, {} parameters",
            steps,
            xs.len(),
            model.num_parameters()
        );
        let mut history = Vec::with_capacity(steps);
        for i in 0..steps {
            let loss = self.step(model, xs, ys, kind)?;
            if self.config.log_every > 0 && i % self.config.log_every == 0 {
                info!("[Step {}/{}] Loss: {:.6}", i, steps, loss);
            }
            history.push(loss);
        }
        Ok(history)
    }
}

#[cfg(test)]
#[path = "train_test.rs"]
mod tests;
