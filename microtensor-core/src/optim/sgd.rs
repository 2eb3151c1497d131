use crate::nn::{Layer, Parameter};
use crate::optim::optimizer_trait::Optimizer;
use crate::tensor::NodeId;
use crate::tensor_data::TensorData;
use log::{debug, trace};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Weak;

/// Velocity of one parameter, tied to the node it was built for.
#[derive(Debug)]
struct MomentumBuffer {
    owner: Weak<RefCell<TensorData>>,
    velocity: Vec<f64>,
}

/// Implements Stochastic Gradient Descent with optional momentum.
///
/// Without momentum every parameter moves by `-lr * grad`. With momentum a
/// velocity `v = momentum * v + grad` is kept per parameter node and the
/// parameter moves by `-lr * v`. Velocities of parameters that have been
/// dropped are discarded at the next step.
#[derive(Debug)]
pub struct Sgd {
    lr: f64,
    momentum: f64,
    momentum_buffers: HashMap<NodeId, MomentumBuffer>,
}

impl Sgd {
    pub fn new(lr: f64) -> Self {
        Self::with_momentum(lr, 0.0)
    }

    pub fn with_momentum(lr: f64, momentum: f64) -> Self {
        Sgd {
            lr,
            momentum,
            momentum_buffers: HashMap::new(),
        }
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    fn update_parameter(&mut self, param: &Parameter) {
        let lr = self.lr;
        if self.momentum == 0.0 {
            param.update(|values, grads| {
                for (v, &g) in values.iter_mut().zip(grads) {
                    *v -= lr * g;
                }
            });
            return;
        }

        let momentum = self.momentum;
        let len = param.len();
        let buffer = self
            .momentum_buffers
            .entry(param.node_id())
            .or_insert_with(|| MomentumBuffer {
                owner: param.downgrade(),
                velocity: vec![0.0; len],
            });
        if buffer.velocity.len() != len {
            buffer.velocity = vec![0.0; len];
        }
        let velocity = &mut buffer.velocity;
        param.update(|values, grads| {
            for ((v, &g), velocity) in values.iter_mut().zip(grads).zip(velocity.iter_mut()) {
                *velocity = momentum * *velocity + g;
                *v -= lr * *velocity;
            }
        });
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, model: &dyn Layer) {
        let before = self.momentum_buffers.len();
        self.momentum_buffers
            .retain(|_, buffer| buffer.owner.strong_count() > 0);
        if self.momentum_buffers.len() < before {
            trace!(
                "Sgd: dropped {} stale momentum buffers",
                before - self.momentum_buffers.len()
            );
        }

        let mut updated = 0;
        model.update_parameters(&mut |param| {
            self.update_parameter(param);
            updated += 1;
        });
        debug!(
            "Sgd: updated {} parameters (lr {}, momentum {})",
            updated, self.lr, self.momentum
        );
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.lr = lr;
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
