use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::activation::ActivationFunction;
use crate::data::sample::TrainingSample;
use crate::error::{PerceptronError, Result};
use crate::neuron::config::PerceptronConfig;
use crate::train::epoch_stats::TrainReport;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// A single neuron: `activation(bias + Σ wᵢ·xᵢ)`.
///
/// Learning rate and activation are fixed at construction; only the weights
/// and bias change, and only through training.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    weights: Vec<f64>,
    bias: f64,
    learning_rate: f64,
    activation: ActivationFunction,
}

impl Perceptron {
    /// Builds a perceptron with `input_size` weights drawn from the thread RNG.
    pub fn new(input_size: usize, config: PerceptronConfig) -> Result<Perceptron> {
        Perceptron::with_rng(input_size, config, &mut rand::thread_rng())
    }

    /// Reproducible construction: the same seed always yields the same
    /// initial weights and bias.
    pub fn with_seed(input_size: usize, config: PerceptronConfig, seed: u64) -> Result<Perceptron> {
        let mut rng = StdRng::seed_from_u64(seed);
        Perceptron::with_rng(input_size, config, &mut rng)
    }

    /// Builds a perceptron drawing every weight, then the bias, uniformly
    /// from `[-1, 1)` using `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        input_size: usize,
        config: PerceptronConfig,
        rng: &mut R,
    ) -> Result<Perceptron> {
        if input_size == 0 {
            return Err(PerceptronError::InvalidDimension);
        }
        config.validate()?;

        let weights: Vec<f64> = (0..input_size)
            .map(|_| rng.gen::<f64>() * 2.0 - 1.0)
            .collect();
        let bias = rng.gen::<f64>() * 2.0 - 1.0;

        tracing::debug!(
            input_size,
            learning_rate = config.learning_rate,
            activation = %config.activation,
            "perceptron initialized"
        );

        Ok(Perceptron {
            weights,
            bias,
            learning_rate: config.learning_rate,
            activation: config.activation,
        })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    pub fn config(&self) -> PerceptronConfig {
        PerceptronConfig::new(self.learning_rate, self.activation)
    }

    /// Pre-activation value `bias + Σ xᵢ·wᵢ`.
    pub fn weighted_sum(&self, features: &[f64]) -> Result<f64> {
        self.check_dimension(features)?;
        Ok(self.sum_unchecked(features))
    }

    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        let sum = self.weighted_sum(features)?;
        Ok(self.activation.function(sum))
    }

    /// `true` when the prediction reaches `threshold`.
    pub fn classify(&self, features: &[f64], threshold: f64) -> Result<bool> {
        Ok(self.predict(features)? >= threshold)
    }

    /// Runs `epochs` passes of the online delta rule over `samples`, in order.
    ///
    /// Every sample is checked before the first update, so a mismatched
    /// sample fails the call with the perceptron untouched.
    pub fn train(&mut self, samples: &[TrainingSample], epochs: usize) -> Result<TrainReport> {
        train_loop(self, samples, &TrainConfig::new(epochs))
    }

    pub(crate) fn check_dimension(&self, features: &[f64]) -> Result<()> {
        if features.len() != self.weights.len() {
            return Err(PerceptronError::DimensionMismatch {
                expected: self.weights.len(),
                found: features.len(),
            });
        }
        Ok(())
    }

    /// Callers must have checked the length already.
    pub(crate) fn sum_unchecked(&self, features: &[f64]) -> f64 {
        let mut sum = self.bias;
        for (x, w) in features.iter().zip(self.weights.iter()) {
            sum += x * w;
        }
        sum
    }

    /// Applies one update: `wᵢ += lr·δ·xᵢ`, `b += lr·δ`.
    pub(crate) fn apply_update(&mut self, features: &[f64], delta: f64) {
        let lr = self.learning_rate;
        for (w, x) in self.weights.iter_mut().zip(features.iter()) {
            *w += lr * delta * x;
        }
        self.bias += lr * delta;
    }

    /// Multiplies every weight, not the bias, by `factor`.
    pub(crate) fn shrink_weights(&mut self, factor: f64) {
        for w in self.weights.iter_mut() {
            *w *= factor;
        }
    }
}
