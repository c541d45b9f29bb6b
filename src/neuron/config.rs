use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;
use crate::error::{PerceptronError, Result};

pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Hyperparameters fixed for the lifetime of a `Perceptron`.
///
/// Both fields default when missing from JSON, so `{}` is a valid config
/// (learning rate `0.1`, sigmoid activation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerceptronConfig {
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default)]
    pub activation: ActivationFunction,
}

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        PerceptronConfig {
            learning_rate: DEFAULT_LEARNING_RATE,
            activation: ActivationFunction::default(),
        }
    }
}

impl PerceptronConfig {
    pub fn new(learning_rate: f64, activation: ActivationFunction) -> Self {
        PerceptronConfig { learning_rate, activation }
    }

    /// Builds a config from a learning rate and a free-form activation selector.
    pub fn with_selector(learning_rate: f64, selector: &str) -> Self {
        PerceptronConfig::new(learning_rate, ActivationFunction::from_selector(selector))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(PerceptronError::InvalidLearningRate(self.learning_rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PerceptronConfig::default();
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.activation, ActivationFunction::Sigmoid);

        let parsed: PerceptronConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn rejects_bad_learning_rates() {
        assert!(PerceptronConfig::new(0.0, ActivationFunction::Step).validate().is_ok());
        for lr in [-0.1, f64::NAN, f64::INFINITY] {
            let err = PerceptronConfig::new(lr, ActivationFunction::Step).validate();
            assert!(matches!(err, Err(PerceptronError::InvalidLearningRate(_))));
        }
    }

    #[test]
    fn selector_constructor_falls_back() {
        let config = PerceptronConfig::with_selector(0.3, "escalon");
        assert_eq!(config.activation, ActivationFunction::Step);
        let config = PerceptronConfig::with_selector(0.3, "???");
        assert_eq!(config.activation, ActivationFunction::Sigmoid);
    }
}
