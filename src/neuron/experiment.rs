use serde::{Serialize, Deserialize};

use crate::data::sample::TrainingSample;
use crate::error::{PerceptronError, Result};
use crate::neuron::config::PerceptronConfig;
use crate::neuron::perceptron::Perceptron;
use crate::train::train_config::{EarlyStop, TrainConfig, DEFAULT_EPOCHS, DEFAULT_THRESHOLD};
use crate::train::update_rule::UpdateRule;

/// A fully serializable description of one training run: the neuron's
/// hyperparameters, how to train it, and the samples to train on.
///
/// Only the setup is stored.  Learned weights are never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    /// Human-readable name, used in log output.
    pub name: String,
    /// Number of features per sample.
    pub input_size: usize,
    #[serde(default)]
    pub perceptron: PerceptronConfig,
    #[serde(default = "default_epochs")]
    pub epochs: usize,
    #[serde(default)]
    pub update_rule: UpdateRule,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub early_stop: Option<EarlyStop>,
    /// Fraction each weight shrinks by after every update; `None` disables it.
    #[serde(default)]
    pub weight_decay: Option<f64>,
    /// Fixed seed for weight initialization; `None` draws from the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Every feature is divided by this before training, if set.
    #[serde(default)]
    pub scale: Option<f64>,
    pub samples: Vec<TrainingSample>,
}

fn default_epochs() -> usize {
    DEFAULT_EPOCHS
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Experiment {
    /// Rejects settings that would turn training into NaN arithmetic: a zero,
    /// negative or non-finite `scale`, and a `weight_decay` outside `[0, 1)`.
    pub fn validate(&self) -> Result<()> {
        if let Some(factor) = self.scale {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(PerceptronError::InvalidScale(factor));
            }
        }
        if let Some(decay) = self.weight_decay {
            if !(0.0..1.0).contains(&decay) {
                return Err(PerceptronError::InvalidWeightDecay(decay));
            }
        }
        self.perceptron.validate()
    }

    /// Builds the perceptron described by this experiment.
    pub fn build(&self) -> Result<Perceptron> {
        self.validate()?;
        match self.seed {
            Some(seed) => Perceptron::with_seed(self.input_size, self.perceptron, seed),
            None => Perceptron::new(self.input_size, self.perceptron),
        }
    }

    pub fn train_config(&self) -> TrainConfig {
        let mut config = TrainConfig::new(self.epochs)
            .with_update_rule(self.update_rule)
            .with_threshold(self.threshold);
        config.early_stop = self.early_stop;
        config.weight_decay = self.weight_decay;
        config
    }

    /// Samples with `scale` applied.  Fails on an invalid experiment.
    pub fn prepared_samples(&self) -> Result<Vec<TrainingSample>> {
        self.validate()?;
        Ok(match self.scale {
            Some(factor) => self.samples.iter().cloned().map(|s| s.scaled(factor)).collect(),
            None => self.samples.clone(),
        })
    }

    /// Serializes the experiment to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes an `Experiment` from a JSON file.
    pub fn load_json(path: &str) -> Result<Experiment> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let experiment: Experiment = serde_json::from_reader(reader)?;
        experiment.validate()?;
        Ok(experiment)
    }
}
