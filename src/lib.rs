pub mod error;
pub mod activation;
pub mod data;
pub mod neuron;
pub mod train;
pub mod eval;

// Convenience re-exports
pub use error::{PerceptronError, Result};
pub use activation::activation::ActivationFunction;
pub use data::sample::TrainingSample;
pub use neuron::config::PerceptronConfig;
pub use neuron::experiment::Experiment;
pub use neuron::perceptron::Perceptron;
pub use train::{train_loop, EarlyStop, EpochStats, TrainConfig, TrainReport, UpdateRule};
pub use eval::{evaluate, Evaluation, Prediction};
