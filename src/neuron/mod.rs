pub mod config;
pub mod experiment;
pub mod perceptron;

pub use config::PerceptronConfig;
pub use experiment::Experiment;
pub use perceptron::Perceptron;
