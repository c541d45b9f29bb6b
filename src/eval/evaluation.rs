use serde::{Serialize, Deserialize};

use crate::data::sample::TrainingSample;
use crate::error::{PerceptronError, Result};
use crate::neuron::perceptron::Perceptron;

/// A single prediction compared against its expected label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Raw activation output.
    pub output: f64,
    /// `output >= threshold`.
    pub class: bool,
    pub target: f64,
    pub correct: bool,
}

/// Results of running a trained perceptron over a labeled set without
/// touching its weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub total: usize,
    pub correct: usize,
    /// `correct / total`, `0.0` for an empty set.
    pub accuracy: f64,
    /// Sum of `|target - output|`.
    pub total_error: f64,
    pub predictions: Vec<Prediction>,
}

/// Predicts every sample and scores it against its target.  A prediction is
/// correct when output and target fall on the same side of `threshold`.
pub fn evaluate(
    perceptron: &Perceptron,
    samples: &[TrainingSample],
    threshold: f64,
) -> Result<Evaluation> {
    let mut eval = Evaluation {
        total: samples.len(),
        ..Evaluation::default()
    };

    for (index, sample) in samples.iter().enumerate() {
        let output = perceptron.predict(&sample.features).map_err(|e| match e {
            PerceptronError::DimensionMismatch { expected, found } => {
                PerceptronError::SampleDimensionMismatch { index, expected, found }
            }
            other => other,
        })?;
        let class = output >= threshold;
        let correct = class == (sample.target >= threshold);
        if correct {
            eval.correct += 1;
        }
        eval.total_error += (sample.target - output).abs();
        eval.predictions.push(Prediction { output, class, target: sample.target, correct });
    }

    if eval.total > 0 {
        eval.accuracy = eval.correct as f64 / eval.total as f64;
    }
    Ok(eval)
}
