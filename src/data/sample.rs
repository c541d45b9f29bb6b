use serde::{Serialize, Deserialize};

/// One labeled example: a feature vector and its target output.
///
/// Targets are conventionally `0.0` or `1.0`, but nothing enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub features: Vec<f64>,
    pub target: f64,
}

impl TrainingSample {
    pub fn new(features: Vec<f64>, target: f64) -> Self {
        TrainingSample { features, target }
    }

    /// Divides every feature by `factor`.  Used by callers that pre-scale raw
    /// measurements before handing them to the perceptron.
    pub fn scaled(mut self, factor: f64) -> Self {
        for x in &mut self.features {
            *x /= factor;
        }
        self
    }
}

impl<const N: usize> From<([f64; N], f64)> for TrainingSample {
    fn from((features, target): ([f64; N], f64)) -> Self {
        TrainingSample::new(features.to_vec(), target)
    }
}

impl From<(Vec<f64>, f64)> for TrainingSample {
    fn from((features, target): (Vec<f64>, f64)) -> Self {
        TrainingSample::new(features, target)
    }
}
