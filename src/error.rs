use thiserror::Error;

/// Errors surfaced by construction, prediction, training and config loading.
///
/// Dimension problems are always reported before any weight is touched, so a
/// failed call leaves the perceptron exactly as it was.
#[derive(Debug, Error)]
pub enum PerceptronError {
    /// A perceptron needs at least one input.
    #[error("input size must be at least 1")]
    InvalidDimension,

    #[error("learning rate must be finite and non-negative, got {0}")]
    InvalidLearningRate(f64),

    /// Feature scale factor must be finite and positive.
    #[error("scale must be finite and positive, got {0}")]
    InvalidScale(f64),

    #[error("weight decay must be in [0, 1), got {0}")]
    InvalidWeightDecay(f64),

    /// Feature vector passed to `predict` does not match the weight count.
    #[error("dimension mismatch: expected {expected} features, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A training or evaluation sample does not match the weight count.
    #[error("sample {index}: expected {expected} features, got {found}")]
    SampleDimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;
