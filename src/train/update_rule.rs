use serde::{Serialize, Deserialize};

/// Selects how the per-sample error is turned into a weight update.
///
/// - `Delta`    — `Δw = lr · error · x` regardless of activation.  Exact for
///   Linear and Step; only an approximation of gradient descent for the
///   others.  This is the default.
/// - `Gradient` — `Δw = lr · error · f'(z) · x`, true gradient descent on
///   squared error for a differentiable activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateRule {
    #[default]
    Delta,
    Gradient,
}
