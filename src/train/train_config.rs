use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};
use serde::{Serialize, Deserialize};
use crate::train::epoch_stats::EpochStats;
use crate::train::update_rule::UpdateRule;

pub const DEFAULT_EPOCHS: usize = 20;
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Stops training once an epoch at or after `min_epoch` (1-based) reaches an
/// accuracy strictly above `accuracy` (a fraction in `[0, 1]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarlyStop {
    pub min_epoch: usize,
    pub accuracy: f64,
}

impl EarlyStop {
    pub fn should_stop(&self, epoch: usize, accuracy: f64) -> bool {
        epoch >= self.min_epoch && accuracy > self.accuracy
    }
}

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`      — total number of full passes over the samples
/// - `update_rule` — `Delta` (plain perceptron rule) or `Gradient`
/// - `threshold`   — output at or above this counts as class 1 when
///                   computing per-epoch accuracy
/// - `early_stop`  — optional accuracy-based stopping criterion
/// - `weight_decay` — optional fraction in `[0, 1)`; after every update each
///                   weight is multiplied by `1 - weight_decay` (the bias is
///                   left alone).  `None` keeps the plain update rule.
/// - `progress_tx` — optional channel sender; one `EpochStats` is sent per
///                   completed epoch.  If the receiver is dropped the loop
///                   terminates early (clean shutdown).
/// - `stop_flag`   — optional atomic flag; when set to `true` from another
///                   thread the loop terminates before the next epoch.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub epochs: usize,
    pub update_rule: UpdateRule,
    pub threshold: f64,
    pub early_stop: Option<EarlyStop>,
    pub weight_decay: Option<f64>,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig`: delta rule, 0.5 threshold, no early
    /// stop, no weight decay, no progress channel and no stop flag.
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            update_rule: UpdateRule::Delta,
            threshold: DEFAULT_THRESHOLD,
            early_stop: None,
            weight_decay: None,
            progress_tx: None,
            stop_flag: None,
        }
    }

    pub fn with_update_rule(mut self, update_rule: UpdateRule) -> Self {
        self.update_rule = update_rule;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_early_stop(mut self, early_stop: EarlyStop) -> Self {
        self.early_stop = Some(early_stop);
        self
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = Some(weight_decay);
        self
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = Some(flag);
        self
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(DEFAULT_EPOCHS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_twenty_delta_epochs() {
        let config = TrainConfig::default();
        assert_eq!(config.epochs, 20);
        assert_eq!(config.update_rule, UpdateRule::Delta);
        assert_eq!(config.threshold, 0.5);
        assert!(config.early_stop.is_none());
        assert!(config.weight_decay.is_none());
    }

    #[test]
    fn early_stop_needs_both_conditions() {
        let rule = EarlyStop { min_epoch: 5, accuracy: 0.85 };
        assert!(!rule.should_stop(4, 1.0));
        assert!(!rule.should_stop(5, 0.85));
        assert!(rule.should_stop(5, 0.9));
        assert!(rule.should_stop(12, 1.0));
    }
}
