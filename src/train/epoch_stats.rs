use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `EpochStats` value at the end of every completed epoch.
/// The same values are collected into the returned `TrainReport`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Sum of `|target - predicted|` over the epoch, each prediction taken
    /// just before that sample's update.
    pub total_error: f64,
    /// Samples whose pre-update prediction fell on the same side of the
    /// threshold as the target.
    pub correct: usize,
    /// `correct / samples`, or `0.0` for an empty sample set.
    pub accuracy: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

/// Outcome of a training run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// One entry per completed epoch, in order.
    pub history: Vec<EpochStats>,
    /// `true` when the run ended before the requested epoch count (early
    /// stop, stop flag, or a dropped progress receiver).
    pub stopped_early: bool,
}

impl TrainReport {
    pub fn last(&self) -> Option<&EpochStats> {
        self.history.last()
    }

    pub fn epochs_run(&self) -> usize {
        self.history.len()
    }

    /// Total error of the last completed epoch, `None` if no epoch ran.
    pub fn final_error(&self) -> Option<f64> {
        self.last().map(|s| s.total_error)
    }
}
