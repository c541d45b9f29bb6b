use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::data::sample::TrainingSample;
use crate::error::{PerceptronError, Result};
use crate::neuron::perceptron::Perceptron;
use crate::train::epoch_stats::{EpochStats, TrainReport};
use crate::train::train_config::TrainConfig;
use crate::train::update_rule::UpdateRule;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `perceptron` for up to `config.epochs` epochs of online updates.
///
/// Samples are visited in the given order and the weights change after every
/// sample, so each update sees the weights left by the previous one.
///
/// # Errors
/// Returns `SampleDimensionMismatch` for the first sample whose feature count
/// differs from the perceptron's input size, and `InvalidWeightDecay` when
/// `config.weight_decay` lies outside `[0, 1)`.  Both are checked before
/// training starts, so on error the perceptron is unchanged.
///
/// # Early termination
/// The loop breaks early if:
/// - `config.stop_flag` is set to `true` (checked before each epoch),
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.early_stop` is satisfied by the epoch just completed.
pub fn train_loop(
    perceptron: &mut Perceptron,
    samples: &[TrainingSample],
    config: &TrainConfig,
) -> Result<TrainReport> {
    validate_samples(perceptron, samples)?;
    let retain = match config.weight_decay {
        Some(decay) if (0.0..1.0).contains(&decay) => Some(1.0 - decay),
        Some(decay) => return Err(PerceptronError::InvalidWeightDecay(decay)),
        None => None,
    };

    let mut report = TrainReport::default();

    for epoch in 1..=config.epochs {
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                tracing::info!(epoch, "stop flag set, training halted");
                break;
            }
        }

        let t_start = Instant::now();

        // ── One full pass over the samples ────────────────────────────────
        let (total_error, correct) =
            run_one_epoch(perceptron, samples, config.update_rule, config.threshold, retain);

        let accuracy = if samples.is_empty() {
            0.0
        } else {
            correct as f64 / samples.len() as f64
        };

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            total_error,
            correct,
            accuracy,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            epoch,
            total_epochs = config.epochs,
            total_error,
            accuracy,
            "epoch complete"
        );

        report.history.push(stats.clone());

        // ── Emit progress ─────────────────────────────────────────────────
        if let Some(ref tx) = config.progress_tx {
            if tx.send(stats).is_err() {
                tracing::info!(epoch, "progress receiver dropped, training halted");
                break;
            }
        }

        if let Some(rule) = config.early_stop {
            if rule.should_stop(epoch, accuracy) {
                tracing::info!(epoch, accuracy, "early stop");
                break;
            }
        }
    }

    report.stopped_early = report.history.len() < config.epochs;
    Ok(report)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn validate_samples(perceptron: &Perceptron, samples: &[TrainingSample]) -> Result<()> {
    let expected = perceptron.input_size();
    for (index, sample) in samples.iter().enumerate() {
        if sample.features.len() != expected {
            return Err(PerceptronError::SampleDimensionMismatch {
                index,
                expected,
                found: sample.features.len(),
            });
        }
    }
    Ok(())
}

/// One pass over `samples`, updating after every sample.  When `retain` is
/// set, every weight is multiplied by it right after each update.
/// Returns the summed absolute error and the number of correct predictions.
fn run_one_epoch(
    perceptron: &mut Perceptron,
    samples: &[TrainingSample],
    update_rule: UpdateRule,
    threshold: f64,
    retain: Option<f64>,
) -> (f64, usize) {
    let activation = perceptron.activation();
    let mut total_error = 0.0;
    let mut correct = 0;

    for sample in samples {
        let sum = perceptron.sum_unchecked(&sample.features);
        let predicted = activation.function(sum);
        let error = sample.target - predicted;
        total_error += error.abs();

        if (predicted >= threshold) == (sample.target >= threshold) {
            correct += 1;
        }

        let delta = match update_rule {
            UpdateRule::Delta => error,
            UpdateRule::Gradient => error * activation.derivative(sum),
        };
        perceptron.apply_update(&sample.features, delta);
        if let Some(factor) = retain {
            perceptron.shrink_weights(factor);
        }
    }

    (total_error, correct)
}
