// Runs one perceptron experiment and prints its predictions.
//
//   cargo run                        # built-in weather dataset
//   cargo run -- experiment.json     # any experiment file
//
// Logging goes to stderr; set RUST_LOG=debug for construction details.
use std::io;

use perceptron_rs::{
    evaluate, ActivationFunction, Experiment, PerceptronConfig, PerceptronError, TrainingSample,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), PerceptronError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_writer(io::stderr).with_env_filter(filter).with_target(false).init();

    let experiment = match std::env::args().nth(1) {
        Some(path) => Experiment::load_json(&path)?,
        None => weather_experiment(),
    };

    let samples = experiment.prepared_samples()?;
    let mut perceptron = experiment.build()?;

    info!(
        name = %experiment.name,
        samples = samples.len(),
        epochs = experiment.epochs,
        activation = %perceptron.activation(),
        "training"
    );
    let report = perceptron_rs::train_loop(&mut perceptron, &samples, &experiment.train_config())?;
    info!(
        epochs_run = report.epochs_run(),
        final_error = report.final_error().unwrap_or(0.0),
        stopped_early = report.stopped_early,
        "training finished"
    );

    let eval = evaluate(&perceptron, &samples, experiment.threshold)?;

    println!("\n=== {} ===", experiment.name);
    for (sample, pred) in samples.iter().zip(eval.predictions.iter()) {
        println!(
            "Input: {:?} => Prediction: {:.3} (Expected: {})",
            sample.features, pred.output, sample.target
        );
    }
    println!(
        "\nAccuracy: {}/{} ({:.1}%)",
        eval.correct,
        eval.total,
        eval.accuracy * 100.0
    );

    Ok(())
}

/// Temperature (°C), humidity (%), pressure (hPa) => rain (1) or not (0).
fn weather_experiment() -> Experiment {
    let raw: [([f64; 3], f64); 20] = [
        ([18.0, 90.0, 1006.0], 1.0),
        ([20.0, 85.0, 1007.0], 1.0),
        ([22.0, 80.0, 1008.0], 1.0),
        ([24.0, 75.0, 1010.0], 0.0),
        ([26.0, 65.0, 1012.0], 0.0),
        ([28.0, 60.0, 1013.0], 0.0),
        ([30.0, 50.0, 1015.0], 0.0),
        ([19.0, 88.0, 1005.0], 1.0),
        ([21.0, 82.0, 1008.0], 1.0),
        ([23.0, 70.0, 1010.0], 0.0),
        ([25.0, 68.0, 1011.0], 0.0),
        ([27.0, 55.0, 1014.0], 0.0),
        ([17.0, 92.0, 1004.0], 1.0),
        ([18.0, 89.0, 1006.0], 1.0),
        ([29.0, 58.0, 1015.0], 0.0),
        ([31.0, 48.0, 1016.0], 0.0),
        ([20.0, 83.0, 1007.0], 1.0),
        ([22.0, 78.0, 1009.0], 0.0),
        ([24.0, 72.0, 1011.0], 0.0),
        ([19.0, 87.0, 1006.0], 1.0),
    ];

    Experiment {
        name: "weather".to_string(),
        input_size: 3,
        perceptron: PerceptronConfig::new(0.3, ActivationFunction::Step),
        epochs: 200,
        update_rule: Default::default(),
        threshold: 0.5,
        early_stop: None,
        weight_decay: None,
        seed: None,
        scale: Some(100.0),
        samples: raw.into_iter().map(TrainingSample::from).collect(),
    }
}
