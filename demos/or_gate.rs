use perceptron_rs::{ActivationFunction, Perceptron, PerceptronConfig, TrainingSample};

fn main() -> perceptron_rs::Result<()> {
    let samples: Vec<TrainingSample> = vec![
        ([0.0, 0.0], 0.0).into(),
        ([0.0, 1.0], 1.0).into(),
        ([1.0, 0.0], 1.0).into(),
        ([1.0, 1.0], 1.0).into(),
    ];

    let mut perceptron = Perceptron::new(2, PerceptronConfig::new(0.1, ActivationFunction::Step))?;
    let report = perceptron.train(&samples, 20)?;

    for stats in &report.history {
        println!("Epoch {}: total error = {:.4}", stats.epoch, stats.total_error);
    }

    for sample in &samples {
        println!(
            "Input: {:?} -> Output: {} (Expected: {})",
            sample.features,
            perceptron.predict(&sample.features)?,
            sample.target
        );
    }
    Ok(())
}
