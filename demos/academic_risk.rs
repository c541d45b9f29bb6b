use perceptron_rs::{
    train_loop, ActivationFunction, Perceptron, PerceptronConfig, TrainConfig, TrainingSample,
    UpdateRule,
};

/// Maps `value` from `[min, max]` onto `[-1, 1]`.
fn normalize(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min) * 2.0 - 1.0
}

fn main() -> perceptron_rs::Result<()> {
    // Study hours, attendance, grade average, sleep hours => high risk (1) or low (0).
    let raw: [[f64; 5]; 20] = [
        [5.0, 0.9, 80.0, 6.0, 0.0],
        [2.0, 0.6, 55.0, 5.0, 1.0],
        [8.0, 1.0, 95.0, 8.0, 0.0],
        [3.0, 0.5, 50.0, 4.0, 1.0],
        [6.0, 0.8, 85.0, 7.0, 0.0],
        [1.0, 0.4, 40.0, 5.0, 1.0],
        [7.0, 0.9, 90.0, 7.0, 0.0],
        [2.0, 0.7, 60.0, 6.0, 1.0],
        [4.0, 0.6, 70.0, 6.0, 1.0],
        [5.0, 0.85, 88.0, 7.0, 0.0],
        [3.0, 0.55, 65.0, 5.0, 1.0],
        [6.0, 0.95, 92.0, 8.0, 0.0],
        [1.0, 0.5, 45.0, 5.0, 1.0],
        [4.0, 0.7, 75.0, 6.0, 0.0],
        [2.0, 0.6, 58.0, 5.0, 1.0],
        [7.0, 0.9, 89.0, 8.0, 0.0],
        [3.0, 0.55, 62.0, 5.0, 1.0],
        [8.0, 1.0, 96.0, 8.0, 0.0],
        [5.0, 0.8, 82.0, 7.0, 0.0],
        [2.0, 0.5, 50.0, 5.0, 1.0],
    ];

    let samples: Vec<TrainingSample> = raw
        .iter()
        .map(|row| {
            let features = vec![
                normalize(row[0], 0.0, 10.0),
                normalize(row[1], 0.0, 1.0),
                normalize(row[2], 0.0, 100.0),
                normalize(row[3], 0.0, 10.0),
            ];
            TrainingSample::new(features, row[4])
        })
        .collect();

    let mut perceptron = Perceptron::new(4, PerceptronConfig::new(0.05, ActivationFunction::Tanh))?;

    // Tanh outputs live in (-1, 1), so 0 separates the classes.
    let config = TrainConfig::new(2000)
        .with_update_rule(UpdateRule::Gradient)
        .with_threshold(0.0);
    let report = train_loop(&mut perceptron, &samples, &config)?;

    for stats in report.history.iter().step_by(100) {
        println!("Epoch {:4} - accuracy {:.3}", stats.epoch, stats.accuracy);
    }

    let mut correct = 0;
    for sample in &samples {
        let out = perceptron.predict(&sample.features)?;
        let class = if out >= 0.0 { 1.0 } else { 0.0 };
        if class == sample.target {
            correct += 1;
        }
        println!("Prediction: {out:.3} -> {class:.0} | Expected: {:.0}", sample.target);
    }
    println!("Final accuracy: {:.3}", correct as f64 / samples.len() as f64);
    Ok(())
}
