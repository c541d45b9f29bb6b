use perceptron_rs::{
    evaluate, train_loop, ActivationFunction, EarlyStop, Perceptron, PerceptronConfig,
    TrainConfig, TrainingSample,
};

fn main() -> perceptron_rs::Result<()> {
    let samples: Vec<TrainingSample> = vec![
        ([0.0, 0.0], 0.0).into(),
        ([0.0, 1.0], 0.0).into(),
        ([1.0, 0.0], 0.0).into(),
        ([1.0, 1.0], 1.0).into(),
    ];

    let mut perceptron = Perceptron::new(2, PerceptronConfig::new(0.1, ActivationFunction::Step))?;

    // Stop once the last few epochs classify everything.
    let config = TrainConfig::new(12).with_early_stop(EarlyStop { min_epoch: 8, accuracy: 0.85 });
    let report = train_loop(&mut perceptron, &samples, &config)?;
    if report.stopped_early {
        println!("Stopped early after {} epochs", report.epochs_run());
    }

    // Noisy inputs that should still behave like AND.
    let probes: Vec<TrainingSample> = vec![
        ([0.1, 0.1], 0.0).into(),
        ([0.9, 0.9], 1.0).into(),
        ([0.8, 0.2], 0.0).into(),
        ([0.1, 0.8], 0.0).into(),
        ([0.4, 0.4], 0.0).into(),
    ];

    for (name, set) in [("training", &samples), ("noisy", &probes)] {
        let eval = evaluate(&perceptron, set, 0.5)?;
        println!("{name}: {}/{} correct ({:.1}%)", eval.correct, eval.total, eval.accuracy * 100.0);
    }
    Ok(())
}
