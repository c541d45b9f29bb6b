use perceptron_rs::{
    evaluate, ActivationFunction, Perceptron, PerceptronConfig, PerceptronError, TrainingSample,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn separable_pair() -> Vec<TrainingSample> {
    vec![
        TrainingSample::new(vec![0.1, 0.9, 10.0], 1.0),
        TrainingSample::new(vec![0.9, 0.1, -10.0], 0.0),
    ]
}

#[test]
fn separable_pair_converges_with_step() {
    for seed in 0..20 {
        let config = PerceptronConfig::with_selector(0.3, "step");
        let mut p = Perceptron::with_seed(3, config, seed).unwrap();
        let report = p.train(&separable_pair(), 200).unwrap();

        assert_eq!(report.epochs_run(), 200);
        assert_eq!(report.final_error(), Some(0.0));
        for sample in separable_pair() {
            assert_eq!(p.predict(&sample.features).unwrap(), sample.target);
        }
    }
}

#[test]
fn one_step_matches_delta_rule_arithmetic() {
    for activation in ActivationFunction::ALL {
        let config = PerceptronConfig::new(0.25, activation);
        let mut p = Perceptron::with_seed(3, config, 99).unwrap();
        let sample = TrainingSample::new(vec![0.4, -1.5, 2.0], 1.0);

        let w_before = p.weights().to_vec();
        let b_before = p.bias();
        let predicted = p.predict(&sample.features).unwrap();
        let error = sample.target - predicted;

        let report = p.train(std::slice::from_ref(&sample), 1).unwrap();
        assert_eq!(report.history[0].total_error, error.abs());

        for i in 0..3 {
            let expected = w_before[i] + 0.25 * error * sample.features[i];
            assert_eq!(p.weights()[i], expected, "{activation} weight {i}");
        }
        assert_eq!(p.bias(), b_before + 0.25 * error);
    }
}

#[test]
fn updates_are_applied_per_sample_in_order() {
    let config = PerceptronConfig::new(0.5, ActivationFunction::Linear);
    let mut p = Perceptron::with_seed(1, config, 3).unwrap();
    let samples = vec![
        TrainingSample::new(vec![1.0], 2.0),
        TrainingSample::new(vec![-1.0], 0.0),
    ];

    // Replay the two updates by hand; the second must see the first's result.
    let (mut w, mut b) = (p.weights()[0], p.bias());
    for s in &samples {
        let err = s.target - (b + s.features[0] * w);
        w += 0.5 * err * s.features[0];
        b += 0.5 * err;
    }

    p.train(&samples, 1).unwrap();
    assert_eq!(p.weights()[0], w);
    assert_eq!(p.bias(), b);
}

#[test]
fn zero_epochs_is_a_no_op() {
    let mut p = Perceptron::with_seed(3, PerceptronConfig::default(), 5).unwrap();
    let before = p.clone();
    let report = p.train(&separable_pair(), 0).unwrap();
    assert!(report.history.is_empty());
    assert_eq!(p, before);
}

#[test]
fn empty_sample_set_is_legal() {
    let mut p = Perceptron::with_seed(2, PerceptronConfig::default(), 5).unwrap();
    let report = p.train(&[], 4).unwrap();
    assert_eq!(report.epochs_run(), 4);
    assert!(report.history.iter().all(|s| s.total_error == 0.0));
}

#[test]
fn mismatched_lengths_fail_fast() {
    let mut p = Perceptron::with_seed(2, PerceptronConfig::default(), 8).unwrap();
    let before = p.clone();

    assert!(matches!(
        p.predict(&[1.0, 2.0, 3.0]),
        Err(PerceptronError::DimensionMismatch { expected: 2, found: 3 })
    ));

    // The good first sample must not be applied when a later one is bad.
    let samples = vec![
        TrainingSample::new(vec![1.0, 0.0], 1.0),
        TrainingSample::new(vec![1.0], 0.0),
    ];
    assert!(matches!(
        p.train(&samples, 10),
        Err(PerceptronError::SampleDimensionMismatch { index: 1, expected: 2, found: 1 })
    ));
    assert_eq!(p, before);
}

#[test]
fn unknown_selector_is_sigmoid() {
    let a = Perceptron::with_seed(2, PerceptronConfig::with_selector(0.1, "gaussian"), 4).unwrap();
    let b = Perceptron::with_seed(2, PerceptronConfig::with_selector(0.1, "sigmoid"), 4).unwrap();
    assert_eq!(a.activation(), ActivationFunction::Sigmoid);
    for x in [[0.0, 0.0], [1.0, -1.0], [3.5, 2.25]] {
        assert_eq!(a.predict(&x).unwrap(), b.predict(&x).unwrap());
    }
}

#[test]
fn injected_rng_is_reproducible() {
    let config = PerceptronConfig::default();
    let a = Perceptron::with_rng(5, config, &mut StdRng::seed_from_u64(1234)).unwrap();
    let b = Perceptron::with_rng(5, config, &mut StdRng::seed_from_u64(1234)).unwrap();
    assert_eq!(a.weights(), b.weights());
    assert_eq!(a.bias(), b.bias());
}

#[test]
fn weather_dataset_is_learned_with_step() {
    let raw = [
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
    ];
    let samples: Vec<TrainingSample> = raw
        .into_iter()
        .map(|pair| TrainingSample::from(pair).scaled(100.0))
        .collect();

    let config = PerceptronConfig::new(0.3, ActivationFunction::Step);
    let mut p = Perceptron::with_seed(3, config, 2024).unwrap();
    let report = p.train(&samples, 1000).unwrap();

    assert_eq!(report.final_error(), Some(0.0));
    let eval = evaluate(&p, &samples, 0.5).unwrap();
    assert_eq!(eval.correct, samples.len());
    assert_eq!(eval.accuracy, 1.0);
}
