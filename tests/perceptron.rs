use ndarray::{array, Array1, Array2};
use perceptron::{
    dataset::{augment, make_blobs, DEFAULT_CENTERS},
    Perceptron, PerceptronError,
};
use rand::{rngs::StdRng, SeedableRng};

fn or_dataset() -> (Array2<f64>, Array1<f64>) {
    (
        array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]],
        array![1.0, 1.0, 1.0, 0.0],
    )
}

#[test]
fn unfitted_model_refuses_score_and_predict() {
    let (features, labels) = or_dataset();
    let model = Perceptron::seeded(0);

    assert!(!model.is_fitted());
    assert!(model.weights().is_none());
    assert!(model.history().is_empty());
    assert!(matches!(
        model.score(features.view(), labels.view()),
        Err(PerceptronError::NotFitted)
    ));
    assert!(matches!(
        model.predict(features.view()),
        Err(PerceptronError::NotFitted)
    ));
}

#[test]
fn zero_steps_keeps_initial_weights_and_empty_history() {
    let (features, labels) = or_dataset();
    let mut model = Perceptron::seeded(3);

    model.fit(features.view(), labels.view(), 0).unwrap();

    let weights = model.weights().unwrap();
    assert_eq!(weights.len(), 3);
    assert!(weights.iter().all(|&weight| (0.0..1.0).contains(&weight)));
    assert!(model.history().is_empty());
}

#[test]
fn history_has_one_entry_per_step_and_resets_on_refit() {
    let (features, labels) = or_dataset();
    let mut model = Perceptron::seeded(11);

    model.fit(features.view(), labels.view(), 25).unwrap();
    assert_eq!(model.history().len(), 25);

    model.fit(features.view(), labels.view(), 7).unwrap();
    assert_eq!(model.history().len(), 7);
    assert!(model
        .history()
        .iter()
        .all(|&score| (-1.0..=1.0).contains(&score)));
}

#[test]
fn last_history_entry_matches_score() {
    let (features, labels) = or_dataset();
    let mut model = Perceptron::seeded(5);

    model.fit(features.view(), labels.view(), 40).unwrap();

    let score = model.score(features.view(), labels.view()).unwrap();
    assert_eq!(model.history().last().copied(), Some(score));
}

#[test]
fn score_is_deterministic() {
    let (features, labels) = or_dataset();
    let mut model = Perceptron::seeded(9);
    model.fit(features.view(), labels.view(), 10).unwrap();

    let first = model.score(features.view(), labels.view()).unwrap();
    let second = model.score(features.view(), labels.view()).unwrap();

    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn same_seed_gives_same_training_run() {
    let (features, labels) = or_dataset();
    let mut first = Perceptron::seeded(2024);
    let mut second = Perceptron::seeded(2024);

    first.fit(features.view(), labels.view(), 100).unwrap();
    second.fit(features.view(), labels.view(), 100).unwrap();

    assert_eq!(first.weights(), second.weights());
    assert_eq!(first.history(), second.history());
}

#[test]
fn training_beats_random_weights_on_separable_data() {
    let (features, labels) = or_dataset();
    let trials = 20;
    let mut untrained_total = 0.0;
    let mut trained_total = 0.0;

    for seed in 0..trials {
        let mut untrained = Perceptron::seeded(seed);
        untrained.fit(features.view(), labels.view(), 0).unwrap();
        untrained_total += untrained.score(features.view(), labels.view()).unwrap();

        let mut trained = Perceptron::seeded(seed);
        trained.fit(features.view(), labels.view(), 1000).unwrap();
        trained_total += trained.score(features.view(), labels.view()).unwrap();
    }

    assert!(trained_total > untrained_total);
    assert_eq!(trained_total, trials as f64);
}

#[test]
fn separable_clusters_reach_perfect_score() {
    let mut rng = StdRng::seed_from_u64(42);
    let (features, labels) = make_blobs(40, DEFAULT_CENTERS, 1.0, &mut rng);
    let mut model = Perceptron::seeded(42);

    model.fit(features.view(), labels.view(), 2000).unwrap();

    assert_eq!(model.history().last().copied(), Some(1.0));
    let predictions = model.predict(augment(features.view()).view()).unwrap();
    assert_eq!(predictions, labels);
}

#[test]
fn predict_outputs_only_zero_or_one() {
    let (features, labels) = or_dataset();
    let mut model = Perceptron::seeded(17);
    model.fit(features.view(), labels.view(), 50).unwrap();

    let inputs = array![
        [1e9, -1e9, 3.0],
        [-0.0, 0.0, 0.0],
        [-5.5, 2.25, -1.0],
        [0.1, 0.2, 0.3]
    ];
    let predictions = model.predict(inputs.view()).unwrap();

    assert!(predictions
        .iter()
        .all(|&prediction| prediction == 0.0 || prediction == 1.0));
}

#[test]
fn predict_does_not_augment_its_input() {
    let (features, labels) = or_dataset();
    let mut model = Perceptron::seeded(1);
    model.fit(features.view(), labels.view(), 100).unwrap();

    assert!(matches!(
        model.predict(features.view()),
        Err(PerceptronError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        model.predict(Array2::<f64>::zeros((2, 4)).view()),
        Err(PerceptronError::ShapeMismatch { .. })
    ));
    assert_eq!(
        model
            .predict(augment(features.view()).view())
            .unwrap()
            .len(),
        4
    );
}

#[test]
fn score_rejects_mismatched_shapes() {
    let (features, labels) = or_dataset();
    let mut model = Perceptron::seeded(1);
    model.fit(features.view(), labels.view(), 10).unwrap();

    assert!(matches!(
        model.score(features.view(), array![1.0, 0.0].view()),
        Err(PerceptronError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        model.score(augment(features.view()).view(), labels.view()),
        Err(PerceptronError::ShapeMismatch { .. })
    ));
}
