use approx::assert_relative_eq;
use moody_friction::{
    FlowRegime, FrictionModel, PointClassifier, RelativeRoughness, ReynoldsNumber,
    TRANSITION_SPREAD,
};
use rand::{SeedableRng, rngs::StdRng};

const DRAWS: usize = 10_000;

fn sample(seed: u64, re: f64, rr: f64) -> Vec<f64> {
    let mut classifier = PointClassifier::with_rng(StdRng::seed_from_u64(seed));
    let re = ReynoldsNumber::new(re).unwrap();
    let rr = RelativeRoughness::new(rr).unwrap();

    (0..DRAWS)
        .map(|_| {
            let point = classifier.classify_and_evaluate(re, rr).unwrap();
            assert_eq!(point.regime, FlowRegime::Transitional);
            point.factor.value()
        })
        .collect()
}

fn mean_and_sd(values: &[f64]) -> (f64, f64) {
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var.sqrt())
}

#[test]
fn smooth_pipe_at_3000_matches_blended_normal() {
    let samples = sample(7, 3000.0, 0.0);
    let (mean, sd) = mean_and_sd(&samples);

    let expected_mean = 0.5 * (64.0 / 3000.0 + 0.043_519_2);
    assert_relative_eq!(mean, expected_mean, max_relative = 0.01);
    assert_relative_eq!(sd, TRANSITION_SPREAD * expected_mean, max_relative = 0.05);
}

#[test]
fn rough_pipe_distribution_tracks_model_midpoint() {
    let re = 2500.0;
    let rr = 0.02;

    let model = FrictionModel::default();
    let midpoint = model
        .regime_factor(
            ReynoldsNumber::new(re).unwrap(),
            RelativeRoughness::new(rr).unwrap(),
        )
        .unwrap()
        .mean()
        .value();

    let samples = sample(11, re, rr);
    let (mean, sd) = mean_and_sd(&samples);

    assert_relative_eq!(mean, midpoint, max_relative = 0.01);
    assert_relative_eq!(sd, TRANSITION_SPREAD * midpoint, max_relative = 0.05);
}

#[test]
fn samples_are_always_positive() {
    assert!(sample(13, 3999.0, 0.05).iter().all(|&f| f > 0.0));
}

#[test]
fn reference_point_matches_published_chart() {
    // Commercial steel near Re = 1e6 reads about 0.0172 off a printed chart.
    let f = FrictionModel::default()
        .turbulent(
            ReynoldsNumber::new(1.0e6).unwrap(),
            RelativeRoughness::new(4.0e-4).unwrap(),
        )
        .unwrap();

    assert_relative_eq!(f.value(), 0.0172, max_relative = 0.05);
}
