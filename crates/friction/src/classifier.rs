use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::{
    FlowRegime, FrictionError, FrictionFactor, FrictionModel, RegimeFactor, RelativeRoughness,
    ReynoldsNumber,
};

/// Standard deviation of transitional samples as a fraction of their mean.
pub const TRANSITION_SPREAD: f64 = 0.2;

/// A classified point and its representative friction factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointEvaluation {
    pub reynolds: ReynoldsNumber,
    pub roughness: RelativeRoughness,
    pub regime: FlowRegime,
    pub factor: FrictionFactor,
}

/// Produces one friction factor per point, choosing a policy by regime.
///
/// Laminar and turbulent points are deterministic. In the transitional band
/// neither correlation holds, so the factor is drawn from a normal
/// distribution centred between the two with a spread of
/// [`TRANSITION_SPREAD`] times that centre. This models the uncertainty of
/// the transition zone rather than a physical law.
///
/// The random source is injected, so seeding it makes results reproducible.
#[derive(Debug, Clone)]
pub struct PointClassifier<R> {
    model: FrictionModel,
    rng: R,
}

impl<R: Rng> PointClassifier<R> {
    #[must_use]
    pub fn new(model: FrictionModel, rng: R) -> Self {
        Self { model, rng }
    }

    /// Creates a classifier with the default friction model.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self::new(FrictionModel::default(), rng)
    }

    /// Returns the underlying friction model.
    #[must_use]
    pub fn model(&self) -> &FrictionModel {
        &self.model
    }

    /// Classifies the point and returns its friction factor.
    ///
    /// # Errors
    ///
    /// Returns an error if a required Colebrook solve fails.
    pub fn classify_and_evaluate(
        &mut self,
        re: ReynoldsNumber,
        roughness: RelativeRoughness,
    ) -> Result<PointEvaluation, FrictionError> {
        let point = self.model.regime_factor(re, roughness)?;

        let factor = match point {
            RegimeFactor::Laminar(f) | RegimeFactor::Turbulent(f) => f,
            RegimeFactor::Transitional { .. } => {
                let mean = point.mean();
                let sample = sample_transition(&mut self.rng, mean)?;
                debug!(
                    re = re.value(),
                    roughness = roughness.value(),
                    mean = mean.value(),
                    sample = sample.value(),
                    "sampled transitional friction factor"
                );
                sample
            }
        };

        Ok(PointEvaluation {
            reynolds: re,
            roughness,
            regime: point.regime(),
            factor,
        })
    }

    /// Returns only the friction factor for the point.
    ///
    /// # Errors
    ///
    /// Returns an error if a required Colebrook solve fails.
    pub fn friction_factor(
        &mut self,
        re: ReynoldsNumber,
        roughness: RelativeRoughness,
    ) -> Result<FrictionFactor, FrictionError> {
        Ok(self.classify_and_evaluate(re, roughness)?.factor)
    }
}

/// Draws a positive sample from `Normal(mean, TRANSITION_SPREAD · mean)`.
///
/// Draws at or below zero lie five standard deviations out and are redrawn.
fn sample_transition<R: Rng>(
    rng: &mut R,
    mean: FrictionFactor,
) -> Result<FrictionFactor, FrictionError> {
    let mean = mean.value();
    let normal = Normal::new(mean, TRANSITION_SPREAD * mean)?;

    loop {
        let draw = normal.sample(rng);
        if draw > 0.0 {
            return Ok(FrictionFactor::new_unchecked(draw));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::StdRng};

    fn classifier(seed: u64) -> PointClassifier<StdRng> {
        PointClassifier::with_rng(StdRng::seed_from_u64(seed))
    }

    fn re(value: f64) -> ReynoldsNumber {
        ReynoldsNumber::new(value).unwrap()
    }

    #[test]
    fn laminar_boundary_is_deterministic() {
        let mut classifier = classifier(1);
        let rr = RelativeRoughness::new(0.01).unwrap();

        let first = classifier.classify_and_evaluate(re(2000.0), rr).unwrap();
        let second = classifier.classify_and_evaluate(re(2000.0), rr).unwrap();

        assert_eq!(first.regime, FlowRegime::Laminar);
        assert_eq!(first.factor, second.factor);
        assert_eq!(first.factor.value(), 64.0 / 2000.0);
    }

    #[test]
    fn turbulent_boundary_is_deterministic() {
        let mut classifier = classifier(2);
        let rr = RelativeRoughness::new(1e-4).unwrap();

        let expected = classifier.model().turbulent(re(4000.0), rr).unwrap();
        let first = classifier.friction_factor(re(4000.0), rr).unwrap();
        let second = classifier.friction_factor(re(4000.0), rr).unwrap();

        assert_eq!(first, expected);
        assert_eq!(second, expected);
    }

    #[test]
    fn transitional_points_are_sampled() {
        let mut classifier = classifier(3);
        let rr = RelativeRoughness::SMOOTH;

        let first = classifier.classify_and_evaluate(re(3000.0), rr).unwrap();
        let second = classifier.classify_and_evaluate(re(3000.0), rr).unwrap();

        assert_eq!(first.regime, FlowRegime::Transitional);
        assert_ne!(first.factor, second.factor);
    }

    #[test]
    fn same_seed_reproduces_samples() {
        let rr = RelativeRoughness::new(2e-3).unwrap();

        let mut a = classifier(42);
        let mut b = classifier(42);

        for value in [2500.0, 3000.0, 3500.0] {
            assert_eq!(
                a.friction_factor(re(value), rr).unwrap(),
                b.friction_factor(re(value), rr).unwrap()
            );
        }
    }

    #[test]
    fn evaluation_echoes_inputs() {
        let mut classifier = classifier(4);
        let rr = RelativeRoughness::new(5e-3).unwrap();

        let point = classifier.classify_and_evaluate(re(1.0e5), rr).unwrap();
        assert_eq!(point.reynolds, re(1.0e5));
        assert_eq!(point.roughness, rr);
        assert_eq!(point.regime, FlowRegime::Turbulent);
    }
}
