use moody_friction::{ColebrookConfig, RelativeRoughness};
use thiserror::Error;

use crate::logspace;

/// Relative roughness values drawn on the standard chart.
pub const STANDARD_ROUGHNESS: [f64; 20] = [
    0.0, 1e-6, 5e-6, 1e-5, 5e-5, 1e-4, 2e-4, 4e-4, 6e-4, 8e-4, 1e-3, 2e-3, 4e-3, 6e-3, 8e-3,
    1.5e-2, 2e-2, 3e-2, 4e-2, 5e-2,
];

/// Errors that can occur when validating a chart config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("span bounds must be finite, positive, and increasing, got [{start}, {end}]")]
    Span { start: f64, end: f64 },

    #[error("span must contain at least two points, got {points}")]
    TooFewPoints { points: usize },

    #[error("at least one roughness curve is required")]
    NoRoughness,

    #[error("relative roughness must be finite and non-negative, got {value}")]
    Roughness { value: f64 },

    #[error("view bounds must be finite, positive, and increasing")]
    Bounds,
}

/// A range of Reynolds numbers sampled evenly in log space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReSpan {
    start: f64,
    end: f64,
    points: usize,
}

impl ReSpan {
    /// Creates a validated span.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are not finite, positive, and
    /// increasing, or if fewer than two points are requested.
    pub fn new(start: f64, end: f64, points: usize) -> Result<Self, ConfigError> {
        let valid = start.is_finite() && end.is_finite() && start > 0.0 && end > start;
        if !valid {
            return Err(ConfigError::Span { start, end });
        }
        if points < 2 {
            return Err(ConfigError::TooFewPoints { points });
        }

        Ok(Self { start, end, points })
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Returns the sampled Reynolds numbers, with both ends exact.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        let mut values = logspace(self.start.log10(), self.end.log10(), self.points);
        values[0] = self.start;
        values[self.points - 1] = self.end;
        values
    }
}

/// The visible region of the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    re: [f64; 2],
    friction: [f64; 2],
}

impl ViewBounds {
    /// Creates validated view bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Bounds`] unless both ranges are finite,
    /// positive, and increasing.
    pub fn new(re: [f64; 2], friction: [f64; 2]) -> Result<Self, ConfigError> {
        let valid = |[lo, hi]: [f64; 2]| lo.is_finite() && hi.is_finite() && lo > 0.0 && hi > lo;
        if valid(re) && valid(friction) {
            Ok(Self { re, friction })
        } else {
            Err(ConfigError::Bounds)
        }
    }

    /// Returns the Reynolds number range as `[min, max]`.
    #[must_use]
    pub fn re(&self) -> [f64; 2] {
        self.re
    }

    /// Returns the friction factor range as `[min, max]`.
    #[must_use]
    pub fn friction(&self) -> [f64; 2] {
        self.friction
    }
}

impl Default for ViewBounds {
    fn default() -> Self {
        Self {
            re: [600.0, 1e8],
            friction: [0.008, 0.1],
        }
    }
}

/// Configuration for computing a [`MoodyChart`](crate::MoodyChart).
///
/// The default reproduces the standard chart. Adjust with the `with_*`
/// builder methods.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    laminar: ReSpan,
    transition: ReSpan,
    turbulent: ReSpan,
    roughness: Vec<RelativeRoughness>,
    bounds: ViewBounds,
    colebrook: ColebrookConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            laminar: ReSpan {
                start: 600.0,
                end: 2000.0,
                points: 20,
            },
            transition: ReSpan {
                start: 2000.0,
                end: 4000.0,
                points: 20,
            },
            turbulent: ReSpan {
                start: 4000.0,
                end: 1e8,
                points: 100,
            },
            roughness: STANDARD_ROUGHNESS
                .iter()
                .filter_map(|&value| RelativeRoughness::new(value).ok())
                .collect(),
            bounds: ViewBounds::default(),
            colebrook: ColebrookConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Sets the solid laminar segment.
    #[must_use]
    pub fn with_laminar(mut self, span: ReSpan) -> Self {
        self.laminar = span;
        self
    }

    /// Sets the dashed continuation of the laminar line.
    #[must_use]
    pub fn with_transition(mut self, span: ReSpan) -> Self {
        self.transition = span;
        self
    }

    /// Sets the Reynolds range of the Colebrook curves.
    #[must_use]
    pub fn with_turbulent(mut self, span: ReSpan) -> Self {
        self.turbulent = span;
        self
    }

    /// Replaces the roughness values, one curve each.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty or any value is negative or
    /// not finite.
    pub fn with_roughness(
        mut self,
        values: impl IntoIterator<Item = f64>,
    ) -> Result<Self, ConfigError> {
        let roughness = values
            .into_iter()
            .map(|value| {
                RelativeRoughness::new(value).map_err(|_| ConfigError::Roughness { value })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if roughness.is_empty() {
            return Err(ConfigError::NoRoughness);
        }

        self.roughness = roughness;
        Ok(self)
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: ViewBounds) -> Self {
        self.bounds = bounds;
        self
    }

    #[must_use]
    pub fn with_colebrook(mut self, colebrook: ColebrookConfig) -> Self {
        self.colebrook = colebrook;
        self
    }

    #[must_use]
    pub fn laminar(&self) -> &ReSpan {
        &self.laminar
    }

    #[must_use]
    pub fn transition(&self) -> &ReSpan {
        &self.transition
    }

    #[must_use]
    pub fn turbulent(&self) -> &ReSpan {
        &self.turbulent
    }

    #[must_use]
    pub fn roughness(&self) -> &[RelativeRoughness] {
        &self.roughness
    }

    #[must_use]
    pub fn bounds(&self) -> &ViewBounds {
        &self.bounds
    }

    #[must_use]
    pub fn colebrook(&self) -> &ColebrookConfig {
        &self.colebrook
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_standard_chart() {
        let config = ChartConfig::default();

        assert_eq!(config.laminar().points(), 20);
        assert_eq!(config.transition().points(), 20);
        assert_eq!(config.turbulent().points(), 100);
        assert_eq!(config.roughness().len(), 20);
        assert_eq!(config.roughness()[0], RelativeRoughness::SMOOTH);
        assert!(config.roughness().iter().all(|rr| rr.is_charted()));
        assert!(config.roughness().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(config.bounds().re(), [600.0, 1e8]);
        assert_eq!(config.bounds().friction(), [0.008, 0.1]);
    }

    #[test]
    fn span_values_hit_both_ends() {
        let span = ReSpan::new(2000.0, 4000.0, 20).unwrap();
        let values = span.values();

        assert_eq!(values.len(), 20);
        assert_eq!(values[0], 2000.0);
        assert_eq!(values[19], 4000.0);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rejects_bad_spans() {
        assert!(matches!(
            ReSpan::new(4000.0, 2000.0, 20),
            Err(ConfigError::Span { .. })
        ));
        assert!(matches!(
            ReSpan::new(0.0, 2000.0, 20),
            Err(ConfigError::Span { .. })
        ));
        assert!(matches!(
            ReSpan::new(600.0, f64::INFINITY, 20),
            Err(ConfigError::Span { .. })
        ));
        assert_eq!(
            ReSpan::new(600.0, 2000.0, 1),
            Err(ConfigError::TooFewPoints { points: 1 })
        );
    }

    #[test]
    fn roughness_override() {
        let config = ChartConfig::default()
            .with_roughness([0.0, 1e-3])
            .unwrap();
        assert_eq!(config.roughness().len(), 2);

        assert_eq!(
            ChartConfig::default().with_roughness([]),
            Err(ConfigError::NoRoughness)
        );
        assert!(matches!(
            ChartConfig::default().with_roughness([1e-3, -1e-3]),
            Err(ConfigError::Roughness { .. })
        ));
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert_eq!(
            ViewBounds::new([1e8, 600.0], [0.008, 0.1]),
            Err(ConfigError::Bounds)
        );
        assert!(ViewBounds::new([600.0, 1e8], [0.008, 0.1]).is_ok());
    }
}
