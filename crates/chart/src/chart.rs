use moody_friction::{
    Correlation, FrictionError, FrictionFactor, FrictionModel, PointEvaluation, RelativeRoughness,
    ReynoldsNumber,
};
use thiserror::Error;
use tracing::debug;

use crate::{ChartConfig, Marker, ViewBounds};

/// Errors that can occur when computing a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A laminar or Colebrook evaluation failed along a curve.
    #[error("failed to evaluate the chart at Re = {reynolds}, roughness = {roughness}")]
    Friction {
        reynolds: f64,
        roughness: f64,
        #[source]
        source: FrictionError,
    },
}

/// A Colebrook curve for one relative roughness.
#[derive(Debug, Clone, PartialEq)]
pub struct RoughnessCurve {
    pub roughness: RelativeRoughness,
    /// `[Re, f]` pairs in increasing Re.
    pub points: Vec<[f64; 2]>,
}

impl RoughnessCurve {
    /// Returns the text drawn at the right end of the curve.
    #[must_use]
    pub fn label(&self) -> String {
        self.roughness.to_string()
    }
}

/// A point drawn on top of the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub reynolds: ReynoldsNumber,
    pub factor: FrictionFactor,
    pub marker: Marker,
}

impl Highlight {
    #[must_use]
    pub fn new(reynolds: ReynoldsNumber, factor: FrictionFactor) -> Self {
        Self {
            reynolds,
            factor,
            marker: Marker::for_reynolds(reynolds),
        }
    }
}

impl From<PointEvaluation> for Highlight {
    fn from(point: PointEvaluation) -> Self {
        Self {
            reynolds: point.reynolds,
            factor: point.factor,
            marker: Marker::for_regime(point.regime),
        }
    }
}

/// The curves of a Moody chart, ready to draw.
///
/// All points are `[Re, f]` in linear units.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodyChart {
    laminar: Vec<[f64; 2]>,
    transition: Vec<[f64; 2]>,
    curves: Vec<RoughnessCurve>,
    bounds: ViewBounds,
    highlight: Option<Highlight>,
}

impl MoodyChart {
    /// Evaluates every curve described by `config`.
    ///
    /// The laminar line `f = 64/Re` is drawn solid over its laminar span and
    /// continued as a dashed line across the transition. Each roughness
    /// value yields one Colebrook curve over the turbulent span.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Friction`] if any point cannot be evaluated.
    pub fn compute(config: &ChartConfig) -> Result<Self, ChartError> {
        let model = FrictionModel::new(*config.colebrook());
        let smooth = RelativeRoughness::SMOOTH;

        let laminar = sweep(&model, &config.laminar().values(), smooth, Correlation::Laminar)?;
        let transition = sweep(
            &model,
            &config.transition().values(),
            smooth,
            Correlation::Laminar,
        )?;

        let turbulent_re = config.turbulent().values();
        let curves = config
            .roughness()
            .iter()
            .map(|&roughness| {
                sweep(&model, &turbulent_re, roughness, Correlation::Colebrook)
                    .map(|points| RoughnessCurve { roughness, points })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            laminar = laminar.len(),
            transition = transition.len(),
            curves = curves.len(),
            points_per_curve = turbulent_re.len(),
            "computed Moody chart"
        );

        Ok(Self {
            laminar,
            transition,
            curves,
            bounds: *config.bounds(),
            highlight: None,
        })
    }

    /// Returns the chart with a point marked on it.
    #[must_use]
    pub fn with_highlight(mut self, highlight: impl Into<Highlight>) -> Self {
        self.highlight = Some(highlight.into());
        self
    }

    /// The solid laminar segment.
    #[must_use]
    pub fn laminar(&self) -> &[[f64; 2]] {
        &self.laminar
    }

    /// The dashed laminar continuation across the transition.
    #[must_use]
    pub fn transition(&self) -> &[[f64; 2]] {
        &self.transition
    }

    #[must_use]
    pub fn curves(&self) -> &[RoughnessCurve] {
        &self.curves
    }

    #[must_use]
    pub fn bounds(&self) -> &ViewBounds {
        &self.bounds
    }

    #[must_use]
    pub fn highlight(&self) -> Option<&Highlight> {
        self.highlight.as_ref()
    }
}

fn sweep(
    model: &FrictionModel,
    reynolds: &[f64],
    roughness: RelativeRoughness,
    correlation: Correlation,
) -> Result<Vec<[f64; 2]>, ChartError> {
    reynolds
        .iter()
        .map(|&value| {
            ReynoldsNumber::new(value)
                .and_then(|re| model.friction_factor(re, roughness, correlation))
                .map(|f| [value, f.value()])
                .map_err(|source| ChartError::Friction {
                    reynolds: value,
                    roughness: roughness.value(),
                    source,
                })
        })
        .collect()
}
