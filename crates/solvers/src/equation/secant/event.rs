use crate::{Equation, Evaluation};

/// Events emitted by the secant solver, one per iteration.
pub enum Event<'a, E: Equation> {
    /// The residual was computed at the new point.
    Evaluated {
        /// Iteration counter (1-based).
        iter: usize,

        /// The new point and its residual.
        eval: Evaluation,

        /// Distance from the previous point.
        step: f64,
    },

    /// The equation failed at the new point.
    Failed {
        /// Iteration counter (1-based).
        iter: usize,

        /// The x value where evaluation failed.
        x: f64,

        /// The equation error.
        error: &'a E::Error,
    },
}

impl<E: Equation> Event<'_, E> {
    /// Returns the iteration counter.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Evaluated { iter, .. } | Self::Failed { iter, .. } => *iter,
        }
    }

    /// Returns the x value that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Evaluated { eval, .. } => eval.x,
            Self::Failed { x, .. } => *x,
        }
    }

    /// Returns the residual, or `None` if the evaluation failed.
    #[must_use]
    pub fn residual(&self) -> Option<f64> {
        match self {
            Self::Evaluated { eval, .. } => Some(eval.residual),
            Self::Failed { .. } => None,
        }
    }
}
