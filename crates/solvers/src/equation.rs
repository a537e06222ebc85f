//! Scalar equations and the solvers that find their roots.
//!
//! An [`Equation`] maps a solver variable `x` to a residual. Solvers in this
//! module drive that residual toward zero.
//!
//! # Solvers
//!
//! - [`secant`]: derivative-free, seeded from two initial points

pub mod secant;

/// A scalar equation `r(x) = 0`.
///
/// Implementors choose the solver variable. A well-scaled variable, where the
/// residual is close to linear in `x`, lets secant-family methods converge in
/// a handful of iterations.
pub trait Equation {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the residual at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residual cannot be computed at `x`.
    fn residual(&self, x: f64) -> Result<f64, Self::Error>;
}

/// A residual evaluated at a given `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub x: f64,
    pub residual: f64,
}

impl Evaluation {
    /// Returns true if this evaluation has a smaller residual magnitude.
    #[must_use]
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.residual.abs() < other.residual.abs()
    }
}
