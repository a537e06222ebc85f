use thiserror::Error;

use moody_solvers::equation::secant;

/// Errors that can occur when evaluating a friction factor.
#[derive(Debug, Error)]
pub enum FrictionError {
    /// The Reynolds number is zero, negative, or not a number.
    #[error("Reynolds number must be finite and positive, got {value}")]
    InvalidReynoldsNumber { value: f64 },

    /// The relative roughness is negative or not a number.
    #[error("relative roughness must be finite and non-negative, got {value}")]
    InvalidRoughness { value: f64 },

    /// The friction factor is zero, negative, or not a number.
    #[error("friction factor must be finite and positive, got {value}")]
    InvalidFrictionFactor { value: f64 },

    /// The Colebrook solve stopped before meeting its tolerances.
    #[error(
        "Colebrook solve did not converge at Re = {reynolds}, roughness = {roughness}: \
         residual {residual} after {iters} iterations"
    )]
    RootFindDidNotConverge {
        reynolds: f64,
        roughness: f64,
        residual: f64,
        iters: usize,
    },

    /// The secant solver failed outright.
    #[error("Colebrook solve failed")]
    Solver(#[from] secant::Error),

    /// The transitional sampling distribution could not be built.
    #[error("invalid transitional distribution")]
    Distribution(#[from] rand_distr::NormalError),
}
