use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during secant solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("initial point is not finite: {value}")]
    NonFiniteInitialPoint { value: f64 },

    #[error("initial points are identical: both are {value}")]
    DegenerateInitialPoints { value: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("secant slope vanished at x = {x}")]
    ZeroSlope { x: f64 },

    #[error("equation evaluation failed")]
    Equation(#[source] Box<dyn StdError + Send + Sync>),
}
