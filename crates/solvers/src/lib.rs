//! Scalar root finding for the Moody workspace.
//!
//! This crate defines the abstractions the friction factor correlations build
//! on:
//!
//! - [`Equation`]: a scalar residual function `r(x)` whose root is sought
//! - [`Observer`]: receives solver events and optionally returns control actions
//!
//! and the [`equation::secant`] solver, a derivative-free method that starts
//! from two initial points and converges superlinearly near a simple root.

pub mod equation;
mod observer;

pub use equation::{Equation, Evaluation};
pub use observer::Observer;
