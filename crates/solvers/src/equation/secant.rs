//! Secant method for scalar equations.
//!
//! # Algorithm
//!
//! Starting from two points `x₀` and `x₁`, each iteration replaces the older
//! point with the root of the line through the latest two evaluations:
//!
//! ```text
//! x_{n+1} = x_n - r(x_n) · (x_n - x_{n-1}) / (r(x_n) - r(x_{n-1}))
//! ```
//!
//! # When to Use
//!
//! - The residual is smooth and close to linear near the root
//! - Derivatives are unavailable
//! - A reasonable initial guess is known, but a bracket is not
//!
//! # Limitations
//!
//! - **No bracketing**: convergence is not guaranteed far from the root
//! - **Flat residuals**: equal residuals at the last two points stop the
//!   solver with [`Error::ZeroSlope`]
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the two initial points:
//!
//! - [`Event::Evaluated`]: the residual was computed at the new point
//! - [`Event::Failed`]: the equation returned an error at the new point
//!
//! Observers can return [`Action::StopEarly`] to halt and keep the best
//! evaluation seen so far.

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use tracing::{debug, trace};

use crate::{Equation, Evaluation, Observer};

/// Finds a root of the equation using the secant method.
///
/// The two `initial` points must be finite and distinct.
/// The observer receives an [`Event`] for each iteration.
///
/// # Errors
///
/// Returns an error if the initial points are invalid, an evaluation is
/// non-finite, the secant slope vanishes, or the equation fails and the
/// observer does not stop the solver.
pub fn solve<E, Obs>(
    equation: &E,
    initial: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    E: Equation,
    Obs: for<'a> Observer<Event<'a, E>, Action>,
{
    let [x0, x1] = initial;
    for x in initial {
        if !x.is_finite() {
            return Err(Error::NonFiniteInitialPoint { value: x });
        }
    }
    #[allow(clippy::float_cmp)]
    if x0 == x1 {
        return Err(Error::DegenerateInitialPoints { value: x0 });
    }

    let mut previous = evaluate_initial(equation, x0)?;
    if previous.residual.abs() <= config.residual_tol() {
        return Ok(Solution::new(previous, Status::Converged, 0));
    }

    let mut current = evaluate_initial(equation, x1)?;
    if current.residual.abs() <= config.residual_tol() {
        return Ok(Solution::new(current, Status::Converged, 0));
    }

    let mut best = if current.is_better_than(&previous) {
        current
    } else {
        previous
    };

    for iter in 1..=config.max_iters() {
        let x = next_point(&previous, &current)?;

        let residual = match equation.residual(x) {
            Ok(residual) => residual,
            Err(error) => {
                let event = Event::Failed {
                    iter,
                    x,
                    error: &error,
                };
                return match observer.observe(&event) {
                    Some(Action::StopEarly) => {
                        debug!(iter, x = best.x, "secant stopped by observer after failure");
                        Ok(Solution::new(best, Status::StoppedByObserver, iter))
                    }
                    None => Err(Error::Equation(Box::new(error))),
                };
            }
        };

        if !residual.is_finite() {
            return Err(Error::NonFiniteResidual { x, residual });
        }

        let eval = Evaluation { x, residual };
        let step = x - current.x;
        trace!(iter, x, residual, step, "secant iteration");

        let event = Event::Evaluated { iter, eval, step };
        let action = observer.observe(&event);

        if eval.is_better_than(&best) {
            best = eval;
        }

        if let Some(Action::StopEarly) = action {
            debug!(iter, x = best.x, "secant stopped by observer");
            return Ok(Solution::new(best, Status::StoppedByObserver, iter));
        }

        let x_converged = step.abs() <= config.x_abs_tol() + config.x_rel_tol() * x.abs();
        let residual_converged = residual.abs() <= config.residual_tol();

        previous = current;
        current = eval;

        if x_converged || residual_converged {
            debug!(iter, x, residual, "secant converged");
            return Ok(Solution::new(current, Status::Converged, iter));
        }
    }

    debug!(
        iters = config.max_iters(),
        x = best.x,
        residual = best.residual,
        "secant reached iteration limit"
    );
    Ok(Solution::new(best, Status::MaxIters, config.max_iters()))
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<E: Equation>(
    equation: &E,
    initial: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, initial, config, ())
}

/// Evaluates one of the two starting points, which bypass the observer.
fn evaluate_initial<E: Equation>(equation: &E, x: f64) -> Result<Evaluation, Error> {
    let residual = equation
        .residual(x)
        .map_err(|error| Error::Equation(Box::new(error)))?;

    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }

    Ok(Evaluation { x, residual })
}

/// Returns the root of the secant line through two evaluations.
fn next_point(previous: &Evaluation, current: &Evaluation) -> Result<f64, Error> {
    let rise = current.residual - previous.residual;

    #[allow(clippy::float_cmp)]
    if rise == 0.0 {
        return Err(Error::ZeroSlope { x: current.x });
    }

    let x = current.x - current.residual * (current.x - previous.x) / rise;
    if x.is_finite() {
        Ok(x)
    } else {
        Err(Error::ZeroSlope { x: current.x })
    }
}
