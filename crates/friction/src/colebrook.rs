//! Colebrook–White friction factor for turbulent flow.
//!
//! The Colebrook equation relates the Darcy friction factor `f` to the
//! Reynolds number and the relative roughness implicitly:
//!
//! ```text
//! 1/√f + 2·log₁₀(ε/(3.7·d) + 2.51/(Re·√f)) = 0
//! ```
//!
//! It is solved with the secant method in the variable `x = 1/√f`, in which
//! the residual is strictly increasing and nearly linear, so the root is
//! unique and convergence takes a handful of iterations.
//!
//! The equation loses its meaning at very low Reynolds numbers (below about
//! 100), where the solve fails with [`FrictionError::Solver`].

use std::convert::Infallible;

use moody_solvers::{
    Equation,
    equation::secant::{self, Status},
};
use tracing::debug;

use crate::{FrictionError, FrictionFactor, RelativeRoughness, ReynoldsNumber};

/// Default seed for the root solve.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.001;

/// Settings for the Colebrook root solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookConfig {
    initial_guess: FrictionFactor,
    solver: secant::Config,
}

impl ColebrookConfig {
    /// Creates a config from a seed friction factor and solver settings.
    #[must_use]
    pub fn new(initial_guess: FrictionFactor, solver: secant::Config) -> Self {
        Self {
            initial_guess,
            solver,
        }
    }

    /// Returns a copy with a different seed friction factor.
    #[must_use]
    pub fn with_initial_guess(self, initial_guess: FrictionFactor) -> Self {
        Self {
            initial_guess,
            ..self
        }
    }

    /// Returns the seed friction factor.
    #[must_use]
    pub fn initial_guess(&self) -> FrictionFactor {
        self.initial_guess
    }

    /// Returns the secant solver settings.
    #[must_use]
    pub fn solver(&self) -> &secant::Config {
        &self.solver
    }
}

impl Default for ColebrookConfig {
    fn default() -> Self {
        Self {
            initial_guess: FrictionFactor::new_unchecked(DEFAULT_INITIAL_GUESS),
            solver: secant::Config::default(),
        }
    }
}

/// The Colebrook equation at a fixed Reynolds number and roughness.
///
/// As an [`Equation`], the solver variable is `x = 1/√f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colebrook {
    reynolds: f64,
    roughness: f64,
}

impl Colebrook {
    #[must_use]
    pub fn new(re: ReynoldsNumber, roughness: RelativeRoughness) -> Self {
        Self {
            reynolds: re.value(),
            roughness: roughness.value(),
        }
    }

    /// Returns the Colebrook residual at a friction factor.
    ///
    /// The residual is zero at the solution; its magnitude measures how far
    /// `f` is from satisfying the equation.
    #[must_use]
    pub fn residual_at(&self, f: FrictionFactor) -> f64 {
        self.residual_x(1.0 / f.value().sqrt())
    }

    fn residual_x(&self, x: f64) -> f64 {
        x - self.right_hand_side(x)
    }

    /// Evaluates `-2·log₁₀(ε/3.7d + 2.51·x/Re)`, which equals `x` at the root.
    fn right_hand_side(&self, x: f64) -> f64 {
        -2.0 * (self.roughness / 3.7 + 2.51 * x / self.reynolds).log10()
    }
}

impl Equation for Colebrook {
    type Error = Infallible;

    fn residual(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self.residual_x(x))
    }
}

/// Solves the Colebrook equation for the Darcy friction factor.
///
/// The secant solve starts at the configured seed and at one fixed-point
/// step of the Colebrook relation from that seed. For any physical input the
/// two points bracket the root.
///
/// # Errors
///
/// Returns [`FrictionError::RootFindDidNotConverge`] if the solver stops
/// before meeting its tolerances, or [`FrictionError::Solver`] if it fails.
pub fn friction_factor(
    re: ReynoldsNumber,
    roughness: RelativeRoughness,
    config: &ColebrookConfig,
) -> Result<FrictionFactor, FrictionError> {
    let equation = Colebrook::new(re, roughness);

    let x0 = 1.0 / config.initial_guess().value().sqrt();
    let x1 = equation.right_hand_side(x0);

    #[allow(clippy::float_cmp)]
    if x1 == x0 {
        return Ok(config.initial_guess());
    }

    let solution = secant::solve_unobserved(&equation, [x0, x1], config.solver())?;

    if solution.status != Status::Converged || solution.x <= 0.0 {
        return Err(FrictionError::RootFindDidNotConverge {
            reynolds: re.value(),
            roughness: roughness.value(),
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    let f = 1.0 / (solution.x * solution.x);
    debug!(
        re = re.value(),
        roughness = roughness.value(),
        f,
        iters = solution.iters,
        "solved Colebrook"
    );

    Ok(FrictionFactor::new_unchecked(f))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn solve(re: f64, roughness: f64) -> FrictionFactor {
        friction_factor(
            ReynoldsNumber::new(re).unwrap(),
            RelativeRoughness::new(roughness).unwrap(),
            &ColebrookConfig::default(),
        )
        .expect("should converge")
    }

    #[test]
    fn smooth_pipe_at_turbulent_onset() {
        assert_relative_eq!(solve(4000.0, 0.0).value(), 0.039_907, max_relative = 1e-4);
    }

    #[test]
    fn commercial_pipe_values() {
        assert_relative_eq!(solve(1.0e4, 4.0e-4).value(), 0.031_494, max_relative = 1e-4);
        assert_relative_eq!(solve(1.0e6, 4.0e-4).value(), 0.016_488, max_relative = 1e-4);
        assert_relative_eq!(solve(1.0e5, 1.0e-3).value(), 0.022_175, max_relative = 1e-4);
    }

    #[test]
    fn fully_rough_limit() {
        // At very high Re the factor depends on roughness alone:
        // 1/√f = -2·log₁₀(ε/3.7d).
        let f = solve(1.0e8, 0.05);
        let rough_limit = (-2.0 * (0.05_f64 / 3.7).log10()).powi(-2);
        assert_relative_eq!(f.value(), rough_limit, max_relative = 1e-3);
    }

    #[test]
    fn solution_satisfies_equation() {
        let re = ReynoldsNumber::new(2.5e5).unwrap();
        let rr = RelativeRoughness::new(2.0e-3).unwrap();
        let f = friction_factor(re, rr, &ColebrookConfig::default()).unwrap();

        assert!(Colebrook::new(re, rr).residual_at(f).abs() < 1e-10);
    }

    #[test]
    fn seed_does_not_change_root() {
        let re = ReynoldsNumber::new(3000.0).unwrap();
        let rr = RelativeRoughness::SMOOTH;

        let chart_seed = ColebrookConfig::default();
        let point_seed = chart_seed.with_initial_guess(FrictionFactor::new(0.004).unwrap());

        let a = friction_factor(re, rr, &chart_seed).unwrap();
        let b = friction_factor(re, rr, &point_seed).unwrap();
        assert_relative_eq!(a.value(), b.value(), max_relative = 1e-12);
    }

    #[test]
    fn iteration_limit_is_reported() {
        let solver = secant::Config::new(1, 0.0, 0.0, 0.0).unwrap();
        let config = ColebrookConfig::new(FrictionFactor::new(0.001).unwrap(), solver);

        let result = friction_factor(
            ReynoldsNumber::new(1.0e5).unwrap(),
            RelativeRoughness::SMOOTH,
            &config,
        );

        assert!(matches!(
            result,
            Err(FrictionError::RootFindDidNotConverge { iters: 1, .. })
        ));
    }

    #[test]
    fn very_low_reynolds_fails() {
        let result = friction_factor(
            ReynoldsNumber::new(10.0).unwrap(),
            RelativeRoughness::SMOOTH,
            &ColebrookConfig::default(),
        );

        assert!(matches!(result, Err(FrictionError::Solver(_))));
    }
}
