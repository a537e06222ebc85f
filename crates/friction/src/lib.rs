//! Darcy friction factors for pipe flow.
//!
//! The friction factor depends on the Reynolds number and the relative
//! roughness of the pipe wall. This crate provides:
//!
//! - [`ReynoldsNumber`], [`RelativeRoughness`], [`FrictionFactor`]: validated
//!   scalar types
//! - [`FlowRegime`]: laminar, transitional, or turbulent, derived from Re
//! - [`laminar`]: the closed-form `f = 64/Re`
//! - [`colebrook`]: the implicit Colebrook equation, solved numerically
//! - [`FrictionModel`]: correlation selection and regime dispatch
//! - [`PointClassifier`]: one representative factor per point, sampling the
//!   transitional band from a blended normal distribution
//! - [`darcy`]: head loss and pressure drop from a friction factor
//!
//! # Example
//!
//! ```
//! use moody_friction::{FrictionModel, RelativeRoughness, ReynoldsNumber};
//!
//! let model = FrictionModel::default();
//! let re = ReynoldsNumber::new(1.0e6)?;
//! let roughness = RelativeRoughness::new(4.0e-4)?;
//!
//! let f = model.turbulent(re, roughness)?;
//! assert!((f.value() - 0.0165).abs() < 1e-3);
//! # Ok::<(), moody_friction::FrictionError>(())
//! ```

mod classifier;
pub mod colebrook;
pub mod darcy;
mod error;
mod factor;
pub mod laminar;
mod model;
mod regime;
mod reynolds;
mod roughness;

pub use classifier::{PointClassifier, PointEvaluation, TRANSITION_SPREAD};
pub use colebrook::ColebrookConfig;
pub use error::FrictionError;
pub use factor::FrictionFactor;
pub use model::{Correlation, FrictionModel, RegimeFactor};
pub use regime::{FlowRegime, LAMINAR_LIMIT, TURBULENT_ONSET};
pub use reynolds::ReynoldsNumber;
pub use roughness::RelativeRoughness;
