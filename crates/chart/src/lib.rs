//! The Moody chart: friction factor against Reynolds number for a family of
//! relative roughness values.
//!
//! [`MoodyChart::compute`] evaluates the curves from a [`ChartConfig`]. With
//! the `plot` feature enabled, [`MoodyChart::show`] draws them on log-log
//! axes in an egui window, optionally with a highlighted point.
//!
//! # Example
//!
//! ```
//! use moody_chart::{ChartConfig, MoodyChart};
//!
//! let chart = MoodyChart::compute(&ChartConfig::default())?;
//! assert_eq!(chart.curves().len(), 20);
//! # Ok::<(), moody_chart::ChartError>(())
//! ```

mod chart;
mod config;
mod logspace;
mod marker;
pub mod ticks;

#[cfg(feature = "plot")]
mod plot;

pub use chart::{ChartError, Highlight, MoodyChart, RoughnessCurve};
pub use config::{ChartConfig, ConfigError, ReSpan, STANDARD_ROUGHNESS, ViewBounds};
pub use logspace::logspace;
pub use marker::Marker;

#[cfg(feature = "plot")]
pub use plot::{DEFAULT_TITLE, ShowConfig};
