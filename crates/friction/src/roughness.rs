use std::fmt;

use uom::si::f64::Length;

use crate::FrictionError;

/// Relative roughness of a pipe wall, `ε/d`.
///
/// Guaranteed finite and non-negative. Values above the range of the Moody
/// chart are accepted because the Colebrook equation remains well defined.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RelativeRoughness(f64);

impl RelativeRoughness {
    /// A hydraulically smooth pipe.
    pub const SMOOTH: Self = Self(0.0);

    /// Upper end of the roughness range covered by the Moody chart.
    pub const CHARTED_MAX: f64 = 0.05;

    /// Creates a validated relative roughness.
    ///
    /// # Errors
    ///
    /// Returns [`FrictionError::InvalidRoughness`] if `value` is negative or
    /// not finite.
    pub fn new(value: f64) -> Result<Self, FrictionError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(FrictionError::InvalidRoughness { value })
        }
    }

    /// Computes `ε/d` from an absolute wall roughness and inner diameter.
    ///
    /// # Errors
    ///
    /// Returns [`FrictionError::InvalidRoughness`] if the ratio is negative
    /// or not finite, which includes a zero diameter.
    pub fn from_pipe(roughness: Length, diameter: Length) -> Result<Self, FrictionError> {
        Self::new((roughness / diameter).value)
    }

    /// Returns the inner value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if the value lies within `[0, 0.05]`.
    #[must_use]
    pub fn is_charted(self) -> bool {
        self.0 <= Self::CHARTED_MAX
    }
}

impl Default for RelativeRoughness {
    fn default() -> Self {
        Self::SMOOTH
    }
}

impl fmt::Display for RelativeRoughness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
