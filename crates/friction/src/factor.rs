use std::fmt;

use crate::FrictionError;

/// A Darcy friction factor, guaranteed finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FrictionFactor(f64);

impl FrictionFactor {
    /// Creates a validated friction factor.
    ///
    /// # Errors
    ///
    /// Returns [`FrictionError::InvalidFrictionFactor`] if `value` is not
    /// finite or not strictly positive.
    pub fn new(value: f64) -> Result<Self, FrictionError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(FrictionError::InvalidFrictionFactor { value })
        }
    }

    /// Wraps a value computed from already validated inputs.
    pub(crate) fn new_unchecked(value: f64) -> Self {
        Self(value)
    }

    /// Returns the inner value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the arithmetic mean of two friction factors.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self(0.5 * (self.0 + other.0))
    }
}

impl fmt::Display for FrictionFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_non_positive() {
        for value in [0.0, -0.02, f64::NAN] {
            assert!(matches!(
                FrictionFactor::new(value),
                Err(FrictionError::InvalidFrictionFactor { .. })
            ));
        }
    }

    #[test]
    fn midpoint_is_mean() {
        let a = FrictionFactor::new(0.02).unwrap();
        let b = FrictionFactor::new(0.04).unwrap();
        assert_relative_eq!(a.midpoint(b).value(), 0.03);
    }
}
