use std::fmt;

use uom::si::f64::{DynamicViscosity, Length, MassDensity, Velocity};

use crate::{FlowRegime, FrictionError};

/// A Reynolds number, guaranteed finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ReynoldsNumber(f64);

impl ReynoldsNumber {
    /// Creates a validated Reynolds number.
    ///
    /// # Errors
    ///
    /// Returns [`FrictionError::InvalidReynoldsNumber`] if `value` is not
    /// finite or not strictly positive.
    pub fn new(value: f64) -> Result<Self, FrictionError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(FrictionError::InvalidReynoldsNumber { value })
        }
    }

    /// Computes `Re = ρ·V·d / μ` for flow in a pipe.
    ///
    /// `speed` is the mean flow speed and must be positive.
    ///
    /// # Errors
    ///
    /// Returns [`FrictionError::InvalidReynoldsNumber`] if the result is not
    /// finite and strictly positive.
    pub fn from_flow(
        density: MassDensity,
        speed: Velocity,
        diameter: Length,
        viscosity: DynamicViscosity,
    ) -> Result<Self, FrictionError> {
        Self::new((density * speed * diameter / viscosity).value)
    }

    /// Returns the inner value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the flow regime at this Reynolds number.
    #[must_use]
    pub fn regime(self) -> FlowRegime {
        FlowRegime::classify(self)
    }
}

impl fmt::Display for ReynoldsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        dynamic_viscosity::pascal_second, length::meter, mass_density::kilogram_per_cubic_meter,
        velocity::meter_per_second,
    };

    #[test]
    fn accepts_positive_values() {
        let re = ReynoldsNumber::new(2300.0).unwrap();
        assert_relative_eq!(re.value(), 2300.0);
    }

    #[test]
    fn rejects_zero_negative_and_nan() {
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ReynoldsNumber::new(value),
                Err(FrictionError::InvalidReynoldsNumber { .. })
            ));
        }
    }

    #[test]
    fn from_water_flow() {
        // Water at 20 °C in a 5 cm pipe at 2 m/s.
        let re = ReynoldsNumber::from_flow(
            MassDensity::new::<kilogram_per_cubic_meter>(998.2),
            Velocity::new::<meter_per_second>(2.0),
            Length::new::<meter>(0.05),
            DynamicViscosity::new::<pascal_second>(1.002e-3),
        )
        .unwrap();

        assert_relative_eq!(re.value(), 99_620.758_483, max_relative = 1e-9);
        assert_eq!(re.regime(), FlowRegime::Turbulent);
    }

    #[test]
    fn from_flow_rejects_stagnant_fluid() {
        let result = ReynoldsNumber::from_flow(
            MassDensity::new::<kilogram_per_cubic_meter>(998.2),
            Velocity::new::<meter_per_second>(0.0),
            Length::new::<meter>(0.05),
            DynamicViscosity::new::<pascal_second>(1.002e-3),
        );
        assert!(matches!(
            result,
            Err(FrictionError::InvalidReynoldsNumber { .. })
        ));
    }
}
