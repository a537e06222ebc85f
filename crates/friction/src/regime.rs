use std::fmt;

use crate::ReynoldsNumber;

/// Highest Reynolds number treated as laminar.
pub const LAMINAR_LIMIT: f64 = 2000.0;

/// Lowest Reynolds number treated as fully turbulent.
pub const TURBULENT_ONSET: f64 = 4000.0;

/// Flow regime, derived from the Reynolds number alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    /// `Re ≤ 2000`.
    Laminar,
    /// `2000 < Re < 4000`.
    Transitional,
    /// `Re ≥ 4000`.
    Turbulent,
}

impl FlowRegime {
    /// Classifies a Reynolds number.
    #[must_use]
    pub fn classify(re: ReynoldsNumber) -> Self {
        let re = re.value();
        if re <= LAMINAR_LIMIT {
            Self::Laminar
        } else if re >= TURBULENT_ONSET {
            Self::Turbulent
        } else {
            Self::Transitional
        }
    }

    /// Returns true if a point in this regime has a single friction factor.
    ///
    /// Transitional points are sampled, so repeated evaluations differ.
    #[must_use]
    pub fn is_deterministic(self) -> bool {
        !matches!(self, Self::Transitional)
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Laminar => "laminar",
            Self::Transitional => "transitional",
            Self::Turbulent => "turbulent",
        };
        f.write_str(name)
    }
}
