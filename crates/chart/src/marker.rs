use std::fmt;

use moody_friction::{FlowRegime, ReynoldsNumber};

/// Marker shape for a highlighted point.
///
/// Deterministic points are drawn as circles. Points in the transitional
/// band, whose factor was sampled, are drawn as triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Circle,
    Triangle,
}

impl Marker {
    /// Marker size in points.
    pub const SIZE: f32 = 12.0;

    /// Chooses the marker for a flow regime.
    #[must_use]
    pub fn for_regime(regime: FlowRegime) -> Self {
        if regime.is_deterministic() {
            Self::Circle
        } else {
            Self::Triangle
        }
    }

    /// Chooses the marker for a Reynolds number.
    #[must_use]
    pub fn for_reynolds(re: ReynoldsNumber) -> Self {
        Self::for_regime(re.regime())
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle => f.write_str("circle"),
            Self::Triangle => f.write_str("triangle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(value: f64) -> Marker {
        Marker::for_reynolds(ReynoldsNumber::new(value).unwrap())
    }

    #[test]
    fn circles_outside_transition() {
        assert_eq!(marker(1000.0), Marker::Circle);
        assert_eq!(marker(2000.0), Marker::Circle);
        assert_eq!(marker(4000.0), Marker::Circle);
        assert_eq!(marker(1e7), Marker::Circle);
    }

    #[test]
    fn triangles_inside_transition() {
        assert_eq!(marker(2000.5), Marker::Triangle);
        assert_eq!(marker(3000.0), Marker::Triangle);
        assert_eq!(marker(3999.9), Marker::Triangle);
    }
}
