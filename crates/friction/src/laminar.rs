//! Laminar (Hagen–Poiseuille) friction factor.

use crate::{FrictionFactor, ReynoldsNumber};

/// Returns the laminar friction factor `f = 64/Re`.
///
/// The formula is exact for fully developed laminar flow in a circular pipe
/// and independent of wall roughness.
#[must_use]
pub fn friction_factor(re: ReynoldsNumber) -> FrictionFactor {
    FrictionFactor::new_unchecked(64.0 / re.value())
}
