//! Darcy–Weisbach relations that consume a friction factor.
//!
//! ```text
//! h  = f · (L/d) · V² / (2g)
//! Δp = f · (L/d) · ρ·V² / 2
//! ```

use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Length, MassDensity, Pressure, Velocity},
};

use crate::FrictionFactor;

/// Standard gravity in m/s².
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Returns the frictional head loss over a straight pipe run.
#[must_use]
pub fn head_loss(f: FrictionFactor, length: Length, diameter: Length, speed: Velocity) -> Length {
    let g = Acceleration::new::<meter_per_second_squared>(STANDARD_GRAVITY);
    speed * speed / (g * 2.0) * (f.value() * (length / diameter).value)
}

/// Returns the frictional pressure drop over a straight pipe run.
#[must_use]
pub fn pressure_drop(
    f: FrictionFactor,
    length: Length,
    diameter: Length,
    density: MassDensity,
    speed: Velocity,
) -> Pressure {
    density * speed * speed * (0.5 * f.value() * (length / diameter).value)
}
