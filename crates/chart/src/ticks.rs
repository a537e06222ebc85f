//! Axis labels for a chart drawn in log10 coordinates.
//!
//! Both axes are plotted as `log10` of the underlying value, so every
//! function here takes a log-space coordinate and labels it in linear terms.

/// Distance from an integer within which a coordinate counts as a decade.
const DECADE_TOL: f64 = 1e-6;

/// Labels a Reynolds number coordinate.
///
/// Decades are labelled `10^n`. Other coordinates get an empty label so only
/// decades are annotated.
#[must_use]
pub fn reynolds_label(log_re: f64) -> String {
    decade(log_re).map_or_else(String::new, |n| format!("10^{n}"))
}

/// Labels a friction factor coordinate with three decimals.
#[must_use]
pub fn friction_label(log_f: f64) -> String {
    format!("{:.3}", 10_f64.powf(log_f))
}

/// Returns the decade exponents in `[min, max]`, given as linear values.
#[must_use]
pub fn decades(min: f64, max: f64) -> Vec<i32> {
    #[allow(clippy::cast_possible_truncation)]
    let (lo, hi) = (
        (min.log10() - DECADE_TOL).ceil() as i32,
        (max.log10() + DECADE_TOL).floor() as i32,
    );
    (lo..=hi).collect()
}

fn decade(log_value: f64) -> Option<i32> {
    let rounded = log_value.round();
    #[allow(clippy::cast_possible_truncation)]
    ((log_value - rounded).abs() < DECADE_TOL).then_some(rounded as i32)
}
