/// Returns `count` values spaced evenly in log10 from `10^start_exp` to
/// `10^end_exp`, both ends included.
///
/// A `count` of one yields only the start value; zero yields nothing.
#[must_use]
pub fn logspace(start_exp: f64, end_exp: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![10_f64.powf(start_exp)],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (end_exp - start_exp) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        10_f64.powf(end_exp)
                    } else {
                        #[allow(clippy::cast_precision_loss)]
                        10_f64.powf(start_exp + step * i as f64)
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn decades() {
        let values = logspace(0.0, 3.0, 4);
        assert_eq!(values.len(), 4);
        for (value, expected) in values.iter().zip([1.0, 10.0, 100.0, 1000.0]) {
            assert_relative_eq!(*value, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn endpoints_are_included() {
        let start = 600_f64.log10();
        let end = 2000_f64.log10();
        let values = logspace(start, end, 20);

        assert_eq!(values.len(), 20);
        assert_relative_eq!(values[0], 600.0, max_relative = 1e-12);
        assert_relative_eq!(values[19], 2000.0, max_relative = 1e-12);
    }

    #[test]
    fn constant_ratio_between_neighbours() {
        let values = logspace(4000_f64.log10(), 8.0, 100);
        let ratio = values[1] / values[0];
        for pair in values.windows(2) {
            assert_relative_eq!(pair[1] / pair[0], ratio, max_relative = 1e-9);
        }
    }

    #[test]
    fn degenerate_counts() {
        assert!(logspace(0.0, 1.0, 0).is_empty());
        let single = logspace(2.0, 5.0, 1);
        assert_eq!(single.len(), 1);
        assert_relative_eq!(single[0], 100.0, max_relative = 1e-12);
    }
}
