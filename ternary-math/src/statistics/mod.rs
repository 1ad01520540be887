use libm::sqrt;

/// Summary statistics for a set of field values, used to pick color limits
/// and to report on a heatmap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    pub min: f64,
    pub max: f64,
    /// The arithmetic mean of the values.
    pub mean: f64,
    /// The population standard deviation.
    pub std_dev: f64,
}

/// Calculates min, max, mean and standard deviation for a slice of values.
///
/// NaN entries are ignored by `min`/`max` but poison `mean` and `std_dev`.
pub fn compute_stats(values: &[f64]) -> FieldStats {
    if values.is_empty() {
        return FieldStats { min: 0.0, max: 0.0, mean: 0.0, std_dev: 0.0 };
    }

    let len = values.len() as f64;

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mean = values.iter().sum::<f64>() / len;

    // Variance is the average of the squared differences from the mean.
    let variance = values.iter()
        .map(|value| {
            let diff = mean - value;
            diff * diff
        })
        .sum::<f64>() / len;

    FieldStats {
        min,
        max,
        mean,
        std_dev: sqrt(variance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate alloc;
    use alloc::vec;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_compute_stats_empty() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, FieldStats { min: 0.0, max: 0.0, mean: 0.0, std_dev: 0.0 });
    }

    #[test]
    fn test_compute_stats_single_value() {
        let stats = compute_stats(&[5.0]);
        assert_eq!(stats.min, 5.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_compute_stats_simple_range() {
        // Mean 5, variance 32/8 = 4, std dev 2
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = compute_stats(&values);

        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert!((stats.mean - 5.0).abs() < EPSILON);
        assert!((stats.std_dev - 2.0).abs() < EPSILON);
    }
}
