//! Peer multiple averaging with plausibility filtering and outlier trimming

use super::types::SampleSummary;

/// Keep finite values in the open interval `(0, ceiling)`.
pub fn plausible(values: impl IntoIterator<Item = Option<f64>>, ceiling: f64) -> Vec<f64> {
    values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite() && *v > 0.0 && *v < ceiling)
        .collect()
}

/// Population mean and standard deviation. `None` for an empty slice.
pub fn mean_and_std_dev(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some((mean, variance.sqrt()))
}

/// Average of `values` after dropping anything more than `sigmas` standard
/// deviations from the mean.
///
/// Falls back to the untrimmed mean when nothing survives trimming, and to 0
/// for an empty sample.
pub fn trimmed_mean(values: &[f64], sigmas: f64) -> SampleSummary {
    let Some((mean, std_dev)) = mean_and_std_dev(values) else {
        return SampleSummary::default();
    };

    let band = sigmas * std_dev;
    let retained: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| (v - mean).abs() <= band)
        .collect();

    if retained.is_empty() {
        return SampleSummary {
            valid: values.len(),
            retained: 0,
            fell_back: true,
            mean,
        };
    }

    SampleSummary {
        valid: values.len(),
        retained: retained.len(),
        fell_back: false,
        mean: retained.iter().sum::<f64>() / retained.len() as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_plausible_filters_range_and_missing() {
        let raw = [
            Some(14.2),
            None,
            Some(0.0),
            Some(-3.0),
            Some(100.0),
            Some(99.9),
            Some(f64::NAN),
            Some(f64::INFINITY),
        ];
        assert_eq!(plausible(raw, 100.0), vec![14.2, 99.9]);
    }

    #[test]
    fn test_mean_and_std_dev() {
        let (mean, sd) = mean_and_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!(close(mean, 5.0));
        assert!(close(sd, 2.0));
        assert!(mean_and_std_dev(&[]).is_none());
    }

    #[test]
    fn test_empty_sample_averages_to_zero() {
        let summary = trimmed_mean(&[], 2.0);
        assert_eq!(summary.mean, 0.0);
        assert!(summary.is_empty());
        assert!(!summary.fell_back);
    }

    #[test]
    fn test_outlier_is_trimmed() {
        // Ten tight values and one far away: the far one sits beyond 2σ.
        let mut values = vec![10.0; 10];
        values.push(60.0);
        let summary = trimmed_mean(&values, 2.0);
        assert_eq!(summary.valid, 11);
        assert_eq!(summary.retained, 10);
        assert_eq!(summary.trimmed(), 1);
        assert!(close(summary.mean, 10.0));
    }

    #[test]
    fn test_identical_values_are_all_retained() {
        let summary = trimmed_mean(&[1.5, 1.5, 1.5], 2.0);
        assert_eq!(summary.retained, 3);
        assert!(close(summary.mean, 1.5));
    }

    #[test]
    fn test_fallback_to_untrimmed_mean() {
        // A zero-width band with spread values keeps nothing.
        let summary = trimmed_mean(&[1.0, 3.0], 0.0);
        assert!(summary.fell_back);
        assert_eq!(summary.retained, 0);
        assert!(close(summary.mean, 2.0));
    }
}
