//! Moving Average Smoothing

/// Centered moving average for noisy series.
///
/// Windows are truncated at the edges, so output length equals input length.
/// Offered as an explicit preprocessing step; the forecaster never applies
/// it implicitly.
pub fn moving_average(data: &[f64], window_size: usize) -> Vec<f64> {
    let window_size = window_size.max(1);
    let mut result = Vec::with_capacity(data.len());

    for i in 0..data.len() {
        let start = i.saturating_sub(window_size / 2);
        let end = (i + window_size.div_ceil(2)).min(data.len());
        let window = &data[start..end];
        result.push(window.iter().sum::<f64>() / window.len() as f64);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_preserved() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(moving_average(&data, 3).len(), data.len());
    }

    #[test]
    fn test_constant_series_unchanged() {
        let data = vec![7.0; 6];
        assert_eq!(moving_average(&data, 3), data);
    }

    #[test]
    fn test_window_one_is_identity() {
        let data = vec![3.0, 9.0, 1.0];
        assert_eq!(moving_average(&data, 1), data);
    }

    #[test]
    fn test_spike_is_damped() {
        let data = vec![10.0, 10.0, 100.0, 10.0, 10.0];
        let smoothed = moving_average(&data, 3);

        assert!(smoothed[2] < 100.0);
        assert_eq!(smoothed[2], 40.0);
        // Edge windows truncate to two samples
        assert_eq!(smoothed[0], 10.0);
        assert_eq!(smoothed[4], 10.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(moving_average(&[], 3).is_empty());
    }
}
