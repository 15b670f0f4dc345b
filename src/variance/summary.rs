/// Bins used for the final bankroll histogram when none are requested.
pub const DEFAULT_HISTOGRAM_BINS: usize = 22;

/// Summary of where the simulated bankrolls finished.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BankrollSummary {
    /// Trials that finished above 0.
    pub profitable_runs: usize,
    /// Trials that finished below 0. A trial ending exactly at 0 is in
    /// neither count.
    pub losing_runs: usize,
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    pub median: f64,
}

impl BankrollSummary {
    /// Summarise final values. Returns `None` for an empty slice.
    pub fn from_final_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };

        Some(Self {
            profitable_runs: values.iter().filter(|v| **v > 0.0).count(),
            losing_runs: values.iter().filter(|v| **v < 0.0).count(),
            max: sorted[n - 1],
            min: sorted[0],
            mean: values.iter().sum::<f64>() / n as f64,
            median,
        })
    }
}

/// One bar of a histogram over `[lower, upper)`; the last bin also holds
/// its upper edge.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Split `values` into `bins` equal width bins spanning min to max.
///
/// When every value is the same a single bin holds them all. An empty input
/// or `bins == 0` gives no bins.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for value in values {
        let idx = (((value - min) / width) as usize).min(bins - 1);
        result[idx].count += 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_summary_odd_count() {
        let summary = BankrollSummary::from_final_values(&[-20.0, 5.0, 300.0]).unwrap();
        assert_eq!(2, summary.profitable_runs);
        assert_eq!(1, summary.losing_runs);
        assert_eq!(300.0, summary.max);
        assert_eq!(-20.0, summary.min);
        assert_relative_eq!(95.0, summary.mean);
        assert_eq!(5.0, summary.median);
    }

    #[test]
    fn test_summary_even_count_and_zero() {
        let summary = BankrollSummary::from_final_values(&[0.0, 10.0, -4.0, 2.0]).unwrap();
        // The run that broke even counts as neither.
        assert_eq!(2, summary.profitable_runs);
        assert_eq!(1, summary.losing_runs);
        assert_eq!(1.0, summary.median);
        assert_relative_eq!(2.0, summary.mean);
    }

    #[test]
    fn test_summary_empty() {
        assert!(BankrollSummary::from_final_values(&[]).is_none());
    }

    #[test]
    fn test_histogram_counts_every_value() {
        let values: Vec<f64> = (0..100).map(f64::from).collect();
        let bins = histogram(&values, DEFAULT_HISTOGRAM_BINS);
        assert_eq!(DEFAULT_HISTOGRAM_BINS, bins.len());
        assert_eq!(100, bins.iter().map(|b| b.count).sum::<usize>());
        assert_eq!(0.0, bins[0].lower);
        assert_relative_eq!(99.0, bins[DEFAULT_HISTOGRAM_BINS - 1].upper);
    }

    #[test]
    fn test_histogram_max_lands_in_last_bin() {
        let bins = histogram(&[0.0, 10.0], 2);
        assert_eq!(1, bins[0].count);
        assert_eq!(1, bins[1].count);
    }

    #[test]
    fn test_histogram_degenerate() {
        assert!(histogram(&[], 5).is_empty());
        assert!(histogram(&[1.0], 0).is_empty());
        let bins = histogram(&[3.0, 3.0, 3.0], 5);
        assert_eq!(1, bins.len());
        assert_eq!(3, bins[0].count);
    }
}
