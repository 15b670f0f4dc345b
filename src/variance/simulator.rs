use rand::{distributions::Distribution, rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use statrs::distribution::Normal;
use tracing::{event, instrument, Level};

use super::summary::{histogram, BankrollSummary, HistogramBin};
use super::{BankrollSimRequest, Result, VarianceError, HANDS_PER_PERIOD};

/// One simulated bankroll: the running net result in big blinds after every
/// block of 100 hands, starting from 0 at hand 0.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BankrollTrial {
    points: Vec<f64>,
}

impl BankrollTrial {
    /// Walk `periods` blocks drawing each block's result from `per_block`.
    fn simulate<R: Rng + ?Sized>(per_block: &Normal, periods: usize, rng: &mut R) -> Self {
        let mut points = Vec::with_capacity(periods + 1);
        points.push(0.0);
        let mut total = 0.0;
        for _ in 0..periods {
            total += per_block.sample(rng);
            points.push(total);
        }
        Self { points }
    }

    /// Cumulative results, one per block boundary, starting at 0.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Net result after the last block.
    pub fn final_value(&self) -> f64 {
        self.points.last().copied().unwrap_or(0.0)
    }

    /// Largest peak to trough fall along the trajectory, as a positive
    /// number of big blinds.
    pub fn max_drawdown(&self) -> f64 {
        let mut peak = f64::NEG_INFINITY;
        let mut worst = 0.0_f64;
        for &point in &self.points {
            peak = peak.max(point);
            worst = worst.max(peak - point);
        }
        worst
    }
}

/// Every trajectory of a simulation plus the distribution of where they
/// ended.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BankrollSimResult {
    /// The request that produced this result.
    pub request: BankrollSimRequest,
    pub trials: Vec<BankrollTrial>,
    /// `final_values[i]` is the last point of `trials[i]`.
    pub final_values: Vec<f64>,
    pub summary: BankrollSummary,
}

impl BankrollSimResult {
    /// Hands played at each trajectory point: 0, 100, 200, ...
    pub fn hands_axis(&self) -> Vec<u32> {
        (0..=self.request.periods() as u32)
            .map(|block| block * HANDS_PER_PERIOD)
            .collect()
    }

    /// Histogram of the final values.
    pub fn final_value_histogram(&self, bins: usize) -> Vec<HistogramBin> {
        histogram(&self.final_values, bins)
    }
}

/// Simulate `request.trial_count` independent bankroll trajectories.
///
/// Each trial gets its own generator seeded from `rng` before any sampling
/// starts, so trials can run on the rayon pool and a seeded `rng` still
/// produces the same trajectories every time.
///
/// # Errors
///
/// Returns [`VarianceError::Validation`] when the request fails
/// [`BankrollSimRequest::validate`]; nothing is simulated in that case.
#[instrument(level = "debug", skip(rng))]
pub fn simulate_bankroll<R: Rng + ?Sized>(
    request: &BankrollSimRequest,
    rng: &mut R,
) -> Result<BankrollSimResult> {
    request.validate()?;

    let per_block = Normal::new(request.win_rate_per_100, request.std_dev_per_100)
        .map_err(|e| VarianceError::Distribution(e.to_string()))?;
    let periods = request.periods();

    let seeds: Vec<u64> = (0..request.trial_count).map(|_| rng.gen()).collect();
    let trials: Vec<BankrollTrial> = seeds
        .into_par_iter()
        .map(|seed| {
            let mut trial_rng = StdRng::seed_from_u64(seed);
            BankrollTrial::simulate(&per_block, periods, &mut trial_rng)
        })
        .collect();

    let final_values: Vec<f64> = trials.iter().map(BankrollTrial::final_value).collect();
    let summary = BankrollSummary::from_final_values(&final_values).ok_or_else(|| {
        VarianceError::Validation("no trials were simulated".to_string())
    })?;

    event!(
        Level::INFO,
        trials = trials.len(),
        periods,
        profitable_runs = summary.profitable_runs,
        losing_runs = summary.losing_runs,
        mean = summary.mean,
        "Simulated bankrolls"
    );

    Ok(BankrollSimResult {
        request: *request,
        trials,
        final_values,
        summary,
    })
}
