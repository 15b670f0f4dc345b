//! Bankroll variance simulation.
//!
//! Results per block of 100 hands are modelled as independent draws from a
//! normal distribution with the player's win rate as the mean and their
//! standard deviation as the spread, both in big blinds per 100 hands.
//! Summing the blocks gives one bankroll trajectory; many trajectories show
//! how far luck can pull a winning player away from their expectation.
//!
//! # Example
//!
//! ```
//! use poker_primer::variance::{simulate_bankroll, BankrollSimRequest};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let request = BankrollSimRequest {
//!     win_rate_per_100: 5.0,
//!     std_dev_per_100: 80.0,
//!     total_hands: 10_000,
//!     trial_count: 20,
//! };
//! let result = simulate_bankroll(&request, &mut StdRng::seed_from_u64(7)).unwrap();
//! assert_eq!(20, result.trials.len());
//! assert_eq!(101, result.trials[0].len());
//! ```

use thiserror::Error;

mod simulator;
pub use self::simulator::{simulate_bankroll, BankrollSimResult, BankrollTrial};

mod summary;
pub use self::summary::{histogram, BankrollSummary, HistogramBin, DEFAULT_HISTOGRAM_BINS};

/// Hands in each simulated block.
pub const HANDS_PER_PERIOD: u32 = 100;

/// Errors that can occur while simulating bankrolls.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VarianceError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unable to build the per block result distribution: {0}")]
    Distribution(String),
}

/// Result type for variance simulations.
pub type Result<T> = std::result::Result<T, VarianceError>;

/// Parameters for a bankroll simulation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BankrollSimRequest {
    /// Expected big blinds won per 100 hands.
    pub win_rate_per_100: f64,
    /// Standard deviation in big blinds per 100 hands. Must be positive.
    pub std_dev_per_100: f64,
    /// Hands per trajectory. At least [`HANDS_PER_PERIOD`]; any remainder
    /// below a full block is not simulated.
    pub total_hands: u32,
    /// Number of independent trajectories.
    pub trial_count: u32,
}

impl Default for BankrollSimRequest {
    fn default() -> Self {
        Self {
            win_rate_per_100: 2.0,
            std_dev_per_100: 90.0,
            total_hands: 5_000,
            trial_count: 50,
        }
    }
}

impl BankrollSimRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the win rate in big blinds per 100 hands
    pub fn win_rate_per_100(mut self, win_rate_per_100: f64) -> Self {
        self.win_rate_per_100 = win_rate_per_100;
        self
    }

    /// Set the standard deviation in big blinds per 100 hands
    pub fn std_dev_per_100(mut self, std_dev_per_100: f64) -> Self {
        self.std_dev_per_100 = std_dev_per_100;
        self
    }

    /// Set the number of hands in each trajectory
    pub fn total_hands(mut self, total_hands: u32) -> Self {
        self.total_hands = total_hands;
        self
    }

    /// Set how many trajectories to simulate
    pub fn trial_count(mut self, trial_count: u32) -> Self {
        self.trial_count = trial_count;
        self
    }

    /// Number of 100 hand blocks in each trajectory.
    pub fn periods(&self) -> usize {
        (self.total_hands / HANDS_PER_PERIOD) as usize
    }

    /// Validate the request
    pub fn validate(&self) -> Result<()> {
        if !self.win_rate_per_100.is_finite() {
            return Err(VarianceError::Validation(
                "win_rate_per_100 must be a finite number".to_string(),
            ));
        }

        if !self.std_dev_per_100.is_finite() || self.std_dev_per_100 <= 0.0 {
            return Err(VarianceError::Validation(format!(
                "std_dev_per_100 must be positive, got {}",
                self.std_dev_per_100
            )));
        }

        if self.total_hands < HANDS_PER_PERIOD {
            return Err(VarianceError::Validation(format!(
                "total_hands must be at least {HANDS_PER_PERIOD}, got {}",
                self.total_hands
            )));
        }

        if self.trial_count == 0 {
            return Err(VarianceError::Validation(
                "trial_count must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Run the simulation with the thread local rng.
    pub fn simulate(&self) -> Result<BankrollSimResult> {
        simulate_bankroll(self, &mut rand::thread_rng())
    }
}
