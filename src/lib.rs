//! `poker_primer` is the computation behind an interactive poker teaching
//! book. Each chapter of the book is a page of charts and text that is
//! recomputed whenever the reader moves a slider; this crate is everything
//! behind those charts.
//!
//! - [`equity`]: turn a count of outs into a chance of hitting, using the
//!   rule of 4 and 2, the exact odds or a monte carlo deal. Also the "count
//!   the outs" quiz.
//! - [`variance`]: simulate many bankroll trajectories for a win rate and
//!   standard deviation and summarise where they end.
//! - [`holdem`]: starting hand classes, the pre-computed starting hand
//!   table, position metrics, flop scenarios, range narrowing and bluff
//!   frequencies.
//! - [`format`]: the sentences shown next to the numbers.
//! - [`lesson`]: chapter routing and the recompute on change dispatcher.
//!
//! # Example
//!
//! ```
//! use poker_primer::equity::{CardsToCome, EquityEstimator, EstimateMethod, OutsQuery};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let query = OutsQuery::new(9, 1, EstimateMethod::Exact).unwrap();
//! let estimate = EquityEstimator::default().estimate(&query, &mut StdRng::seed_from_u64(1));
//! assert!((estimate.probability_percent - 19.57).abs() < 0.01);
//! ```

/// Cards, draw detection and errors shared by every module.
pub mod core;

/// Outs to equity estimates and the outs quiz.
pub mod equity;

/// Bankroll variance simulation.
pub mod variance;

/// Starting hands, positions, ranges and bluffing.
pub mod holdem;

/// Text helpers.
pub mod format;

/// Chapters and the recompute dispatcher.
pub mod lesson;
