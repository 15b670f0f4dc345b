//! Outs to equity estimates.
//!
//! Given how many unseen cards improve a hand (outs) and how many community
//! cards are still to come, estimate the chance of hitting. Three methods are
//! offered because comparing them is the lesson:
//!
//! - [`EstimateMethod::Rule`] the "rule of 4 and 2" players do in their head.
//! - [`EstimateMethod::Exact`] the closed form odds over the unseen cards.
//! - [`EstimateMethod::MonteCarlo`] dealing the run-out many times and
//!   counting hits.
//!
//! # Example
//!
//! ```
//! use poker_primer::equity::{estimate_equity, CardsToCome, EstimateMethod};
//!
//! let estimate = estimate_equity(8, CardsToCome::Two, EstimateMethod::Rule);
//! assert_eq!(estimate.probability_percent, 32.0);
//! ```

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::{event, instrument};

use crate::core::{PrimerError, Result};

mod monte_carlo;
pub use self::monte_carlo::sample_hit_percentage;

mod quiz;
pub use self::quiz::{count_outs, Draw, OutsCount, OutsQuiz, QuizFeedback};

/// Largest outs count the lessons accept.
pub const MAX_OUTS: u8 = 20;
/// Monte carlo run-outs dealt when no trial count is configured.
pub const DEFAULT_MONTE_CARLO_TRIALS: usize = 20_000;

/// Unseen cards after the flop: 52 minus two hole cards and three board cards.
const UNSEEN_ON_FLOP: usize = 47;
/// Unseen cards once the turn is known.
const UNSEEN_ON_TURN: usize = 46;

/// How many community cards are still to be dealt.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardsToCome {
    /// Only the river (or only the turn) is left.
    One,
    /// Turn and river are both left.
    Two,
}

impl CardsToCome {
    pub fn count(self) -> usize {
        match self {
            CardsToCome::One => 1,
            CardsToCome::Two => 2,
        }
    }

    /// Size of the unseen card pool the next card is dealt from.
    pub fn unseen_pool(self) -> usize {
        match self {
            CardsToCome::One => UNSEEN_ON_TURN,
            CardsToCome::Two => UNSEEN_ON_FLOP,
        }
    }

    /// Percentage points per out in the rule of 4 and 2.
    pub fn rule_multiplier(self) -> f64 {
        match self {
            CardsToCome::One => 2.0,
            CardsToCome::Two => 4.0,
        }
    }
}

impl TryFrom<u8> for CardsToCome {
    type Error = PrimerError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(CardsToCome::One),
            2 => Ok(CardsToCome::Two),
            other => Err(PrimerError::InvalidCardsToCome(other)),
        }
    }
}

impl From<CardsToCome> for u8 {
    fn from(value: CardsToCome) -> Self {
        value.count() as u8
    }
}

/// The method used to turn outs into a win percentage.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EstimateMethod {
    /// Rule of 4 and 2.
    #[default]
    Rule,
    /// Closed form odds over the unseen card pool.
    Exact,
    /// Sampled run-outs.
    MonteCarlo,
}

impl EstimateMethod {
    pub fn all() -> [EstimateMethod; 3] {
        [
            EstimateMethod::Rule,
            EstimateMethod::Exact,
            EstimateMethod::MonteCarlo,
        ]
    }

    /// Label shown on the method selector.
    pub fn label(self) -> &'static str {
        match self {
            EstimateMethod::Rule => "Rule of 4 and 2",
            EstimateMethod::Exact => "Exact Formula",
            EstimateMethod::MonteCarlo => "Monte Carlo Simulation",
        }
    }
}

impl fmt::Display for EstimateMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EstimateMethod {
    type Err = PrimerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rule" | "rule-of-4-and-2" => Ok(EstimateMethod::Rule),
            "exact" => Ok(EstimateMethod::Exact),
            "monte" | "montecarlo" | "monte-carlo" | "monte_carlo" => {
                Ok(EstimateMethod::MonteCarlo)
            }
            _ => Err(PrimerError::UnknownMethod(s.to_string())),
        }
    }
}

/// A simplified draw: outs, cards to come and the estimate method.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutsQuery {
    pub outs: u8,
    pub cards_to_come: CardsToCome,
    pub method: EstimateMethod,
}

impl OutsQuery {
    /// Build a query from raw control values, rejecting anything outside
    /// what the outs slider and the cards radio can produce.
    pub fn new(outs: u8, cards_to_come: u8, method: EstimateMethod) -> Result<Self> {
        if outs > MAX_OUTS {
            return Err(PrimerError::InvalidOuts {
                outs,
                max: MAX_OUTS,
            });
        }
        Ok(Self {
            outs,
            cards_to_come: CardsToCome::try_from(cards_to_come)?,
            method,
        })
    }
}

impl Default for OutsQuery {
    /// Eight outs, two cards to come, rule of 4 and 2.
    fn default() -> Self {
        Self {
            outs: 8,
            cards_to_come: CardsToCome::Two,
            method: EstimateMethod::Rule,
        }
    }
}

/// Estimated chance of hitting, ready to render.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EquityEstimate {
    /// Win probability in percent, always within `[0, 100]`.
    pub probability_percent: f64,
    pub method: EstimateMethod,
    /// One line telling the learner what the method does.
    pub method_description: String,
}

/// Rule of 4 and 2, already in percent. Inexact for big draws.
pub fn rule_of_four_and_two(outs: u8, cards_to_come: CardsToCome) -> f64 {
    f64::from(outs) * cards_to_come.rule_multiplier()
}

/// Exact chance of at least one out arriving, in percent.
///
/// With two cards to come this is one minus the chance of missing twice in a
/// row, dealing from 47 then 46 unseen cards. With one card to come the out
/// is dealt from the 46 cards left once the turn is known. Not clamped.
pub fn exact_percentage(outs: u8, cards_to_come: CardsToCome) -> f64 {
    let outs = f64::from(outs);
    let probability = match cards_to_come {
        CardsToCome::Two => {
            let flop = UNSEEN_ON_FLOP as f64;
            let turn = UNSEEN_ON_TURN as f64;
            1.0 - ((flop - outs) / flop) * ((turn - outs) / turn)
        }
        CardsToCome::One => outs / UNSEEN_ON_TURN as f64,
    };
    probability * 100.0
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Turns [`OutsQuery`] values into [`EquityEstimate`]s.
///
/// The only knob is how many run-outs the monte carlo method deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquityEstimator {
    monte_carlo_trials: usize,
}

impl Default for EquityEstimator {
    fn default() -> Self {
        Self {
            monte_carlo_trials: DEFAULT_MONTE_CARLO_TRIALS,
        }
    }
}

impl EquityEstimator {
    /// Create an estimator dealing `monte_carlo_trials` run-outs per monte
    /// carlo estimate.
    pub fn new(monte_carlo_trials: usize) -> Result<Self> {
        if monte_carlo_trials == 0 {
            return Err(PrimerError::InvalidTrialCount);
        }
        Ok(Self { monte_carlo_trials })
    }

    pub fn monte_carlo_trials(&self) -> usize {
        self.monte_carlo_trials
    }

    /// Estimate the win percentage for `query`.
    ///
    /// Never fails. Out of range queries (for example more outs than unseen
    /// cards) can push a formula past 100% or below 0%; the result is clamped.
    #[instrument(level = "debug", skip(self, rng))]
    pub fn estimate<R: Rng + ?Sized>(&self, query: &OutsQuery, rng: &mut R) -> EquityEstimate {
        let (raw, method_description) = match query.method {
            EstimateMethod::Rule => (
                rule_of_four_and_two(query.outs, query.cards_to_come),
                "Rule of 4 and 2: fast estimate.".to_string(),
            ),
            EstimateMethod::Exact => (
                exact_percentage(query.outs, query.cards_to_come),
                "Exact odds from probability theory.".to_string(),
            ),
            EstimateMethod::MonteCarlo => (
                sample_hit_percentage(
                    query.outs,
                    query.cards_to_come,
                    self.monte_carlo_trials,
                    rng,
                ),
                format!(
                    "Monte Carlo simulation: {} dealt run-outs.",
                    self.monte_carlo_trials
                ),
            ),
        };

        let probability_percent = clamp_percent(raw);
        event!(
            tracing::Level::DEBUG,
            raw,
            probability_percent,
            "Estimated equity"
        );

        EquityEstimate {
            probability_percent,
            method: query.method,
            method_description,
        }
    }
}

/// Estimate equity with the default estimator and the thread local rng.
pub fn estimate_equity(
    outs: u8,
    cards_to_come: CardsToCome,
    method: EstimateMethod,
) -> EquityEstimate {
    let query = OutsQuery {
        outs,
        cards_to_come,
        method,
    };
    EquityEstimator::default().estimate(&query, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_rule_of_four_and_two() {
        assert_eq!(
            32.0,
            estimate_equity(8, CardsToCome::Two, EstimateMethod::Rule).probability_percent
        );
        assert_eq!(
            16.0,
            estimate_equity(8, CardsToCome::One, EstimateMethod::Rule).probability_percent
        );
    }

    #[test]
    fn test_zero_outs_is_zero_for_every_method() {
        for method in EstimateMethod::all() {
            for cards in [CardsToCome::One, CardsToCome::Two] {
                let estimate = estimate_equity(0, cards, method);
                assert_eq!(0.0, estimate.probability_percent, "{method:?} {cards:?}");
            }
        }
    }

    #[test]
    fn test_always_within_percent_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let estimator = EquityEstimator::new(2_000).unwrap();
        for outs in 0..=MAX_OUTS {
            for cards in [CardsToCome::One, CardsToCome::Two] {
                for method in EstimateMethod::all() {
                    let query = OutsQuery {
                        outs,
                        cards_to_come: cards,
                        method,
                    };
                    let p = estimator.estimate(&query, &mut rng).probability_percent;
                    assert!((0.0..=100.0).contains(&p), "{query:?} gave {p}");
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_outs_are_clamped() {
        // 30 outs by the rule is 120%
        let estimate = estimate_equity(30, CardsToCome::Two, EstimateMethod::Rule);
        assert_eq!(100.0, estimate.probability_percent);

        // More outs than unseen cards pushes the exact formulas out of range.
        let estimate = estimate_equity(60, CardsToCome::One, EstimateMethod::Exact);
        assert_eq!(100.0, estimate.probability_percent);
        let estimate = estimate_equity(100, CardsToCome::Two, EstimateMethod::Exact);
        assert_eq!(0.0, estimate.probability_percent);

        let estimate = estimate_equity(60, CardsToCome::One, EstimateMethod::MonteCarlo);
        assert_eq!(100.0, estimate.probability_percent);
    }

    #[test]
    fn test_exact_values() {
        // One card to come is dealt from the 46 unseen cards.
        assert_abs_diff_eq!(
            9.0 / 46.0 * 100.0,
            exact_percentage(9, CardsToCome::One),
            epsilon = 1e-9
        );
        // Nine outs twice: 1 - 38/47 * 37/46
        assert_abs_diff_eq!(
            (1.0 - (38.0 / 47.0) * (37.0 / 46.0)) * 100.0,
            exact_percentage(9, CardsToCome::Two),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_flush_and_straight_draw_exact() {
        // Thirteen outs on the flop: 1 - 34/47 * 33/46 is about 48.1%,
        // a little under the 52% the rule of 4 gives.
        let exact = estimate_equity(13, CardsToCome::Two, EstimateMethod::Exact);
        assert_abs_diff_eq!(48.1, exact.probability_percent, epsilon = 0.05);

        let rule = estimate_equity(13, CardsToCome::Two, EstimateMethod::Rule);
        assert_eq!(52.0, rule.probability_percent);
        assert!((rule.probability_percent - exact.probability_percent).abs() < 8.0);
    }

    #[test_log::test]
    fn test_monte_carlo_converges_to_exact() {
        let mut rng = StdRng::seed_from_u64(420);
        let estimator = EquityEstimator::default();
        for outs in [1, 4, 8, 9, 13, 15, 20] {
            for cards in [CardsToCome::One, CardsToCome::Two] {
                let query = OutsQuery {
                    outs,
                    cards_to_come: cards,
                    method: EstimateMethod::MonteCarlo,
                };
                let sampled = estimator.estimate(&query, &mut rng).probability_percent;
                let exact = exact_percentage(outs, cards);
                assert!(
                    (sampled - exact).abs() < 2.0,
                    "{outs} outs {cards:?}: sampled {sampled} exact {exact}"
                );
            }
        }
    }

    #[test]
    fn test_method_descriptions() {
        let mut rng = StdRng::seed_from_u64(1);
        let estimator = EquityEstimator::new(100).unwrap();
        let query = OutsQuery {
            method: EstimateMethod::MonteCarlo,
            ..Default::default()
        };
        let estimate = estimator.estimate(&query, &mut rng);
        assert_eq!(EstimateMethod::MonteCarlo, estimate.method);
        assert!(estimate.method_description.contains("100"));

        let rule = estimator.estimate(&OutsQuery::default(), &mut rng);
        assert!(rule.method_description.starts_with("Rule of 4 and 2"));
    }

    #[test]
    fn test_query_validation() {
        assert!(OutsQuery::new(8, 2, EstimateMethod::Exact).is_ok());
        assert!(OutsQuery::new(20, 1, EstimateMethod::Rule).is_ok());
        assert!(matches!(
            OutsQuery::new(21, 2, EstimateMethod::Rule),
            Err(PrimerError::InvalidOuts { outs: 21, max: 20 })
        ));
        assert!(matches!(
            OutsQuery::new(8, 3, EstimateMethod::Rule),
            Err(PrimerError::InvalidCardsToCome(3))
        ));
        assert!(matches!(
            OutsQuery::new(8, 0, EstimateMethod::Rule),
            Err(PrimerError::InvalidCardsToCome(0))
        ));
    }

    #[test]
    fn test_estimator_rejects_zero_trials() {
        assert!(matches!(
            EquityEstimator::new(0),
            Err(PrimerError::InvalidTrialCount)
        ));
        assert_eq!(
            DEFAULT_MONTE_CARLO_TRIALS,
            EquityEstimator::default().monte_carlo_trials()
        );
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!(EstimateMethod::Rule, "rule".parse().unwrap());
        assert_eq!(EstimateMethod::Exact, "Exact".parse().unwrap());
        assert_eq!(EstimateMethod::MonteCarlo, "monte".parse().unwrap());
        assert_eq!(EstimateMethod::MonteCarlo, "monte-carlo".parse().unwrap());
        assert!("guess".parse::<EstimateMethod>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_query() {
        let query: OutsQuery =
            serde_json::from_str(r#"{"outs": 9, "cards_to_come": 1, "method": "monte_carlo"}"#)
                .unwrap();
        assert_eq!(9, query.outs);
        assert_eq!(CardsToCome::One, query.cards_to_come);
        assert_eq!(EstimateMethod::MonteCarlo, query.method);

        let bad = serde_json::from_str::<OutsQuery>(
            r#"{"outs": 9, "cards_to_come": 3, "method": "rule"}"#,
        );
        assert!(bad.is_err());
    }
}
