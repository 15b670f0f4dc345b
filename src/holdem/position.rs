use std::fmt;
use std::str::FromStr;

use crate::core::PrimerError;

/// A seat at a nine handed table, in order of action pre-flop.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Utg,
    Utg1,
    Utg2,
    Middle,
    Hijack,
    Cutoff,
    Button,
    SmallBlind,
    BigBlind,
}

/// The five numbers every position is scored on, all in `[0, 1]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionMetrics {
    pub win_rate: f64,
    /// Voluntarily put money in pot.
    pub vpip: f64,
    /// Pre-flop raise.
    pub pfr: f64,
    pub steal: f64,
    pub aggression: f64,
}

impl PositionMetrics {
    pub const LABELS: [&'static str; 5] = ["Win Rate", "VPIP", "PFR", "Steal", "Aggression"];

    const fn new(win_rate: f64, vpip: f64, pfr: f64, steal: f64, aggression: f64) -> Self {
        Self {
            win_rate,
            vpip,
            pfr,
            steal,
            aggression,
        }
    }

    /// Values in the same order as [`PositionMetrics::LABELS`].
    pub fn values(&self) -> [f64; 5] {
        [
            self.win_rate,
            self.vpip,
            self.pfr,
            self.steal,
            self.aggression,
        ]
    }
}

impl Position {
    pub const fn all() -> [Position; 9] {
        [
            Position::Utg,
            Position::Utg1,
            Position::Utg2,
            Position::Middle,
            Position::Hijack,
            Position::Cutoff,
            Position::Button,
            Position::SmallBlind,
            Position::BigBlind,
        ]
    }

    /// The short label used on tables and charts.
    pub fn label(self) -> &'static str {
        match self {
            Position::Utg => "UTG",
            Position::Utg1 => "UTG+1",
            Position::Utg2 => "UTG+2",
            Position::Middle => "MP",
            Position::Hijack => "HJ",
            Position::Cutoff => "CO",
            Position::Button => "BTN",
            Position::SmallBlind => "SB",
            Position::BigBlind => "BB",
        }
    }

    pub fn metrics(self) -> PositionMetrics {
        match self {
            Position::Utg => PositionMetrics::new(0.20, 0.30, 0.20, 0.10, 0.30),
            Position::Utg1 => PositionMetrics::new(0.25, 0.35, 0.25, 0.15, 0.35),
            Position::Utg2 => PositionMetrics::new(0.28, 0.38, 0.30, 0.18, 0.37),
            Position::Middle => PositionMetrics::new(0.30, 0.40, 0.35, 0.20, 0.40),
            Position::Hijack => PositionMetrics::new(0.32, 0.42, 0.38, 0.30, 0.43),
            Position::Cutoff => PositionMetrics::new(0.40, 0.50, 0.45, 0.35, 0.50),
            Position::Button => PositionMetrics::new(0.50, 0.60, 0.50, 0.60, 0.60),
            Position::SmallBlind => PositionMetrics::new(0.15, 0.25, 0.20, 0.10, 0.25),
            Position::BigBlind => PositionMetrics::new(0.10, 0.20, 0.15, 0.05, 0.20),
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Position::Utg => "First to act. Tightest range: only strongest hands.",
            Position::Utg1 => "Still early, add AQ, JJ.",
            Position::Utg2 => "Can mix in more suited connectors.",
            Position::Middle => "Middle, start to loosen up.",
            Position::Hijack => "Hijack: exploit if late seats are passive.",
            Position::Cutoff => "Cutoff: attack the blinds!",
            Position::Button => "Button: the best spot. Open widest, max pressure.",
            Position::SmallBlind => "Small blind: defend tight, awkward spot.",
            Position::BigBlind => "Big blind: defend often, but out of position.",
        }
    }

    /// This position's metrics minus the button's, in label order. The
    /// button is the reference because it is the most profitable seat.
    pub fn compare_to_button(self) -> [f64; 5] {
        let ours = self.metrics().values();
        let button = Position::Button.metrics().values();
        std::array::from_fn(|i| ours[i] - button[i])
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Position::all()
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PrimerError::UnknownPosition(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for position in Position::all() {
            assert_eq!(position, position.label().parse().unwrap());
        }
        assert_eq!(Position::Utg1, "utg+1".parse().unwrap());
        assert!(matches!(
            "LJ".parse::<Position>(),
            Err(PrimerError::UnknownPosition(_))
        ));
    }

    #[test]
    fn test_button_is_best_win_rate() {
        let best = Position::all()
            .into_iter()
            .max_by(|a, b| a.metrics().win_rate.total_cmp(&b.metrics().win_rate))
            .unwrap();
        assert_eq!(Position::Button, best);
    }

    #[test]
    fn test_metrics_are_fractions() {
        for position in Position::all() {
            assert!(position
                .metrics()
                .values()
                .iter()
                .all(|v| (0.0..=1.0).contains(v)));
            assert!(!position.advice().is_empty());
        }
    }

    #[test]
    fn test_compare_to_button() {
        assert_eq!([0.0; 5], Position::Button.compare_to_button());
        let utg = Position::Utg.compare_to_button();
        assert_abs_diff_eq!(-0.30, utg[0], epsilon = 1e-9);
        assert_abs_diff_eq!(-0.50, utg[3], epsilon = 1e-9);
    }
}
