//! Narrowing an opponent's range as they keep showing aggression.
//!
//! The model is small: a preset top 15% opening range,
//! five coarse hand categories and one filter per betting action.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::starting_hand::{hand_grid, StartingHand};
use crate::core::{PrimerError, Value};

/// Number of starting hand classes.
pub const STARTING_HAND_CLASSES: usize = 169;

const TOP_15_PERCENT: [&str; 25] = [
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "AKs", "AKo", "AQs", "AQo", "AJs", "AJo", "KQs",
    "KQo", "KJs", "KJo", "QJs", "QJo", "ATs", "KTs", "QTs", "JTs", "A9s", "JTo",
];

const SUITED_CONNECTORS: [&str; 7] = ["A5s", "A4s", "A3s", "A2s", "KTs", "QTs", "JTs"];

/// Range of hands an opponent may hold.
pub type Range = BTreeSet<StartingHand>;

/// The preset range an opponent opens from: the top 15% of starting hands.
pub fn top_15_range() -> Range {
    TOP_15_PERCENT
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect()
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandCategory {
    /// 88 and better.
    StrongPair,
    /// Both cards ace through jack, same suit.
    SuitedBroadway,
    /// Both cards ace through jack, different suits.
    OffsuitBroadway,
    SuitedConnector,
    Other,
}

impl HandCategory {
    pub const fn all() -> [HandCategory; 5] {
        [
            HandCategory::StrongPair,
            HandCategory::SuitedBroadway,
            HandCategory::OffsuitBroadway,
            HandCategory::SuitedConnector,
            HandCategory::Other,
        ]
    }

    pub fn classify(hand: &StartingHand) -> Self {
        let broadway = |v: Value| v >= Value::Jack;
        if hand.is_pair() {
            if hand.high() >= Value::Eight {
                HandCategory::StrongPair
            } else {
                HandCategory::Other
            }
        } else if broadway(hand.high()) && broadway(hand.low()) {
            if hand.suited() {
                HandCategory::SuitedBroadway
            } else {
                HandCategory::OffsuitBroadway
            }
        } else if SUITED_CONNECTORS.contains(&hand.to_notation().as_str()) {
            HandCategory::SuitedConnector
        } else {
            HandCategory::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HandCategory::StrongPair => "Strong Pair",
            HandCategory::SuitedBroadway => "Suited Broadway",
            HandCategory::OffsuitBroadway => "Offsuit Broadway",
            HandCategory::SuitedConnector => "Suited Connector",
            HandCategory::Other => "Air/Other",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An action the opponent took, in street order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RangeAction {
    PreflopRaise,
    ContinuationBet,
    TurnBarrel,
}

impl RangeAction {
    pub const fn all() -> [RangeAction; 3] {
        [
            RangeAction::PreflopRaise,
            RangeAction::ContinuationBet,
            RangeAction::TurnBarrel,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            RangeAction::PreflopRaise => "Preflop Raise",
            RangeAction::ContinuationBet => "Flop C-Bet",
            RangeAction::TurnBarrel => "Turn Barrel",
        }
    }

    /// Short name used on the narrowing flow.
    pub fn short_label(self) -> &'static str {
        match self {
            RangeAction::PreflopRaise => "PFR",
            RangeAction::ContinuationBet => "CBet",
            RangeAction::TurnBarrel => "Turn",
        }
    }

    /// Categories still in the range after this action. `None` keeps
    /// everything.
    fn keeps(self) -> Option<&'static [HandCategory]> {
        match self {
            RangeAction::PreflopRaise => None,
            RangeAction::ContinuationBet => Some(&[
                HandCategory::StrongPair,
                HandCategory::SuitedBroadway,
                HandCategory::SuitedConnector,
            ]),
            RangeAction::TurnBarrel => {
                Some(&[HandCategory::StrongPair, HandCategory::SuitedBroadway])
            }
        }
    }
}

impl fmt::Display for RangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RangeAction {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pfr" | "preflop" | "preflop-raise" => Ok(RangeAction::PreflopRaise),
            "cbet" | "c-bet" | "continuation-bet" => Ok(RangeAction::ContinuationBet),
            "turn" | "barrel" | "turn-barrel" => Ok(RangeAction::TurnBarrel),
            _ => Err(PrimerError::UnknownRangeAction(s.to_string())),
        }
    }
}

/// Canned opponent profiles.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangePreset {
    TightAggressive,
    LoosePassive,
}

impl RangePreset {
    pub fn actions(self) -> Vec<RangeAction> {
        match self {
            RangePreset::TightAggressive => {
                vec![RangeAction::PreflopRaise, RangeAction::ContinuationBet]
            }
            RangePreset::LoosePassive => vec![RangeAction::PreflopRaise],
        }
    }
}

/// The top 15% range filtered by every action taken.
pub fn narrow_range(actions: &[RangeAction]) -> Range {
    let mut range = top_15_range();
    for action in RangeAction::all() {
        if !actions.contains(&action) {
            continue;
        }
        if let Some(keep) = action.keeps() {
            range.retain(|hand| keep.contains(&HandCategory::classify(hand)));
        }
    }
    range
}

/// `true` for every grid square whose hand is in `range`.
pub fn range_grid(range: &Range) -> [[bool; 13]; 13] {
    hand_grid().map(|row| row.map(|hand| range.contains(&hand)))
}

/// One step of the narrowing flow.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrowingStage {
    pub label: &'static str,
    pub count: usize,
}

/// Illustrative hand counts as the range narrows, starting from all 169
/// classes. Each selected action scales the count by the ratio of
/// successive factors in `[1, 0.15, 0.08, 0.05]`.
///
/// With no actions the flow still shows a pre-flop step, sized to the
/// current range.
pub fn narrowing_stages(actions: &[RangeAction]) -> Vec<NarrowingStage> {
    const SHRINK: [f64; 4] = [1.0, 0.15, 0.08, 0.05];

    let mut stages = vec![NarrowingStage {
        label: "Start",
        count: STARTING_HAND_CLASSES,
    }];
    let mut current = STARTING_HAND_CLASSES;
    for (i, action) in RangeAction::all().into_iter().enumerate() {
        if actions.contains(&action) {
            current = (current as f64 * SHRINK[i + 1] / SHRINK[i]) as usize;
            stages.push(NarrowingStage {
                label: action.short_label(),
                count: current,
            });
        }
    }

    if stages.len() == 1 {
        stages.push(NarrowingStage {
            label: RangeAction::PreflopRaise.short_label(),
            count: narrow_range(actions).len(),
        });
    }
    stages
}

/// How a range breaks down by category.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RangeComposition {
    pub total: usize,
    /// Every category, including empty ones, in [`HandCategory::all`] order.
    pub counts: Vec<(HandCategory, usize)>,
}

impl RangeComposition {
    pub fn of(range: &Range) -> Self {
        let counts = HandCategory::all()
            .into_iter()
            .map(|category| {
                let count = range
                    .iter()
                    .filter(|h| HandCategory::classify(h) == category)
                    .count();
                (category, count)
            })
            .collect();
        Self {
            total: range.len(),
            counts,
        }
    }

    /// Share of all 169 classes still in the range, as a percentage.
    pub fn coverage_percent(&self) -> f64 {
        100.0 * self.total as f64 / STARTING_HAND_CLASSES as f64
    }

    /// Share of the range in `category`, as a percentage. An empty range
    /// gives 0 everywhere.
    pub fn share_percent(&self, category: HandCategory) -> f64 {
        let count = self
            .counts
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n);
        100.0 * count as f64 / self.total.max(1) as f64
    }
}

impl fmt::Display for RangeComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Remaining hand types: {}, covering approximately {:.1}% of all starting hands",
            self.total,
            self.coverage_percent()
        )?;
        for (category, count) in &self.counts {
            writeln!(
                f,
                "{}: {} combos, {:.1}%",
                category,
                count,
                self.share_percent(*category)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn hand(s: &str) -> StartingHand {
        s.parse().unwrap()
    }

    #[test]
    fn test_top_range() {
        let range = top_15_range();
        assert_eq!(25, range.len());
        assert!(range.contains(&hand("JTo")));
        assert!(!range.contains(&hand("77")));
    }

    #[test]
    fn test_classify() {
        assert_eq!(HandCategory::StrongPair, HandCategory::classify(&hand("88")));
        assert_eq!(HandCategory::Other, HandCategory::classify(&hand("77")));
        assert_eq!(HandCategory::SuitedBroadway, HandCategory::classify(&hand("KJs")));
        assert_eq!(HandCategory::OffsuitBroadway, HandCategory::classify(&hand("AQo")));
        assert_eq!(HandCategory::SuitedConnector, HandCategory::classify(&hand("QTs")));
        assert_eq!(HandCategory::SuitedConnector, HandCategory::classify(&hand("A4s")));
        assert_eq!(HandCategory::Other, HandCategory::classify(&hand("JTo")));
        assert_eq!(HandCategory::Other, HandCategory::classify(&hand("A9s")));
    }

    #[test]
    fn test_narrowing_filters() {
        assert_eq!(top_15_range(), narrow_range(&[]));
        assert_eq!(top_15_range(), narrow_range(&[RangeAction::PreflopRaise]));

        let cbet = narrow_range(&RangePreset::TightAggressive.actions());
        // 7 pairs, 6 suited broadway, KTs QTs JTs.
        assert_eq!(16, cbet.len());
        assert!(!cbet.contains(&hand("AKo")));

        let turn = narrow_range(&[RangeAction::ContinuationBet, RangeAction::TurnBarrel]);
        assert_eq!(13, turn.len());
        assert!(turn.iter().all(|h| {
            matches!(
                HandCategory::classify(h),
                HandCategory::StrongPair | HandCategory::SuitedBroadway
            )
        }));
    }

    #[test]
    fn test_stage_counts() {
        let counts = |actions: &[RangeAction]| -> Vec<usize> {
            narrowing_stages(actions).iter().map(|s| s.count).collect()
        };
        assert_eq!(vec![169, 25], counts(&[RangeAction::PreflopRaise]));
        assert_eq!(
            vec![169, 25, 13],
            counts(&[RangeAction::PreflopRaise, RangeAction::ContinuationBet])
        );
        assert_eq!(vec![169, 25, 13, 8], counts(&RangeAction::all()));
        // Skipping a street still uses that street's own ratio.
        assert_eq!(vec![169, 105], counts(&[RangeAction::TurnBarrel]));
        assert_eq!(vec![169, 25], counts(&[]));
    }

    #[test]
    fn test_composition() {
        let composition = RangeComposition::of(&top_15_range());
        assert_eq!(25, composition.total);
        assert_abs_diff_eq!(14.79, composition.coverage_percent(), epsilon = 0.01);
        assert_eq!(
            composition.total,
            composition.counts.iter().map(|(_, n)| n).sum::<usize>()
        );
        assert_abs_diff_eq!(
            28.0,
            composition.share_percent(HandCategory::StrongPair),
            epsilon = 1e-9
        );
        let text = composition.to_string();
        assert!(text.starts_with("Remaining hand types: 25, covering approximately 14.8%"));
        assert!(text.contains("Strong Pair: 7 combos, 28.0%"));

        let empty = RangeComposition::of(&Range::new());
        assert_eq!(0.0, empty.share_percent(HandCategory::Other));
    }

    #[test]
    fn test_range_grid() {
        let grid = range_grid(&top_15_range());
        assert!(grid[0][0]);
        assert!(grid[3][4]);
        assert!(!grid[12][12]);
        let lit: usize = grid.iter().flatten().filter(|b| **b).count();
        assert_eq!(25, lit);
    }

    #[test]
    fn test_action_from_str() {
        assert_eq!(RangeAction::ContinuationBet, "CBet".parse().unwrap());
        assert!("river".parse::<RangeAction>().is_err());
    }
}
