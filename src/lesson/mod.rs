//! Chapters of the course and the plumbing that keeps a page current.
//!
//! Every page is a set of pure functions from inputs to outputs. A
//! [`Dispatcher`] owns the current input of one page, recomputes when the
//! input actually changes and pushes the new output to its observers.

use std::fmt;

mod dispatch;
pub use self::dispatch::{DispatchError, Dispatcher, Observer};

/// One page of the course.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Chapter {
    OutsAndOdds,
    StartingHands,
    TablePosition,
    FlopDecisions,
    RangeNarrowing,
    Bluffing,
    Variance,
}

impl Chapter {
    pub const fn all() -> [Chapter; 7] {
        [
            Chapter::OutsAndOdds,
            Chapter::StartingHands,
            Chapter::TablePosition,
            Chapter::FlopDecisions,
            Chapter::RangeNarrowing,
            Chapter::Bluffing,
            Chapter::Variance,
        ]
    }

    /// 1 based chapter number.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn title(self) -> &'static str {
        match self {
            Chapter::OutsAndOdds => "Outs & Odds",
            Chapter::StartingHands => "Starting Hand Strength & Radar Comparison",
            Chapter::TablePosition => "Table Position & Strategy Visualization",
            Chapter::FlopDecisions => "Flop Decision Simulator",
            Chapter::RangeNarrowing => "Opponent Range Filtering and Visualization",
            Chapter::Bluffing => "Bluffing Skills & Frequency Control",
            Chapter::Variance => "Variance and Bankroll Management",
        }
    }

    /// Canonical URL path, e.g. `/chapter-3`.
    pub fn path(self) -> String {
        format!("/chapter-{}", self.number())
    }

    /// Route a URL path to a chapter. The site root opens chapter 1 and the
    /// later chapters also answer to the undashed `/chapterN` form. Anything
    /// else is not a page.
    pub fn from_path(path: &str) -> Option<Chapter> {
        match path {
            "/" | "/chapter-1" => Some(Chapter::OutsAndOdds),
            "/chapter-2" => Some(Chapter::StartingHands),
            "/chapter-3" => Some(Chapter::TablePosition),
            "/chapter-4" => Some(Chapter::FlopDecisions),
            "/chapter-5" | "/chapter5" => Some(Chapter::RangeNarrowing),
            "/chapter-6" | "/chapter6" => Some(Chapter::Bluffing),
            "/chapter-7" | "/chapter7" => Some(Chapter::Variance),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Chapter> {
        Chapter::all().get(self.number() as usize).copied()
    }

    pub fn previous(self) -> Option<Chapter> {
        (self.number() as usize)
            .checked_sub(2)
            .and_then(|idx| Chapter::all().get(idx).copied())
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chapter {}: {}", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        assert_eq!(Some(Chapter::OutsAndOdds), Chapter::from_path("/"));
        assert_eq!(Some(Chapter::Bluffing), Chapter::from_path("/chapter6"));
        assert_eq!(Some(Chapter::Variance), Chapter::from_path("/chapter-7"));
        assert_eq!(None, Chapter::from_path("/chapter2"));
        assert_eq!(None, Chapter::from_path("/chapter-8"));
        assert_eq!(None, Chapter::from_path(""));
    }

    #[test]
    fn test_canonical_paths_round_trip() {
        for chapter in Chapter::all() {
            assert_eq!(Some(chapter), Chapter::from_path(&chapter.path()));
        }
    }

    #[test]
    fn test_navigation() {
        assert_eq!(None, Chapter::OutsAndOdds.previous());
        assert_eq!(Some(Chapter::StartingHands), Chapter::OutsAndOdds.next());
        assert_eq!(Some(Chapter::Bluffing), Chapter::Variance.previous());
        assert_eq!(None, Chapter::Variance.next());
        assert_eq!("Chapter 1: Outs & Odds", Chapter::OutsAndOdds.to_string());
    }
}
