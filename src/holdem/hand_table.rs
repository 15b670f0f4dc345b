//! Pre-computed starting hand equities.
//!
//! The table is produced offline (a monte carlo run over every starting hand
//! against one to nine opponents) and shipped as CSV. It is loaded once into
//! an immutable [`HandTable`] that callers pass around by reference.
//!
//! The CSV has a `hand` column followed by `{opponents}_win` and
//! `{opponents}_tie` columns, for example `1_win,1_tie,2_win,2_tie,...`.
//! Win and tie are fractions in `[0, 1]`. Other columns are ignored.

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use tracing::{event, instrument, Level};

use super::starting_hand::{hand_grid, StartingHand};
use crate::core::{PrimerError, Result};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

/// EV in big blinds at or above which the hand is raised.
const RAISE_THRESHOLD: f64 = 0.30;
/// EV in big blinds at or above which the hand is called.
const CALL_THRESHOLD: f64 = 0.0;

/// Suggested pre-flop action, derived from EV.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    Raise,
    Call,
    Fold,
}

impl Recommendation {
    pub fn from_ev(ev: f64) -> Self {
        if ev >= RAISE_THRESHOLD {
            Recommendation::Raise
        } else if ev >= CALL_THRESHOLD {
            Recommendation::Call
        } else {
            Recommendation::Fold
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <Self as fmt::Debug>::fmt(self, f)
    }
}

/// Strength tier, derived from EV.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Marginal,
    Speculative,
    Strong,
    Premium,
}

impl Tier {
    pub fn from_ev(ev: f64) -> Self {
        if ev >= 0.50 {
            Tier::Premium
        } else if ev >= 0.10 {
            Tier::Strong
        } else if ev >= -0.20 {
            Tier::Speculative
        } else {
            Tier::Marginal
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <Self as fmt::Debug>::fmt(self, f)
    }
}

/// Expected value in big blinds of putting one big blind into a pot that
/// every one of `players` contributes one big blind to: winning takes the
/// whole pot, a tie takes half of it.
pub fn expected_value(win: f64, tie: f64, players: usize) -> f64 {
    let n = players as f64;
    win * n + tie * n / 2.0 - 1.0
}

fn check_players(players: usize) -> Result<()> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
        Ok(())
    } else {
        Err(PrimerError::InvalidPlayerCount(players))
    }
}

/// Everything the grid shows about one hand at one table size.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandStats {
    pub hand: StartingHand,
    pub players: usize,
    pub win: f64,
    pub tie: f64,
    pub ev: f64,
    pub recommendation: Recommendation,
    pub tier: Tier,
}

/// Which fields a grid cell shows.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InfoMode {
    #[default]
    All,
    Win,
    Ev,
    Action,
}

impl FromStr for InfoMode {
    type Err = PrimerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(InfoMode::All),
            "win" => Ok(InfoMode::Win),
            "ev" => Ok(InfoMode::Ev),
            "rec" | "action" => Ok(InfoMode::Action),
            _ => Err(PrimerError::UnknownInfoMode(s.to_string())),
        }
    }
}

/// A square of the 13x13 grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub hand: StartingHand,
    /// `None` when the table has no row for this hand.
    pub stats: Option<HandStats>,
}

impl GridCell {
    /// The lines shown on the back of the card for `mode`.
    pub fn describe(&self, mode: InfoMode) -> Vec<String> {
        let show_win = matches!(mode, InfoMode::All | InfoMode::Win);
        let show_ev = matches!(mode, InfoMode::All | InfoMode::Ev);
        let show_action = matches!(mode, InfoMode::All | InfoMode::Action);

        let mut lines = Vec::with_capacity(3);
        match &self.stats {
            Some(stats) => {
                if show_win {
                    lines.push(format!("Win: {:.2}", stats.win));
                }
                if show_ev {
                    lines.push(format!("EV: {:.2}", stats.ev));
                }
                if show_action {
                    lines.push(format!("Action: {}", stats.recommendation));
                }
            }
            None => {
                if show_win {
                    lines.push("Win: N/A".to_string());
                }
                if show_ev {
                    lines.push("EV: N/A".to_string());
                }
                if show_action {
                    lines.push("Action: N/A".to_string());
                }
            }
        }
        lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Equity {
    win: f64,
    tie: f64,
}

/// Immutable lookup from starting hand and table size to equity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandTable {
    /// Indexed by `players - MIN_PLAYERS`.
    rows: HashMap<StartingHand, [Option<Equity>; MAX_PLAYERS - 1]>,
}

/// Column positions of one opponent count's win and tie values.
struct EquityColumns {
    win: usize,
    tie: Option<usize>,
}

impl HandTable {
    /// Parse the CSV text of a hand table.
    ///
    /// # Errors
    ///
    /// `PrimerError::MalformedTable` for a missing `hand` column, an
    /// unparsable hand or number, a fraction outside `[0, 1]`, or a hand
    /// listed twice.
    #[instrument(level = "debug", skip(text))]
    pub fn from_csv_str(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (_, header) = lines.next().ok_or(PrimerError::MalformedTable {
            line: 1,
            reason: "missing header row".to_string(),
        })?;
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        let hand_col = columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case("hand"))
            .ok_or(PrimerError::MalformedTable {
                line: 1,
                reason: "no hand column".to_string(),
            })?;
        let equity_columns: Vec<Option<EquityColumns>> = (1..MAX_PLAYERS)
            .map(|opponents| {
                let find = |suffix: &str| {
                    let name = format!("{opponents}_{suffix}");
                    columns.iter().position(|c| *c == name)
                };
                find("win").map(|win| EquityColumns {
                    win,
                    tie: find("tie"),
                })
            })
            .collect();

        let mut rows = HashMap::new();
        for (line, row) in lines {
            let fields: Vec<&str> = row.split(',').map(str::trim).collect();
            let malformed = |reason: String| PrimerError::MalformedTable { line, reason };

            let hand_text = fields
                .get(hand_col)
                .ok_or_else(|| malformed("missing hand".to_string()))?;
            let hand: StartingHand = hand_text
                .parse()
                .map_err(|_| malformed(format!("bad hand {hand_text:?}")))?;

            let fraction = |idx: usize| -> Result<Option<f64>> {
                match fields.get(idx).copied() {
                    None | Some("") => Ok(None),
                    Some(raw) => {
                        let value: f64 = raw
                            .parse()
                            .map_err(|_| malformed(format!("bad number {raw:?}")))?;
                        if (0.0..=1.0).contains(&value) {
                            Ok(Some(value))
                        } else {
                            Err(malformed(format!("{value} is not a fraction")))
                        }
                    }
                }
            };

            let mut equities = [None; MAX_PLAYERS - 1];
            for (slot, cols) in equities.iter_mut().zip(&equity_columns) {
                let Some(cols) = cols else { continue };
                if let Some(win) = fraction(cols.win)? {
                    let tie = match cols.tie {
                        Some(idx) => fraction(idx)?.unwrap_or(0.0),
                        None => 0.0,
                    };
                    *slot = Some(Equity { win, tie });
                }
            }

            if rows.insert(hand, equities).is_some() {
                return Err(malformed(format!("{hand} is listed twice")));
            }
        }

        event!(Level::INFO, hands = rows.len(), "Loaded starting hand table");
        Ok(Self { rows })
    }

    pub fn from_csv_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_csv_str(&text)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_csv_str(&text)
    }

    /// Number of hands with a row in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Hands in the table, sorted by notation.
    pub fn hands(&self) -> Vec<StartingHand> {
        let mut hands: Vec<_> = self.rows.keys().copied().collect();
        hands.sort_by_key(|h| h.to_notation());
        hands
    }

    /// Stats for `hand` at a table of `players`, if the table covers it.
    pub fn stats(&self, hand: &StartingHand, players: usize) -> Option<HandStats> {
        if check_players(players).is_err() {
            return None;
        }
        let equity = self.rows.get(hand)?[players - MIN_PLAYERS]?;
        let ev = expected_value(equity.win, equity.tie, players);
        Some(HandStats {
            hand: *hand,
            players,
            win: equity.win,
            tie: equity.tie,
            ev,
            recommendation: Recommendation::from_ev(ev),
            tier: Tier::from_ev(ev),
        })
    }

    /// The full 13x13 grid for a table of `players`.
    pub fn grid(&self, players: usize) -> Result<Vec<Vec<GridCell>>> {
        check_players(players)?;
        Ok(hand_grid()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|hand| GridCell {
                        hand: *hand,
                        stats: self.stats(hand, players),
                    })
                    .collect()
            })
            .collect())
    }

    /// EV at every table size the table covers, for comparing hands on a
    /// radar chart.
    pub fn ev_profile(&self, hand: &StartingHand) -> Result<Vec<(usize, f64)>> {
        if !self.rows.contains_key(hand) {
            return Err(PrimerError::UnknownHand(hand.to_notation()));
        }
        Ok((MIN_PLAYERS..=MAX_PLAYERS)
            .filter_map(|players| self.stats(hand, players).map(|s| (players, s.ev)))
            .collect())
    }

    /// Which of two hands has the higher EV at `players`. `None` when the
    /// EVs are equal or either hand has no data.
    pub fn compare_ev(
        &self,
        a: &StartingHand,
        b: &StartingHand,
        players: usize,
    ) -> Option<StartingHand> {
        let ev_a = self.stats(a, players)?.ev;
        let ev_b = self.stats(b, players)?.ev;
        match ev_a.partial_cmp(&ev_b)? {
            std::cmp::Ordering::Greater => Some(*a),
            std::cmp::Ordering::Less => Some(*b),
            std::cmp::Ordering::Equal => None,
        }
    }
}
