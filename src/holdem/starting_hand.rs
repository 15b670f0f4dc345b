use std::fmt;
use std::str::FromStr;

use crate::core::{PrimerError, Value};

/// Grid order used by every 13x13 starting hand chart: ace first, deuce last.
pub const GRID_ORDER: [Value; 13] = [
    Value::Ace,
    Value::King,
    Value::Queen,
    Value::Jack,
    Value::Ten,
    Value::Nine,
    Value::Eight,
    Value::Seven,
    Value::Six,
    Value::Five,
    Value::Four,
    Value::Three,
    Value::Two,
];

/// One of the 169 starting hand classes.
///
/// - 13 pocket pairs (e.g., AA, KK, 22)
/// - 78 suited hands (e.g., AKs, T9s)
/// - 78 offsuit hands (e.g., AKo, 72o)
///
/// # Examples
///
/// ```
/// use poker_primer::holdem::StartingHand;
/// use poker_primer::core::Value;
///
/// let aks = StartingHand::new(Value::Ace, Value::King, true);
/// assert_eq!(aks.to_notation(), "AKs");
///
/// let ako: StartingHand = "AKo".parse().unwrap();
/// assert!(!ako.suited());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct StartingHand {
    /// Higher or equal value card
    high: Value,
    /// Lower or equal value card
    low: Value,
    /// true = suited, false = offsuit (pairs always false)
    suited: bool,
}

impl StartingHand {
    /// Values are ordered so that `high >= low`, and pairs are never suited.
    pub fn new(v1: Value, v2: Value, suited: bool) -> Self {
        let (high, low) = if v1 >= v2 { (v1, v2) } else { (v2, v1) };
        let suited = high != low && suited;
        Self { high, low, suited }
    }

    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    /// Pairs always return false.
    pub fn suited(&self) -> bool {
        self.suited
    }

    pub fn high(&self) -> Value {
        self.high
    }

    pub fn low(&self) -> Value {
        self.low
    }

    /// "AA", "AKs" or "AKo".
    pub fn to_notation(&self) -> String {
        let high_char = self.high.to_char();
        let low_char = self.low.to_char();

        if self.is_pair() {
            format!("{}{}", high_char, low_char)
        } else if self.suited {
            format!("{}{}s", high_char, low_char)
        } else {
            format!("{}{}o", high_char, low_char)
        }
    }

    /// Parse "AA", "AKs", "AKo" (either card order, any case).
    ///
    /// # Errors
    ///
    /// Returns `PrimerError::InvalidStartingHand` if the notation is invalid.
    pub fn from_notation(s: &str) -> Result<Self, PrimerError> {
        let invalid = || PrimerError::InvalidStartingHand(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() < 2 || chars.len() > 3 {
            return Err(invalid());
        }

        let v1 = Value::from_char(chars[0]).ok_or_else(invalid)?;
        let v2 = Value::from_char(chars[1]).ok_or_else(invalid)?;

        let suited = match chars.get(2).map(|c| c.to_ascii_lowercase()) {
            // Two characters is only valid for a pair
            None if v1 == v2 => false,
            Some('s') if v1 != v2 => true,
            Some('o') if v1 != v2 => false,
            _ => return Err(invalid()),
        };

        Ok(Self::new(v1, v2, suited))
    }

    /// All 169 classes, in grid order row by row.
    pub fn all() -> Vec<Self> {
        hand_grid().into_iter().flatten().collect()
    }

    /// Row and column of this hand in the 13x13 grid. Suited hands sit
    /// above the diagonal, offsuit hands below it.
    pub fn grid_position(&self) -> (usize, usize) {
        let high = grid_index(self.high);
        let low = grid_index(self.low);
        if self.suited {
            (high, low)
        } else {
            (low, high)
        }
    }
}

fn grid_index(value: Value) -> usize {
    Value::Ace as usize - value as usize
}

/// The 13x13 starting hand grid: pairs on the diagonal, suited hands above
/// it (row < column), offsuit hands below it.
pub fn hand_grid() -> [[StartingHand; 13]; 13] {
    std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let (r, c) = (GRID_ORDER[row], GRID_ORDER[col]);
            StartingHand::new(r, c, row < col)
        })
    })
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

impl FromStr for StartingHand {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl TryFrom<String> for StartingHand {
    type Error = PrimerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_notation(&value)
    }
}

impl From<StartingHand> for String {
    fn from(hand: StartingHand) -> Self {
        hand.to_notation()
    }
}
