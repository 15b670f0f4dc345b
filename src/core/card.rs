use std::fmt;
use std::str::FromStr;

use super::error::PrimerError;

/// Card rank, ordered from deuce up to ace.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Value {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// All values from lowest to highest.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// Parse a value from its single character form (`2`-`9`, `T`, `J`, `Q`,
    /// `K`, `A`). Lower case face characters are accepted too.
    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            '2' => Some(Value::Two),
            '3' => Some(Value::Three),
            '4' => Some(Value::Four),
            '5' => Some(Value::Five),
            '6' => Some(Value::Six),
            '7' => Some(Value::Seven),
            '8' => Some(Value::Eight),
            '9' => Some(Value::Nine),
            'T' => Some(Value::Ten),
            'J' => Some(Value::Jack),
            'Q' => Some(Value::Queen),
            'K' => Some(Value::King),
            'A' => Some(Value::Ace),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }

    /// The bit this value occupies in a 13 bit value set.
    pub fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

/// Card suit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Suit {
    Spade = 0,
    Club = 1,
    Heart = 2,
    Diamond = 3,
}

const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            's' | '♠' => Some(Suit::Spade),
            'c' | '♣' => Some(Suit::Club),
            'h' | '♥' => Some(Suit::Heart),
            'd' | '♦' => Some(Suit::Diamond),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Club => 'c',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
        }
    }

    /// Unicode suit symbol, used when cards are shown to a learner.
    pub fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Club => '♣',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
        }
    }
}

/// A single playing card.
///
/// # Examples
///
/// ```
/// use poker_primer::core::{Card, Suit, Value};
///
/// let card: Card = "Ts".parse().unwrap();
/// assert_eq!(card, Card::new(Value::Ten, Suit::Spade));
/// assert_eq!(card.to_string(), "Ts");
/// assert_eq!(card.pretty(), "T♠");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Card {
    pub value: Value,
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Every card of a standard 52 card deck.
    pub fn deck() -> Vec<Card> {
        Value::values()
            .iter()
            .flat_map(|&value| Suit::suits().into_iter().map(move |suit| Card { value, suit }))
            .collect()
    }

    /// Value character followed by the suit symbol, e.g. `A♥`.
    pub fn pretty(&self) -> String {
        format!("{}{}", self.value.to_char(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(v), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PrimerError::InvalidCard(s.to_string()));
        };
        let value = Value::from_char(v).ok_or(PrimerError::UnexpectedValueChar(v))?;
        let suit = Suit::from_char(su).ok_or(PrimerError::UnexpectedSuitChar(su))?;
        Ok(Card { value, suit })
    }
}
