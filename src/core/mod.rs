//! Cards, suits and values plus the small pieces of hand reading the
//! lessons need (draw detection) and the crate's parse error.

mod card;
pub use self::card::{Card, Suit, Value};

/// Flush and straight draw detection over value bit sets.
mod draw;
pub use self::draw::{flush_draw_suit, has_straight, has_straight_draw, value_set};

mod error;
pub use self::error::{PrimerError, Result};
