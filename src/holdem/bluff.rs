/// Value combos assumed when turning the mix into a combo count.
pub const EXAMPLE_VALUE_COMBOS: u32 = 30;

const TINY_BET: f64 = 0.05;
const OVERSIZED_BET: f64 = 1.5;

/// Balanced mix of value bets and bluffs for one bet size.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BluffRatio {
    /// Bet size as a fraction of the pot.
    pub bet_pot_ratio: f64,
    pub value: f64,
    pub bluff: f64,
}

/// The bluff share that makes a caller indifferent: `b / (1 + b)` for a bet
/// of `b` pots. Negative bet sizes give no bluffs. Both shares are in
/// `[0, 1]` and sum to 1.
pub fn bluff_ratio(bet_pot_ratio: f64) -> BluffRatio {
    let bluff = if bet_pot_ratio >= 0.0 {
        bet_pot_ratio / (1.0 + bet_pot_ratio)
    } else {
        0.0
    };
    BluffRatio {
        bet_pot_ratio,
        value: (1.0 - bluff).max(0.0),
        bluff: bluff.max(0.0),
    }
}

impl BluffRatio {
    /// Bluff combos that balance `value_combos` value combos.
    pub fn bluff_combos(&self, value_combos: u32) -> u32 {
        if self.value <= 0.0 {
            return 0;
        }
        (self.bluff / self.value * f64::from(value_combos)).round() as u32
    }

    pub fn example(&self) -> String {
        format!(
            "If your value betting range has {} combinations, you can add about {} bluff combos for balance.",
            EXAMPLE_VALUE_COMBOS,
            self.bluff_combos(EXAMPLE_VALUE_COMBOS)
        )
    }

    /// A caveat for bet sizes that rarely show up in practice.
    pub fn warning(&self) -> Option<&'static str> {
        if self.bet_pot_ratio < TINY_BET {
            Some("Note: Extremely small bets are rare in real games; this theoretical frequency is for reference only.")
        } else if self.bet_pot_ratio > OVERSIZED_BET {
            Some("Note: Oversized bets are seldom seen except in specific spots; use the theory as a guideline.")
        } else {
            None
        }
    }
}
