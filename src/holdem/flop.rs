//! Preset post-flop spots revealed one street at a time.
//!
//! A [`Scenario`] fixes the hero's hole cards, the villains and the full
//! board. Each [`Street`] turns over more of the board and may come with a
//! multiple choice question. The texture notes only ever look at the flop.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::core::{Card, PrimerError, Result, Suit, Value};

/// Shown when there is no flop to read.
pub const STANDARD_FLOP_TIP: &str = "Standard flop—play balanced.";

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Street {
    #[default]
    Flop,
    Turn,
    River,
}

impl Street {
    pub const fn all() -> [Street; 3] {
        [Street::Flop, Street::Turn, Street::River]
    }

    pub fn label(self) -> &'static str {
        match self {
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        }
    }

    /// Board cards face up on this street.
    pub fn board_cards(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// Stays on the river.
    pub fn next(self) -> Street {
        match self {
            Street::Flop => Street::Turn,
            Street::Turn | Street::River => Street::River,
        }
    }

    /// Stays on the flop.
    pub fn previous(self) -> Street {
        match self {
            Street::Flop | Street::Turn => Street::Flop,
            Street::River => Street::Turn,
        }
    }

    /// Rough share of hand types the hero holds by this street, for the
    /// pie chart. Shares sum to one.
    pub fn hand_type_mix(self) -> &'static [(&'static str, f64)] {
        match self {
            Street::Flop => &[
                ("Top Pair", 0.45),
                ("Draw", 0.25),
                ("Middle Pair", 0.15),
                ("Air", 0.15),
            ],
            Street::Turn => &[
                ("Top Pair", 0.35),
                ("Draw", 0.15),
                ("Made Hand", 0.30),
                ("Air", 0.20),
            ],
            Street::River => &[("Top Pair", 0.2), ("Made Hand", 0.55), ("Missed", 0.25)],
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Street {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flop" => Ok(Street::Flop),
            "turn" => Ok(Street::Turn),
            "river" => Ok(Street::River),
            _ => Err(PrimerError::UnknownStreet(s.to_string())),
        }
    }
}

/// One observation about how a flop plays.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureNote {
    /// Three different suits.
    Rainbow,
    /// Two cards share a suit.
    TwoTone,
    /// All three cards share a suit.
    Monotone,
    /// A ten or higher next to a seven or lower.
    HighAndLow,
    /// Jack and ten together.
    StraightWarning,
    Paired,
}

impl TextureNote {
    pub fn text(self) -> &'static str {
        match self {
            TextureNote::Rainbow => "Rainbow flop: Flush draws impossible.",
            TextureNote::TwoTone => "Two-tone: Flush draws possible, extra caution needed.",
            TextureNote::Monotone => "Monotone: Flushes already possible, one more card of the suit makes many more.",
            TextureNote::HighAndLow => {
                "High card + low card: Aggression can fold out many weak hands."
            }
            TextureNote::StraightWarning => "Watch out for straight draws (QK, 98, etc).",
            TextureNote::Paired => "Paired board: Sets and two-pair more likely.",
        }
    }

    /// Two or more cards of one suit.
    pub fn is_flush_draw_possible(self) -> bool {
        matches!(self, TextureNote::TwoTone | TextureNote::Monotone)
    }
}

impl fmt::Display for TextureNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Texture notes for the flop, which is the first three cards of `board`.
/// Suit notes come first.
pub fn board_texture_tips(board: &[Card]) -> Vec<TextureNote> {
    let flop = &board[..board.len().min(3)];
    if flop.is_empty() {
        return Vec::new();
    }

    let suits: BTreeSet<Suit> = flop.iter().map(|c| c.suit).collect();
    let values: BTreeSet<Value> = flop.iter().map(|c| c.value).collect();

    let mut notes = vec![match suits.len() {
        3 => TextureNote::Rainbow,
        1 if flop.len() == 3 => TextureNote::Monotone,
        _ => TextureNote::TwoTone,
    }];
    let high = values.iter().any(|&v| v >= Value::Ten);
    let low = values.iter().any(|&v| v <= Value::Seven);
    if high && low {
        notes.push(TextureNote::HighAndLow);
    }
    if values.contains(&Value::Jack) && values.contains(&Value::Ten) {
        notes.push(TextureNote::StraightWarning);
    }
    if values.len() < flop.len() {
        notes.push(TextureNote::Paired);
    }
    notes
}

/// All texture notes as one line.
pub fn board_texture_tip(board: &[Card]) -> String {
    let notes = board_texture_tips(board);
    if notes.is_empty() {
        return STANDARD_FLOP_TIP.to_string();
    }
    notes
        .iter()
        .map(|n| n.text())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn strategy_hint(street: Street, scenario: &Scenario) -> &'static str {
    match street {
        Street::Flop if scenario.is_draw_heavy() => {
            "Flop: Draw-heavy board. Play aggressively with strong draws (C-bet/semi-bluff) and cautiously with weak hands."
        }
        Street::Flop => "Flop: On dry boards, value bet strong hands, C-bet as bluff more often.",
        Street::Turn => {
            "Turn: Continue value betting strong hands. If draw completes, slow down with weaker holdings."
        }
        Street::River => {
            "River: Value bet only the strongest hands; don't bluff into multiway pots."
        }
    }
}

/// A multiple choice question asked on one street.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlopQuiz {
    pub street: Street,
    pub question: &'static str,
    /// Each option starts with its letter, e.g. `A. Call`.
    pub options: &'static [&'static str],
    pub answer: &'static str,
    pub explanation: &'static str,
}

impl FlopQuiz {
    /// `choice` may be the full option text or just its letter.
    pub fn is_correct(&self, choice: &str) -> bool {
        let choice = choice.trim();
        choice.eq_ignore_ascii_case(self.answer)
            || self
                .answer
                .split('.')
                .next()
                .is_some_and(|letter| letter.eq_ignore_ascii_case(choice))
    }

    pub fn feedback(&self, choice: &str) -> String {
        if self.is_correct(choice) {
            format!("Correct! {}", self.explanation)
        } else {
            format!("Incorrect. {}", self.explanation)
        }
    }
}

/// A fixed hand played out against known villains on a known board.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub label: &'static str,
    pub hole: [Card; 2],
    pub villains: &'static [[Card; 2]],
    pub board: [Card; 5],
    pub texture: &'static str,
    pub quizzes: &'static [FlopQuiz],
}

const fn card(value: Value, suit: Suit) -> Card {
    Card::new(value, suit)
}

static SCENARIOS: [Scenario; 2] = [
    Scenario {
        label: "AJ♠ vs 3 players, Flop: J♣7♠5♦",
        hole: [card(Value::Ace, Suit::Spade), card(Value::Jack, Suit::Spade)],
        villains: &[
            [card(Value::King, Suit::Club), card(Value::Queen, Suit::Diamond)],
            [card(Value::Ten, Suit::Spade), card(Value::Nine, Suit::Spade)],
            [card(Value::Seven, Suit::Diamond), card(Value::Seven, Suit::Heart)],
        ],
        board: [
            card(Value::Jack, Suit::Club),
            card(Value::Seven, Suit::Spade),
            card(Value::Five, Suit::Diamond),
            card(Value::Two, Suit::Heart),
            card(Value::Queen, Suit::Club),
        ],
        texture: "Rainbow, One high two low",
        quizzes: &[
            FlopQuiz {
                street: Street::Flop,
                question: "You are on CO with A♠J♠, flop is J♣7♠5♦, you hit top pair. Facing a bet, what's your action?",
                options: &["A. Call", "B. Raise", "C. Fold"],
                answer: "A. Call",
                explanation: "Calling is standard—top pair strong kicker, but raising risks only being called by better hands.",
            },
            FlopQuiz {
                street: Street::Turn,
                question: "Turn is 2♥, villain checks. Should you bet for value or check back?",
                options: &["A. Value Bet", "B. Check Back"],
                answer: "A. Value Bet",
                explanation: "Still ahead most of the time—value bet gets calls from draws or weaker pairs.",
            },
        ],
    },
    Scenario {
        label: "KQ♥ vs 2 players, Flop: T♥9♥2♠ (Flush Draw)",
        hole: [card(Value::King, Suit::Heart), card(Value::Queen, Suit::Heart)],
        villains: &[
            [card(Value::Ace, Suit::Diamond), card(Value::Jack, Suit::Club)],
            [card(Value::Ten, Suit::Club), card(Value::Ten, Suit::Diamond)],
        ],
        board: [
            card(Value::Ten, Suit::Heart),
            card(Value::Nine, Suit::Heart),
            card(Value::Two, Suit::Spade),
            card(Value::Seven, Suit::Spade),
            card(Value::Ace, Suit::Heart),
        ],
        texture: "Two-tone, Straight & Flush draws",
        quizzes: &[FlopQuiz {
            street: Street::Flop,
            question: "You flop a king-high flush draw with two overcards. Should you C-bet?",
            options: &["A. Yes", "B. No"],
            answer: "A. Yes",
            explanation: "Semi-bluffing with strong draws applies pressure and builds the pot for when you hit.",
        }],
    },
];

impl Scenario {
    pub fn all() -> &'static [Scenario] {
        &SCENARIOS
    }

    /// Look a scenario up by its 0 based index.
    pub fn get(index: usize) -> Result<&'static Scenario> {
        SCENARIOS
            .get(index)
            .ok_or(PrimerError::UnknownScenario(index))
    }

    /// The five board slots, `None` for cards not yet dealt on `street`.
    pub fn visible_board(&self, street: Street) -> [Option<Card>; 5] {
        let shown = street.board_cards();
        let mut slots = [None; 5];
        for (slot, card) in slots.iter_mut().zip(self.board).take(shown) {
            *slot = Some(card);
        }
        slots
    }

    /// The board as the learner sees it, unknown cards as `?`.
    pub fn board_display(&self, street: Street) -> String {
        self.visible_board(street)
            .iter()
            .map(|slot| slot.map_or_else(|| "?".to_string(), |c| c.pretty()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Hero's cards in full, each villain as `??`.
    pub fn players_display(&self) -> String {
        let villains = vec!["??"; self.villains.len()].join(" ");
        format!(
            "Your Hand: {} {} Villains: {}",
            self.hole[0].pretty(),
            self.hole[1].pretty(),
            villains
        )
    }

    pub fn is_draw_heavy(&self) -> bool {
        board_texture_tips(&self.board)
            .iter()
            .any(|n| n.is_flush_draw_possible())
    }

    pub fn texture_tip(&self) -> String {
        board_texture_tip(&self.board)
    }

    pub fn quiz_for(&self, street: Street) -> Option<&'static FlopQuiz> {
        self.quizzes.iter().find(|q| q.street == street)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn cards(s: &[&str]) -> Vec<Card> {
        s.iter().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn test_rainbow_high_and_low() {
        assert_eq!(
            vec![TextureNote::Rainbow, TextureNote::HighAndLow],
            board_texture_tips(&cards(&["Jc", "7s", "5d"]))
        );
    }

    #[test]
    fn test_two_tone() {
        assert_eq!(
            vec![TextureNote::TwoTone, TextureNote::HighAndLow],
            board_texture_tips(&cards(&["Th", "9h", "2s"]))
        );
    }

    #[test]
    fn test_monotone() {
        assert_eq!(
            vec![TextureNote::Monotone],
            board_texture_tips(&cards(&["Kd", "Qd", "9d"]))
        );
    }

    #[test]
    fn test_jack_ten_straight_warning() {
        assert_eq!(
            vec![TextureNote::Rainbow, TextureNote::StraightWarning],
            board_texture_tips(&cards(&["Jh", "Tc", "9d"]))
        );
    }

    #[test]
    fn test_paired_board() {
        assert_eq!(
            vec![TextureNote::Rainbow, TextureNote::Paired],
            board_texture_tips(&cards(&["8h", "8d", "Kc"]))
        );
        assert_eq!(
            vec![
                TextureNote::TwoTone,
                TextureNote::HighAndLow,
                TextureNote::Paired
            ],
            board_texture_tips(&cards(&["As", "Ad", "3s"]))
        );
    }

    #[test]
    fn test_only_the_flop_is_read() {
        // The turn would pair the board and the river would add a jack.
        let board = cards(&["Tc", "9h", "4d", "4s", "Jh"]);
        assert_eq!(
            vec![TextureNote::Rainbow, TextureNote::HighAndLow],
            board_texture_tips(&board)
        );
    }

    #[test]
    fn test_tip_text() {
        assert_eq!(STANDARD_FLOP_TIP, board_texture_tip(&[]));
        assert_eq!(
            "Rainbow flop: Flush draws impossible. High card + low card: Aggression can fold out many weak hands.",
            board_texture_tip(&cards(&["Jc", "7s", "5d"]))
        );
    }

    #[test]
    fn test_visible_board_by_street() {
        let scenario = &Scenario::all()[0];
        let flop = scenario.visible_board(Street::Flop);
        assert_eq!(3, flop.iter().filter(|c| c.is_some()).count());
        assert_eq!(None, flop[3]);
        assert_eq!(Some(scenario.board[3]), scenario.visible_board(Street::Turn)[3]);
        assert_eq!(None, scenario.visible_board(Street::Turn)[4]);
        assert!(scenario.visible_board(Street::River).iter().all(Option::is_some));

        assert_eq!("J♣ 7♠ 5♦ ? ?", scenario.board_display(Street::Flop));
        assert_eq!("J♣ 7♠ 5♦ 2♥ ?", scenario.board_display(Street::Turn));
        assert_eq!("J♣ 7♠ 5♦ 2♥ Q♣", scenario.board_display(Street::River));
        assert_eq!(
            "Your Hand: A♠ J♠ Villains: ?? ?? ??",
            scenario.players_display()
        );
    }

    #[test]
    fn test_strategy_hints() {
        let dry = Scenario::get(0).unwrap();
        let wet = Scenario::get(1).unwrap();
        assert!(!dry.is_draw_heavy());
        assert!(wet.is_draw_heavy());

        assert!(strategy_hint(Street::Flop, dry).starts_with("Flop: On dry boards"));
        assert!(strategy_hint(Street::Flop, wet).starts_with("Flop: Draw-heavy board."));
        for scenario in [dry, wet] {
            assert!(strategy_hint(Street::Turn, scenario).starts_with("Turn: "));
            assert!(strategy_hint(Street::River, scenario).starts_with("River: "));
        }
    }

    #[test]
    fn test_quiz_per_street() {
        let first = Scenario::get(0).unwrap();
        assert_eq!(Street::Flop, first.quiz_for(Street::Flop).unwrap().street);
        assert!(first
            .quiz_for(Street::Turn)
            .unwrap()
            .question
            .starts_with("Turn is 2♥"));
        assert_eq!(None, first.quiz_for(Street::River));

        let second = Scenario::get(1).unwrap();
        assert!(second.quiz_for(Street::Flop).is_some());
        assert_eq!(None, second.quiz_for(Street::Turn));

        assert!(matches!(
            Scenario::get(2),
            Err(PrimerError::UnknownScenario(2))
        ));
    }

    #[test]
    fn test_quiz_answers() {
        let quiz = Scenario::get(0).unwrap().quiz_for(Street::Flop).unwrap();
        assert!(quiz.is_correct("A. Call"));
        assert!(quiz.is_correct("a"));
        assert!(quiz.is_correct(" A "));
        assert!(!quiz.is_correct("B"));
        assert!(!quiz.is_correct("B. Raise"));
        assert!(!quiz.is_correct(""));
        assert!(quiz.feedback("A").starts_with("Correct! Calling is standard"));
        assert!(quiz.feedback("C").starts_with("Incorrect. Calling is standard"));
    }

    #[test]
    fn test_scenarios_use_distinct_cards() {
        for scenario in Scenario::all() {
            let mut all: Vec<Card> = scenario.hole.to_vec();
            all.extend(scenario.villains.iter().flatten());
            all.extend(scenario.board);
            let count = all.len();
            all.sort();
            all.dedup();
            assert_eq!(count, all.len(), "{}", scenario.label);
        }
    }

    #[test]
    fn test_street_stepping() {
        assert_eq!(Street::Turn, Street::Flop.next());
        assert_eq!(Street::River, Street::River.next());
        assert_eq!(Street::Flop, Street::Flop.previous());
        assert_eq!(Street::Turn, Street::River.previous());
        assert_eq!(Street::River, "River".parse().unwrap());
        assert!(matches!(
            "preflop".parse::<Street>(),
            Err(PrimerError::UnknownStreet(_))
        ));
    }

    #[test]
    fn test_hand_type_mix_sums_to_one() {
        for street in Street::all() {
            let total: f64 = street.hand_type_mix().iter().map(|(_, share)| share).sum();
            assert_relative_eq!(1.0, total, epsilon = 1e-9);
        }
    }
}
