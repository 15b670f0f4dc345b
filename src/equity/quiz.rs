use std::fmt;

use rand::{seq::SliceRandom, Rng};

use crate::core::{flush_draw_suit, has_straight_draw, value_set, Card, PrimerError, Result, Suit};

/// A draw the outs quiz recognises.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Draw {
    /// Four cards of one suit.
    Flush(Suit),
    /// Four of five consecutive values.
    Straight,
}

impl Draw {
    /// Outs credited for the draw. Nine cards complete a flush; a straight
    /// draw is counted as four whether it is open ended or not.
    pub fn outs(self) -> u8 {
        match self {
            Draw::Flush(_) => 9,
            Draw::Straight => 4,
        }
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Draw::Flush(_) => write!(f, "Flush draw → {} outs", self.outs()),
            Draw::Straight => write!(f, "Straight draw → approx. {} outs", self.outs()),
        }
    }
}

/// Outs found in a hole cards plus flop spot.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutsCount {
    pub total: u8,
    pub draws: Vec<Draw>,
}

impl OutsCount {
    /// The draws joined for display, or a note that there are none.
    pub fn explanation(&self) -> String {
        if self.draws.is_empty() {
            "No major draws.".to_string()
        } else {
            self.draws
                .iter()
                .map(Draw::to_string)
                .collect::<Vec<_>>()
                .join(" | ")
        }
    }
}

/// Count the one card outs for the classic draws. Backdoor (runner-runner)
/// draws are not outs.
pub fn count_outs(hole: &[Card], flop: &[Card]) -> OutsCount {
    let cards: Vec<Card> = hole.iter().chain(flop).copied().collect();
    let mut draws = Vec::new();
    if let Some(suit) = flush_draw_suit(&cards) {
        draws.push(Draw::Flush(suit));
    }
    if has_straight_draw(value_set(&cards)) {
        draws.push(Draw::Straight);
    }
    OutsCount {
        total: draws.iter().map(|d| d.outs()).sum(),
        draws,
    }
}

/// How an answer to the quiz was judged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizFeedback {
    Correct(OutsCount),
    /// The learner counted one or two outs on a board with none, most likely
    /// hoping for two perfect cards in a row.
    RunnerRunner,
    Incorrect(OutsCount),
}

impl QuizFeedback {
    pub fn is_correct(&self) -> bool {
        matches!(self, QuizFeedback::Correct(_))
    }
}

impl fmt::Display for QuizFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizFeedback::Correct(count) => write!(f, "✅ Correct! {}", count.explanation()),
            QuizFeedback::RunnerRunner => f.write_str(
                "🧠 Nice thinking! You're probably hoping for a runner-runner straight, \
                 two perfect cards in a row. That is not counted in standard outs, which \
                 only include one-card draws. Correct outs: 0. No major draws.",
            ),
            QuizFeedback::Incorrect(count) => write!(
                f,
                "❌ Not quite. Correct = {}. {}",
                count.total,
                count.explanation()
            ),
        }
    }
}

/// One "count the outs" question: two hole cards and a flop.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "QuizCards"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutsQuiz {
    pub hole: [Card; 2],
    pub flop: [Card; 3],
}

/// Unchecked wire form of [`OutsQuiz`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct QuizCards {
    hole: [Card; 2],
    flop: [Card; 3],
}

#[cfg(feature = "serde")]
impl TryFrom<QuizCards> for OutsQuiz {
    type Error = PrimerError;

    fn try_from(cards: QuizCards) -> Result<Self> {
        OutsQuiz::new(cards.hole, cards.flop)
    }
}

impl OutsQuiz {
    /// Build a question from known cards. Every card must be distinct.
    pub fn new(hole: [Card; 2], flop: [Card; 3]) -> Result<Self> {
        let mut seen: Vec<Card> = Vec::with_capacity(5);
        for card in hole.iter().chain(flop.iter()) {
            if seen.contains(card) {
                return Err(PrimerError::DuplicateCard(card.to_string()));
            }
            seen.push(*card);
        }
        Ok(Self { hole, flop })
    }

    /// Deal a fresh question from a shuffled deck.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Card::deck();
        deck.shuffle(rng);
        Self {
            hole: [deck[0], deck[1]],
            flop: [deck[2], deck[3], deck[4]],
        }
    }

    pub fn question(&self) -> String {
        format!(
            "You hold {} and {}. Flop: {}, {}, {}",
            self.hole[0].pretty(),
            self.hole[1].pretty(),
            self.flop[0].pretty(),
            self.flop[1].pretty(),
            self.flop[2].pretty(),
        )
    }

    pub fn outs(&self) -> OutsCount {
        count_outs(&self.hole, &self.flop)
    }

    pub fn check(&self, answer: u8) -> QuizFeedback {
        let count = self.outs();
        if count.total == 0 && (1..=2).contains(&answer) {
            QuizFeedback::RunnerRunner
        } else if answer == count.total {
            QuizFeedback::Correct(count)
        } else {
            QuizFeedback::Incorrect(count)
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn quiz(hole: [&str; 2], flop: [&str; 3]) -> OutsQuiz {
        OutsQuiz::new(
            hole.map(|c| c.parse().unwrap()),
            flop.map(|c| c.parse().unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn test_flush_and_straight_draw_is_thirteen() {
        // The chapter example: T♠ J♠ on K♠ 2♠ Q♦
        let q = quiz(["Ts", "Js"], ["Ks", "2s", "Qd"]);
        let count = q.outs();
        assert_eq!(13, count.total);
        assert_eq!(vec![Draw::Flush(Suit::Spade), Draw::Straight], count.draws);
        assert!(q.check(13).is_correct());
    }

    #[test]
    fn test_flush_draw_only() {
        let q = quiz(["Ah", "7h"], ["Kh", "2h", "9c"]);
        assert_eq!(9, q.outs().total);
        assert_eq!(
            "❌ Not quite. Correct = 9. Flush draw → 9 outs",
            q.check(4).to_string()
        );
    }

    #[test]
    fn test_runner_runner_answer() {
        let q = quiz(["Ah", "Kd"], ["7c", "4s", "2h"]);
        assert_eq!(0, q.outs().total);
        assert_eq!(QuizFeedback::RunnerRunner, q.check(2));
        assert_eq!(QuizFeedback::RunnerRunner, q.check(1));
        assert!(q.check(0).is_correct());
        assert_eq!("✅ Correct! No major draws.", q.check(0).to_string());
        assert!(matches!(q.check(5), QuizFeedback::Incorrect(_)));
    }

    #[test]
    fn test_duplicate_cards_rejected() {
        let result = OutsQuiz::new(
            ["As".parse().unwrap(), "Kd".parse().unwrap()],
            [
                "As".parse().unwrap(),
                "2c".parse().unwrap(),
                "3c".parse().unwrap(),
            ],
        );
        assert!(matches!(result, Err(PrimerError::DuplicateCard(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_duplicate_cards() {
        let q = quiz(["Ah", "7h"], ["Kh", "2h", "9c"]);
        let json = serde_json::to_string(&q).unwrap();
        let back: OutsQuiz = serde_json::from_str(&json).unwrap();
        assert_eq!(q, back);

        let mut dup = q;
        dup.flop[2] = dup.hole[0];
        let json = serde_json::to_string(&dup).unwrap();
        let err = serde_json::from_str::<OutsQuiz>(&json).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_dealt_quiz_has_distinct_cards() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let q = OutsQuiz::deal(&mut rng);
            assert!(OutsQuiz::new(q.hole, q.flop).is_ok());
            assert!(q.question().starts_with("You hold "));
        }
    }
}
