use super::card::{Card, Suit, Value};

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u32 = 0b1_0000_0000_1111;
/// Five adjacent values starting at the deuce.
const WINDOW: u32 = 0b1_1111;
/// Lowest value of the highest possible window (ten through ace).
const LAST_WINDOW_START: u32 = Value::Ten as u32;

/// Build the 13 bit set of values present in `cards`.
pub fn value_set(cards: &[Card]) -> u32 {
    cards.iter().fold(0, |set, card| set | card.value.bit())
}

/// Does the value set already contain five values in a row?
pub fn has_straight(value_set: u32) -> bool {
    let run =
        value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    run != 0 || value_set & WHEEL == WHEEL
}

/// Is there a five value window (the wheel included) holding exactly four
/// of the values, with no straight made yet?
///
/// Both open ended and gutshot draws count. The draw is worth roughly four
/// outs either way, which is what the quiz teaches.
pub fn has_straight_draw(value_set: u32) -> bool {
    if has_straight(value_set) {
        return false;
    }
    let windows = (0..=LAST_WINDOW_START).map(|start| WINDOW << start);
    std::iter::once(WHEEL)
        .chain(windows)
        .any(|window| (value_set & window).count_ones() == 4)
}

/// The suit with exactly four cards, if any.
///
/// Five or more of a suit is a made flush, not a draw.
pub fn flush_draw_suit(cards: &[Card]) -> Option<Suit> {
    Suit::suits()
        .into_iter()
        .find(|suit| cards.iter().filter(|c| c.suit == *suit).count() == 4)
}
