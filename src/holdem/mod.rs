/// Module for the 169 starting hand classes and the 13x13 grid they are
/// drawn on.
mod starting_hand;
/// Export `StartingHand` and the grid helpers
pub use self::starting_hand::{hand_grid, StartingHand, GRID_ORDER};

/// Module for the pre-computed win/tie table and everything derived from it.
mod hand_table;
/// Export `HandTable` and friends
pub use self::hand_table::{
    expected_value, GridCell, HandStats, HandTable, InfoMode, Recommendation, Tier, MAX_PLAYERS,
    MIN_PLAYERS,
};

/// Module with per seat metrics and advice.
mod position;
/// Export `Position`
pub use self::position::{Position, PositionMetrics};

/// Module for narrowing an opponent's range street by street.
mod range;
/// Export range narrowing
pub use self::range::{
    narrow_range, narrowing_stages, range_grid, top_15_range, HandCategory, NarrowingStage,
    Range, RangeAction, RangeComposition, RangePreset, STARTING_HAND_CLASSES,
};

/// Module for balanced bluffing frequencies.
mod bluff;
/// Export `bluff_ratio`
pub use self::bluff::{bluff_ratio, BluffRatio, EXAMPLE_VALUE_COMBOS};

/// Module for preset post-flop spots played street by street.
mod flop;
/// Export `Scenario`, `Street` and the board texture helpers
pub use self::flop::{
    board_texture_tip, board_texture_tips, strategy_hint, FlopQuiz, Scenario, Street,
    TextureNote, STANDARD_FLOP_TIP,
};
