use thiserror::Error;

/// Errors produced while parsing cards, hands and lesson inputs, or while
/// loading the starting hand table.
#[derive(Error, Debug)]
pub enum PrimerError {
    #[error("Unexpected value character {0:?}")]
    UnexpectedValueChar(char),
    #[error("Unexpected suit character {0:?}")]
    UnexpectedSuitChar(char),
    #[error("Card {0:?} should be exactly two characters like \"As\"")]
    InvalidCard(String),
    #[error("Card {0} appears more than once")]
    DuplicateCard(String),
    #[error("Invalid starting hand notation: {0}")]
    InvalidStartingHand(String),
    #[error("Outs must be between 0 and {max}, got {outs}")]
    InvalidOuts { outs: u8, max: u8 },
    #[error("Cards to come must be 1 or 2, got {0}")]
    InvalidCardsToCome(u8),
    #[error("Monte carlo estimates need at least one trial")]
    InvalidTrialCount,
    #[error("Unknown estimate method: {0}")]
    UnknownMethod(String),
    #[error("Unknown table position: {0}")]
    UnknownPosition(String),
    #[error("Unknown range action: {0}")]
    UnknownRangeAction(String),
    #[error("Unknown street: {0}")]
    UnknownStreet(String),
    #[error("No flop scenario with index {0}")]
    UnknownScenario(usize),
    #[error("Unknown info mode: {0}")]
    UnknownInfoMode(String),
    #[error("Player count must be between 2 and 10, got {0}")]
    InvalidPlayerCount(usize),
    #[error("Hand table line {line}: {reason}")]
    MalformedTable { line: usize, reason: String },
    #[error("Hand {0} is not in the table")]
    UnknownHand(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for parsing and table operations.
pub type Result<T> = std::result::Result<T, PrimerError>;
