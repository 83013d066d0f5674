/// All the possible recoverable errors produced by the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The column index lies outside the board.
    InvalidColumn,
    /// Every row of the column is already occupied.
    ColumnFull,
    /// The board dimensions cannot hold a four-in-a-row.
    InvalidDim,
    /// Unrecognized text on stdin.
    InvalidInput(String),
}

/// Result type making use of custom errors.
pub type GameResult<T> = Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidColumn => write!(f, "column is outside the board"),
            Self::ColumnFull => write!(f, "column is already full"),
            Self::InvalidDim => write!(f, "board dimensions must be at least 4x4"),
            Self::InvalidInput(s) => write!(f, "unrecognized input: {s:?}"),
        }
    }
}

impl std::error::Error for Error {}
