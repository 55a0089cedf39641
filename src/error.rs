use crate::TermInt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("terminal is {width}x{height}, need at least {min_width}x{min_height}")]
    TerminalTooSmall {
        width: TermInt,
        height: TermInt,
        min_width: TermInt,
        min_height: TermInt,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
