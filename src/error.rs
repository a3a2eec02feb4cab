use thiserror::Error;

use crate::env::Direction;

/// Errors of the game and configuration layers.
///
/// The search algorithms themselves do not fail; misuse of their
/// preconditions is a contract violation and panics.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid layout (line {line}): {message}")]
    Layout { line: usize, message: String },

    #[error("unknown layout '{0}'")]
    UnknownLayout(String),

    #[error("illegal action {action:?} for agent {agent}")]
    IllegalAction { agent: usize, action: Direction },

    #[error("search depth has to be at least 1, got {0}")]
    InvalidDepth(usize),

    #[error("invalid agent config: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
