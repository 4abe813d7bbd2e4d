//! Construction-time errors.
//!
//! These are programmer errors (bad configuration), not gameplay conditions:
//! invalid moves inside a game are silently ignored and never surface here.

use crate::maze::{MAX_MAZE_HEIGHT, MAX_MAZE_WIDTH};

/// Errors raised while building the arcade or one of its games.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArcadeError {
    #[error("the arcade needs at least one game")]
    NoGames,

    #[error(
        "maze dimensions must be odd, at least 3x3 and at most {}x{} (got {width}x{height})",
        MAX_MAZE_WIDTH,
        MAX_MAZE_HEIGHT
    )]
    InvalidMazeDimensions { width: usize, height: usize },
}
