//! Error type shared by the board model, players and the protocol adapter,
//! plus the game outcome reported at the end of a match.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::ship::Orientation;

/// Errors returned by board, player and protocol operations.
#[derive(Debug, thiserror::Error)]
pub enum SalvoError {
    /// Board height or width outside the allowed range.
    #[error("board dimensions {height}x{width} must both be within [6, 15]")]
    InvalidDimensions { height: usize, width: usize },
    /// Coordinate outside the board extent.
    #[error("coordinate {coord} is outside a {height}x{width} board")]
    OutOfBounds {
        coord: Coord,
        height: usize,
        width: usize,
    },
    /// Ship placement overlaps another ship or leaves the board.
    #[error("cannot place a {orientation} ship of length {length} at {origin}")]
    InvalidPlacement {
        origin: Coord,
        orientation: Orientation,
        length: usize,
    },
    /// Stateful player operation called before `setup`.
    #[error("player has not been set up")]
    NotSetUp,
    /// Coordinate with a negative component.
    #[error("coordinates must be non-negative, got ({x}, {y})")]
    InvalidCoordinate { x: i64, y: i64 },
    /// Unknown method tag or malformed payload from the remote peer.
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),
    /// Console or socket I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// Failure encoding an outgoing message.
    #[error("encoding error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Outcome of a finished game from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameResult {
    Win,
    Lose,
    Draw,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            GameResult::Win => "WIN",
            GameResult::Lose => "LOSE",
            GameResult::Draw => "DRAW",
        };
        f.write_str(tag)
    }
}
