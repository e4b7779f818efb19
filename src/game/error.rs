use std::fmt;

use super::cell::Cell;

/// Conditions that end a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The snake's next head position is already part of its body
    SelfCollision { at: Cell },
    /// No free cell is left to put food on
    TerritoryFull,
    /// The grid has no cells at all
    EmptyGrid { width: u32, height: u32 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::SelfCollision { at } => {
                write!(f, "snake ran into itself at ({}, {})", at.row, at.col)
            }
            GameError::TerritoryFull => write!(f, "no free cell left for food"),
            GameError::EmptyGrid { width, height } => {
                write!(f, "a {}x{} grid has no cells to play on", width, height)
            }
        }
    }
}

impl std::error::Error for GameError {}

pub type GameResult<T> = Result<T, GameError>;
