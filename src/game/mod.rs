//! Core game logic module for Snake
//!
//! This module contains all the game logic. Drawing goes through the
//! [`Surface`] trait, so nothing here depends on a terminal or a window.

pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod snake;
pub mod surface;
pub mod territory;

// Re-export commonly used types
pub use cell::{Cell, CellSize, GridSize, PixelRect, Point};
pub use config::GameConfig;
pub use direction::{Direction, InputEvent};
pub use error::{GameError, GameResult};
pub use snake::{MoveOutcome, Snake, TailOutcome};
pub use surface::{Paint, Surface};
pub use territory::{Tick, Territory};
