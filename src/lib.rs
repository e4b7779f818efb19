//! Canvas Snake - the classic snake game on a wrapping grid
//!
//! This library provides:
//! - Core game logic drawing onto an abstract pixel surface (game module)
//! - An in-memory pixel canvas and a terminal renderer (render module)
//! - Keyboard input mapping (input module)
//! - The interactive terminal front end (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
