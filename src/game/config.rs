use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::cell::{CellSize, GridSize};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: u32,
    /// Height of the game grid in cells
    pub grid_height: u32,
    /// Width of the drawing surface in pixels
    pub surface_width: u32,
    /// Height of the drawing surface in pixels
    pub surface_height: u32,
    /// Time between two ticks
    pub tick_interval_ms: u64,
    /// Random draws tried before food placement scans for free cells
    pub max_food_attempts: u32,
    /// Fixed seed for food placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            surface_width: 400,
            surface_height: 400,
            tick_interval_ms: 250,
            max_food_attempts: 1000,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn grid(&self) -> GridSize {
        GridSize::new(self.grid_width, self.grid_height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Read a configuration from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width > 0 && self.grid_height > 0,
            "grid must be at least 1x1, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.surface_width >= self.grid_width && self.surface_height >= self.grid_height,
            "surface {}x{} is too small for a {}x{} grid",
            self.surface_width,
            self.surface_height,
            self.grid_width,
            self.grid_height
        );
        // Rounded cells must still fit, or the last rows and columns get clipped
        let cell = CellSize::from_surface(self.surface_width, self.surface_height, self.grid());
        ensure!(
            cell.width * self.grid_width <= self.surface_width
                && cell.height * self.grid_height <= self.surface_height,
            "{}x{} px cells overflow the {}x{} surface; pick a size that divides more evenly",
            cell.width,
            cell.height,
            self.surface_width,
            self.surface_height
        );
        ensure!(self.tick_interval_ms > 0, "tick interval must be positive");
        Ok(())
    }
}
