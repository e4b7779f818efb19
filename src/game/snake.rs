use log::debug;
use std::collections::HashSet;

use super::{
    cell::{Cell, GridSize},
    direction::Direction,
    error::{GameError, GameResult},
};

/// What happened to the tail end of the snake during a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailOutcome {
    /// The head landed on food; the tail stays and the snake is now `length` long
    Ate { length: usize },
    /// The tail moved on and `vacated` is free again
    Moved { vacated: Cell },
}

/// Result of a successful move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub head: Cell,
    pub tail: TailOutcome,
}

/// The one and only snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0. Never empty.
    body: Vec<Cell>,
    direction: Direction,
    grid: GridSize,
}

impl Snake {
    /// A one cell snake in the middle of the grid, facing north
    pub fn new(grid: GridSize) -> Self {
        Self {
            body: vec![grid.center()],
            direction: Direction::North,
            grid,
        }
    }

    /// Build a snake from explicit segments, head first.
    /// Returns `None` for an empty body, a segment outside the grid or two
    /// segments on the same cell.
    pub fn with_body(grid: GridSize, body: Vec<Cell>, direction: Direction) -> Option<Self> {
        if body.is_empty() || body.iter().any(|cell| !grid.contains(*cell)) {
            return None;
        }
        let mut seen = HashSet::with_capacity(body.len());
        if !body.iter().all(|cell| seen.insert(*cell)) {
            return None;
        }
        Some(Self {
            body,
            direction,
            grid,
        })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Change course. Takes effect on the next move; turning back onto the
    /// neck is allowed and simply collides.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn occupies_at(&self, row: u32, col: u32) -> bool {
        self.occupies(Cell::new(row, col))
    }

    /// Move one step: advance the head, then grow or drop the tail depending
    /// on whether the new head is on `food`.
    pub fn move_once(&mut self, food: Option<Cell>) -> GameResult<MoveOutcome> {
        let head = self.advance_head()?;
        let tail = self.resolve_tail(food);
        Ok(MoveOutcome { head, tail })
    }

    /// Prepend the next head cell. The candidate is checked against the body
    /// as it is before the move, so on collision nothing is modified.
    fn advance_head(&mut self) -> GameResult<Cell> {
        let candidate = self.direction.step(self.head(), self.grid);

        if self.occupies(candidate) {
            return Err(GameError::SelfCollision { at: candidate });
        }

        self.body.insert(0, candidate);
        Ok(candidate)
    }

    /// Keep the tail when the head sits on food, drop it otherwise
    fn resolve_tail(&mut self, food: Option<Cell>) -> TailOutcome {
        if food == Some(self.head()) {
            debug!("snake ate at {:?}, length {}", self.head(), self.body.len());
            return TailOutcome::Ate {
                length: self.body.len(),
            };
        }

        // advance_head always runs first, so there are at least two segments
        let vacated = self.tail();
        self.body.truncate(self.body.len() - 1);
        TailOutcome::Moved { vacated }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
