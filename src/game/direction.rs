use super::cell::{Cell, GridSize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The neighbour of `cell` in this direction. Leaving the grid on any
    /// side re-enters it on the opposite side.
    pub fn step(&self, cell: Cell, grid: GridSize) -> Cell {
        let Cell { row, col } = cell;
        match self {
            Direction::North => Cell::new(if row == 0 { grid.height - 1 } else { row - 1 }, col),
            Direction::South => Cell::new((row + 1) % grid.height, col),
            Direction::West => Cell::new(row, if col == 0 { grid.width - 1 } else { col - 1 }),
            Direction::East => Cell::new(row, (col + 1) % grid.width),
        }
    }
}

/// Discrete directional input delivered by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Up,
    Right,
    Down,
    Left,
}

impl From<InputEvent> for Direction {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::Up => Direction::North,
            InputEvent::Right => Direction::East,
            InputEvent::Down => Direction::South,
            InputEvent::Left => Direction::West,
        }
    }
}
