use serde::{Deserialize, Serialize};

/// Dimensions of the territory, counted in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of cells in the grid
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The cell the snake starts on
    pub fn center(&self) -> Cell {
        Cell::new(self.height / 2, self.width / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Every cell of the grid, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(row, col)))
    }
}

/// A single grid position, zero based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Top-left pixel of this cell
    pub fn to_point(&self, size: CellSize) -> Point {
        size.point_of(*self)
    }
}

/// A pixel coordinate. The origin is the top-left corner of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Axis aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Pixel dimensions of one cell.
///
/// Computed once when the territory is set up and then passed by value to
/// whatever needs to turn cells into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Derive the cell size from the surface size, rounding to the nearest
    /// pixel so adjacent cells never leave gaps between them.
    pub fn from_surface(surface_width: u32, surface_height: u32, grid: GridSize) -> Self {
        Self {
            width: round_div(surface_width, grid.width),
            height: round_div(surface_height, grid.height),
        }
    }

    pub fn point_of(&self, cell: Cell) -> Point {
        Point::new(cell.col * self.width, cell.row * self.height)
    }

    pub fn rect_of(&self, cell: Cell) -> PixelRect {
        let Point { x, y } = self.point_of(cell);
        PixelRect {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

/// floor(numerator / denominator + 0.5) in integer arithmetic
fn round_div(numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }
    let numerator = numerator as u64;
    let denominator = denominator as u64;
    ((2 * numerator + denominator) / (2 * denominator)) as u32
}
