use log::{debug, info, warn};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use super::{
    cell::{Cell, CellSize, GridSize},
    config::GameConfig,
    direction::{Direction, InputEvent},
    error::{GameError, GameResult},
    snake::{Snake, TailOutcome},
    surface::{Paint, Surface},
};

/// Result of one successful tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The snake moved without eating
    Moved,
    /// The snake ate and is now `length` cells long
    Grew { length: usize },
}

/// The territory where the snake lives.
///
/// Owns the snake, the food and the surface everything is drawn on. One
/// territory is one game session: once `update` returns an error the session
/// is over and the territory should be dropped.
pub struct Territory<S: Surface> {
    config: GameConfig,
    cell_size: CellSize,
    snake: Snake,
    food: Option<Cell>,
    surface: S,
    rng: StdRng,
}

impl<S: Surface> Territory<S> {
    /// Set up a fresh session: clear the surface, put the snake in the
    /// middle and place the first food.
    ///
    /// A grid with no cells is rejected with [`GameError::EmptyGrid`].
    pub fn new(config: GameConfig, surface: S) -> GameResult<Self> {
        let snake = Snake::new(config.grid());
        Self::with_snake(config, surface, snake)
    }

    /// Like [`Territory::new`] but starting from a given snake
    pub fn with_snake(config: GameConfig, mut surface: S, snake: Snake) -> GameResult<Self> {
        let grid = config.grid();
        if grid.area() == 0 {
            return Err(GameError::EmptyGrid {
                width: grid.width,
                height: grid.height,
            });
        }

        surface.clear();

        let (surface_width, surface_height) = surface.size();
        let cell_size = CellSize::from_surface(surface_width, surface_height, config.grid());

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut territory = Self {
            config,
            cell_size,
            snake,
            food: None,
            surface,
            rng,
        };

        for cell in territory.snake.body().to_vec() {
            territory.paint(cell, Paint::Head);
        }
        territory.place_food()?;

        info!(
            "new territory {}x{} cells, {}x{} px per cell",
            territory.config.grid_width,
            territory.config.grid_height,
            cell_size.width,
            cell_size.height
        );

        Ok(territory)
    }

    /// Advance the game by one tick.
    ///
    /// A [`GameError::SelfCollision`] ends the session; the snake, the food
    /// and the surface are left exactly as they were before the tick.
    pub fn update(&mut self) -> GameResult<Tick> {
        let outcome = match self.snake.move_once(self.food) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("tick failed: {}", err);
                return Err(err);
            }
        };

        self.paint(outcome.head, Paint::Head);

        match outcome.tail {
            TailOutcome::Ate { length } => {
                self.place_food()?;
                info!("snake grew to {}", length);
                Ok(Tick::Grew { length })
            }
            TailOutcome::Moved { vacated } => {
                self.paint(vacated, Paint::Ground);
                debug!("head {:?}, vacated {:?}", outcome.head, vacated);
                Ok(Tick::Moved)
            }
        }
    }

    /// Replace the food with a new one on a random cell the snake does not
    /// occupy.
    ///
    /// Tries `max_food_attempts` uniform draws first, then picks among the
    /// free cells directly. Fails only when the snake covers the whole grid.
    pub fn place_food(&mut self) -> GameResult<Cell> {
        self.erase_food();
        let grid = self.grid();

        let mut found = None;
        for _ in 0..self.config.max_food_attempts {
            let cell = Cell::new(
                self.rng.gen_range(0..grid.height),
                self.rng.gen_range(0..grid.width),
            );
            if !self.snake.occupies(cell) {
                found = Some(cell);
                break;
            }
        }

        let cell = match found {
            Some(cell) => cell,
            None => {
                warn!(
                    "no free cell after {} draws, scanning the grid",
                    self.config.max_food_attempts
                );
                self.random_free_cell().ok_or(GameError::TerritoryFull)?
            }
        };

        self.food = Some(cell);
        self.paint(cell, Paint::Food);
        debug!("food placed at {:?}", cell);
        Ok(cell)
    }

    /// Put food on a chosen cell. Returns false, changing nothing, when the
    /// cell is outside the grid or on the snake.
    pub fn place_food_at(&mut self, cell: Cell) -> bool {
        if !self.grid().contains(cell) || self.snake.occupies(cell) {
            return false;
        }
        self.erase_food();
        self.food = Some(cell);
        self.paint(cell, Paint::Food);
        true
    }

    /// Drop the current food. Its cell is repainted as ground unless the
    /// snake is on it.
    fn erase_food(&mut self) {
        if let Some(old) = self.food.take() {
            if !self.snake.occupies(old) {
                self.paint(old, Paint::Ground);
            }
        }
    }

    fn random_free_cell(&mut self) -> Option<Cell> {
        let grid = self.grid();
        let free: Vec<Cell> = grid
            .cells()
            .filter(|cell| !self.snake.occupies(*cell))
            .collect();
        free.choose(&mut self.rng).copied()
    }

    /// Apply a directional input; the new heading is used on the next tick
    pub fn steer(&mut self, event: InputEvent) {
        self.set_direction(event.into());
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    fn paint(&mut self, cell: Cell, paint: Paint) {
        self.surface.fill_rect(self.cell_size.rect_of(cell), paint);
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn grid(&self) -> GridSize {
        self.config.grid()
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current score, which is the length of the snake
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
