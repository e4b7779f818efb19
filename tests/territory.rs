use canvas_snake::game::{
    Cell, Direction, GameConfig, GameError, InputEvent, Paint, Snake, Surface, Territory, Tick,
};
use canvas_snake::render::PixelCanvas;

fn canvas(config: &GameConfig) -> PixelCanvas {
    PixelCanvas::new(config.surface_width, config.surface_height)
}

fn territory_with(body: &[(u32, u32)], direction: Direction, seed: u64) -> Territory<PixelCanvas> {
    let config = GameConfig::default().with_seed(seed);
    let cells = body.iter().map(|&(r, c)| Cell::new(r, c)).collect();
    let snake = Snake::with_body(config.grid(), cells, direction).unwrap();
    let canvas = canvas(&config);
    Territory::with_snake(config, canvas, snake).unwrap()
}

fn paint_at(territory: &Territory<PixelCanvas>, cell: Cell) -> Option<Paint> {
    territory
        .surface()
        .pixel(cell.to_point(territory.cell_size()))
}

#[test]
fn starts_in_the_center_heading_north() {
    let config = GameConfig::default().with_seed(1);
    let canvas = canvas(&config);
    let mut territory = Territory::new(config, canvas).unwrap();
    territory.place_food_at(Cell::new(0, 0));

    assert_eq!(territory.update(), Ok(Tick::Moved));
    assert_eq!(territory.snake().body(), &[Cell::new(9, 10)]);

    assert_eq!(territory.update(), Ok(Tick::Moved));
    assert_eq!(territory.snake().body(), &[Cell::new(8, 10)]);

    assert_eq!(paint_at(&territory, Cell::new(8, 10)), Some(Paint::Head));
    assert_eq!(paint_at(&territory, Cell::new(9, 10)), Some(Paint::Ground));
    assert_eq!(paint_at(&territory, Cell::new(10, 10)), Some(Paint::Ground));
}

#[test]
fn eating_grows_and_moves_food_elsewhere() {
    let mut territory = territory_with(&[(5, 5), (5, 6)], Direction::West, 21);
    assert!(territory.place_food_at(Cell::new(5, 4)));

    assert_eq!(territory.update(), Ok(Tick::Grew { length: 3 }));
    assert_eq!(
        territory.snake().body(),
        &[Cell::new(5, 4), Cell::new(5, 5), Cell::new(5, 6)]
    );

    let food = territory.food().unwrap();
    assert!(!territory.snake().occupies(food));
    assert_eq!(paint_at(&territory, food), Some(Paint::Food));
    assert_eq!(paint_at(&territory, Cell::new(5, 4)), Some(Paint::Head));
}

#[test]
fn reversing_a_three_cell_snake_collides() {
    let mut territory = territory_with(&[(5, 5), (5, 4), (5, 3)], Direction::East, 8);

    territory.steer(InputEvent::Left);
    let before = territory.surface().clone();

    assert_eq!(
        territory.update(),
        Err(GameError::SelfCollision {
            at: Cell::new(5, 4)
        })
    );
    assert_eq!(
        territory.snake().body(),
        &[Cell::new(5, 5), Cell::new(5, 4), Cell::new(5, 3)]
    );
    assert_eq!(territory.surface(), &before);
}

#[test]
fn continuing_a_three_cell_snake_is_safe() {
    let mut territory = territory_with(&[(5, 5), (5, 4), (5, 3)], Direction::East, 8);
    territory.place_food_at(Cell::new(0, 0));

    assert_eq!(territory.update(), Ok(Tick::Moved));
    assert_eq!(
        territory.snake().body(),
        &[Cell::new(5, 6), Cell::new(5, 5), Cell::new(5, 4)]
    );
}

#[test]
fn wraps_on_every_edge() {
    let cases = [
        ((0, 7), InputEvent::Up, Cell::new(19, 7)),
        ((19, 7), InputEvent::Down, Cell::new(0, 7)),
        ((7, 0), InputEvent::Left, Cell::new(7, 19)),
        ((7, 19), InputEvent::Right, Cell::new(7, 0)),
    ];

    for (start, input, expected) in cases {
        let mut territory = territory_with(&[start], Direction::North, 13);
        territory.place_food_at(Cell::new(12, 12));
        territory.steer(input);

        territory.update().unwrap();
        assert_eq!(territory.snake().head(), expected, "moving {:?}", input);
    }
}

#[test]
fn length_only_changes_when_eating() {
    let mut territory = territory_with(&[(3, 3)], Direction::East, 99);
    let mut length = territory.snake().len();
    let (mut moved, mut grew) = (0, 0);

    for i in 0..40 {
        // Every fourth tick the food sits right in front of the head
        if i % 4 == 0 {
            let ahead = Cell::new(3, (territory.snake().head().col + 1) % 20);
            assert!(territory.place_food_at(ahead));
        }

        match territory.update() {
            Ok(Tick::Moved) => {
                assert_eq!(territory.snake().len(), length);
                moved += 1;
            }
            Ok(Tick::Grew { length: grown }) => {
                assert_eq!(grown, length + 1);
                assert_eq!(territory.snake().len(), grown);
                length = grown;
                grew += 1;
            }
            Err(err) => panic!("unexpected error {err}"),
        }

        let food = territory.food().unwrap();
        assert!(!territory.snake().occupies(food));
    }

    assert!(grew >= 10, "grew {grew} times");
    assert!(moved > 0);
    assert_eq!(length, 1 + grew);
}

#[test]
fn replacing_food_leaves_a_single_food_cell() {
    let config = GameConfig::default().with_seed(7);
    let canvas = canvas(&config);
    let mut territory = Territory::new(config, canvas).unwrap();
    let cell_pixels = {
        let size = territory.cell_size();
        (size.width * size.height) as usize
    };

    territory.place_food().unwrap();
    territory.place_food().unwrap();

    assert_eq!(territory.surface().count(Paint::Food), cell_pixels);
    assert_eq!(paint_at(&territory, territory.food().unwrap()), Some(Paint::Food));
}

#[test]
fn canvas_matches_snake_and_food() {
    let mut territory = territory_with(&[(2, 2), (2, 1), (2, 0)], Direction::East, 5);
    territory.place_food_at(Cell::new(15, 15));

    for _ in 0..5 {
        territory.update().unwrap();
    }

    let grid = territory.grid();
    for cell in grid.cells() {
        let expected = if territory.snake().occupies(cell) {
            Paint::Head
        } else if territory.food() == Some(cell) {
            Paint::Food
        } else {
            Paint::Ground
        };
        assert_eq!(paint_at(&territory, cell), Some(expected), "cell {:?}", cell);
    }
}

#[test]
fn cell_size_comes_from_the_surface() {
    let mut config = GameConfig::default().with_seed(3);
    config.surface_width = 410;
    config.surface_height = 389;
    let canvas = canvas(&config);

    let territory = Territory::new(config, canvas).unwrap();
    let size = territory.cell_size();
    assert_eq!((size.width, size.height), (21, 19));
    assert_eq!(territory.surface().size(), (410, 389));
}
