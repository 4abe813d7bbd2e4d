//! Snake tests - body movement, growth and the game tick

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use terminal_arcade::core::{ArcadeConfig, Game, Snake, SnakeGame};
use terminal_arcade::types::{Direction, Position, SNAKE_HEIGHT, SNAKE_INITIAL_LENGTH, SNAKE_WIDTH};

const ALL: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Cells covered by the segments, counting shared junctions once.
fn segment_cells(snake: &Snake) -> usize {
    let spans: usize = snake
        .segments()
        .map(|s| ((s.end.x - s.start.x).abs() + (s.end.y - s.start.y).abs()) as usize + 1)
        .sum();
    spans - (snake.segment_count() - 1)
}

fn occupied_cells(game: &SnakeGame) -> usize {
    (0..SNAKE_HEIGHT)
        .flat_map(|y| (0..SNAKE_WIDTH).map(move |x| Position::new(x, y)))
        .filter(|p| game.snake().occupies(*p))
        .count()
}

fn seeded_game() -> SnakeGame {
    SnakeGame::new(&ArcadeConfig::default().with_seed(2024))
}

#[test]
fn test_spawn_then_advance() {
    let mut snake = Snake::new(Position::new(25, 15), Direction::Up, SNAKE_INITIAL_LENGTH);
    snake.advance();
    assert_eq!(snake.head(), Position::new(25, 16));
    assert_eq!(snake.length(), SNAKE_INITIAL_LENGTH);
}

#[test]
fn test_advance_never_changes_length_and_grow_adds_one() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut snake = Snake::new(Position::new(0, 0), Direction::Right, 4);

    for step in 0..500 {
        let choices: Vec<Direction> = ALL
            .iter()
            .copied()
            .filter(|d| *d != snake.direction().opposite())
            .collect();
        if let Some(&d) = choices.choose(&mut rng) {
            snake.set_direction(d);
        }

        let before = snake.length();
        let predicted = snake.position_after_advancing();
        snake.advance();
        assert_eq!(snake.length(), before, "advance changed length at step {}", step);
        assert_eq!(snake.head(), predicted);

        if step % 25 == 0 {
            snake.grow_tail();
            assert_eq!(snake.length(), before + 1);
        }

        // The segments always describe exactly `length` cells.
        assert_eq!(segment_cells(&snake), snake.length(), "step {}", step);
    }
}

#[test]
fn test_body_intersects_matches_occupancy_except_head() {
    let mut snake = Snake::new(Position::new(10, 10), Direction::Up, 6);
    for d in [Direction::Right, Direction::Right, Direction::Down] {
        snake.set_direction(d);
        snake.advance();
    }

    let head = snake.head();
    for y in 0..20 {
        for x in 0..20 {
            let p = Position::new(x, y);
            if p == head {
                assert!(!snake.body_intersects(p));
            } else {
                assert_eq!(snake.body_intersects(p), snake.occupies(p), "{:?}", p);
            }
        }
    }
}

#[test]
fn test_length_after_n_fruits() {
    let mut game = seeded_game();
    let moves = ['d', 'w', 'a', 'w', 'd', 'd', 'w', 'w'];

    for (eaten, &key) in moves.iter().enumerate() {
        game.input(Some(key));
        // Put the fruit right where the head is about to go.
        let mut snake = game.snake().clone();
        if let Some(d) = match key {
            'w' => Some(Direction::Up),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        } {
            if d != snake.direction().opposite() {
                snake.set_direction(d);
            }
        }
        game.set_fruit(snake.position_after_advancing());
        game.process();

        assert!(!game.is_over());
        assert_eq!(game.snake().length(), SNAKE_INITIAL_LENGTH + eaten + 1);
        assert_eq!(game.score(), eaten + 1);
    }
}

#[test]
fn test_eating_does_not_shrink_occupied_cells() {
    let mut game = seeded_game();
    game.set_fruit(Position::new(25, 16));
    let before = occupied_cells(&game);
    assert_eq!(before, SNAKE_INITIAL_LENGTH);

    game.process();

    assert_eq!(game.snake().head(), Position::new(25, 16));
    assert_eq!(game.snake().length(), SNAKE_INITIAL_LENGTH + 1);
    assert!(occupied_cells(&game) >= before);
    assert_eq!(occupied_cells(&game), SNAKE_INITIAL_LENGTH + 1);

    let fruit = game.fruit().unwrap();
    assert!(!game.snake().occupies(fruit));
}

#[test]
fn test_self_collision_ends_game() {
    let config = ArcadeConfig::default().with_seed(3);
    let mut game = SnakeGame::new(&config);
    // Grow to 6 so a tight loop bites the body.
    for _ in 0..3 {
        let next = game.snake().position_after_advancing();
        game.set_fruit(next);
        game.process();
    }
    game.set_fruit(Position::new(0, 0));
    for key in ['d', 's', 'a'] {
        game.input(Some(key));
        game.process();
    }
    assert!(game.is_crashed());
    assert!(game.is_over());
}

#[test]
fn test_reset_after_crash() {
    let mut game = seeded_game();
    game.set_fruit(Position::new(0, 0));
    while !game.is_over() {
        game.input(None);
        game.process();
    }
    assert!(game.is_crashed());

    game.reset();
    assert!(!game.is_over());
    assert_eq!(game.snake().head(), Position::new(25, 15));
    assert_eq!(game.snake().direction(), Direction::Up);
}
