//! Snake game - the classic arcade game on a bounded grid.
//!
//! The grid origin is the bottom-left corner; rows are flipped when drawing.
//! This is the only game with a bounded input wait, so the snake keeps
//! moving even when no key is pressed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::ArcadeConfig;
use crate::game::{Displayable, Game};
use crate::snake::Snake;
use crate::types::{
    Action, Color, ColorPair, Direction, Frame, GameInfo, InputContext, InputPolicy, KeyBinding,
    Point, Position, SNAKE_HEIGHT, SNAKE_INITIAL_LENGTH, SNAKE_WIDTH,
};

const INFO: GameInfo = GameInfo {
    title: "Snake",
    author: "Terminal Arcade",
    about: "Eat as many fruits as possible without crashing\ninto the walls or into yourself.",
    key_bindings: &[
        KeyBinding { key: "w", action: "up" },
        KeyBinding { key: "a", action: "left" },
        KeyBinding { key: "s", action: "down" },
        KeyBinding { key: "d", action: "right" },
        KeyBinding { key: "q", action: "quit" },
    ],
};

const BODY: Point = Point::new('o', ColorPair::new(Color::Green, Color::Black));
const HEAD: Point = Point::new('@', ColorPair::new(Color::Yellow, Color::Black));
const FRUIT: Point = Point::new('*', ColorPair::new(Color::Red, Color::Black));
const BACKGROUND: Point = Point::new(' ', ColorPair::new(Color::Black, Color::Black));
const VERTICAL_BORDER: Point = Point::new('|', ColorPair::new(Color::White, Color::Black));
const HORIZONTAL_BORDER: Point = Point::new('-', ColorPair::new(Color::White, Color::Black));
const STATUS: ColorPair = ColorPair::new(Color::White, Color::Black);

pub struct SnakeGame {
    width: i32,
    height: i32,
    tick: std::time::Duration,
    rng: StdRng,
    snake: Snake,
    /// `None` once the grid is full.
    fruit: Option<Position>,
    pending: Option<Direction>,
    crashed: bool,
    quit: bool,
}

impl SnakeGame {
    pub fn new(config: &ArcadeConfig) -> Self {
        let mut game = Self {
            width: SNAKE_WIDTH,
            height: SNAKE_HEIGHT,
            tick: config.snake_tick,
            rng: config.rng(1),
            snake: spawn_snake(SNAKE_WIDTH, SNAKE_HEIGHT),
            fruit: None,
            pending: None,
            crashed: false,
            quit: false,
        };
        game.fruit = game.random_free_position(None);
        game
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruit(&self) -> Option<Position> {
        self.fruit
    }

    /// Place the fruit explicitly (tests and demos).
    pub fn set_fruit(&mut self, fruit: Position) {
        self.fruit = Some(fruit);
    }

    pub fn score(&self) -> usize {
        self.snake.length() - SNAKE_INITIAL_LENGTH
    }

    pub fn is_crashed(&self) -> bool {
        self.crashed
    }

    fn in_bounds(&self, p: Position) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Uniformly random cell not covered by the snake (nor by `reserved`).
    fn random_free_position(&mut self, reserved: Option<Position>) -> Option<Position> {
        let free: Vec<Position> = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Position::new(x, y)))
            .filter(|p| !self.snake.occupies(*p) && Some(*p) != reserved)
            .collect();
        free.choose(&mut self.rng).copied()
    }
}

fn spawn_snake(width: i32, height: i32) -> Snake {
    Snake::new(
        Position::new(width / 2, height / 2),
        Direction::Up,
        SNAKE_INITIAL_LENGTH,
    )
}

impl Game for SnakeGame {
    fn info(&self) -> &GameInfo {
        &INFO
    }

    fn input_policy(&self) -> InputPolicy {
        InputPolicy::Timeout(self.tick)
    }

    fn input(&mut self, key: Option<char>) {
        let Some(key) = key else { return };
        match Action::from_key(InputContext::Play, key) {
            Some(Action::Move(direction)) => {
                // Turning straight back into the neck is ignored.
                if direction != self.snake.direction().opposite() {
                    self.pending = Some(direction);
                }
            }
            Some(Action::Back) => self.quit = true,
            _ => {}
        }
    }

    fn process(&mut self) {
        if self.is_over() {
            return;
        }

        if let Some(direction) = self.pending.take() {
            self.snake.set_direction(direction);
        }

        let next = self.snake.position_after_advancing();
        if self.fruit == Some(next) {
            self.snake.grow_tail();
            self.fruit = self.random_free_position(Some(next));
        }

        self.snake.advance();

        let head = self.snake.head();
        if !self.in_bounds(head) || self.snake.body_intersects(head) {
            self.crashed = true;
            tracing::info!(score = self.score(), "snake crashed");
        }
    }

    fn is_over(&self) -> bool {
        self.crashed || self.quit || self.fruit.is_none()
    }

    fn reset(&mut self) {
        self.snake = spawn_snake(self.width, self.height);
        self.pending = None;
        self.crashed = false;
        self.quit = false;
        self.fruit = self.random_free_position(None);
    }
}

impl Displayable for SnakeGame {
    fn color_pairs(&self) -> Vec<ColorPair> {
        vec![
            BODY.pair,
            HEAD.pair,
            FRUIT.pair,
            BACKGROUND.pair,
            VERTICAL_BORDER.pair,
            HORIZONTAL_BORDER.pair,
            STATUS,
        ]
    }

    fn frame(&self) -> Frame {
        let w = self.width as u16 + 2;
        let h = self.height as u16 + 3;
        let mut frame = Frame::filled(w, h, BACKGROUND);

        frame.fill_rect(0, 0, w, 1, HORIZONTAL_BORDER);
        frame.fill_rect(0, h - 2, w, 1, HORIZONTAL_BORDER);

        let head = self.snake.head();
        for y in 0..self.height {
            // Flip: y grows upwards, terminal rows grow downwards.
            let row = (self.height - y) as u16;
            frame.set(0, row, VERTICAL_BORDER);
            frame.set(w - 1, row, VERTICAL_BORDER);
            for x in 0..self.width {
                let pos = Position::new(x, y);
                let point = if pos == head {
                    HEAD
                } else if self.snake.occupies(pos) {
                    BODY
                } else if self.fruit == Some(pos) {
                    FRUIT
                } else {
                    continue;
                };
                frame.set(x as u16 + 1, row, point);
            }
        }

        frame.fill_rect(0, h - 1, w, 1, Point::new(' ', STATUS));
        frame.put_str(1, h - 1, &format!("Score: {}", self.score()), STATUS);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> SnakeGame {
        SnakeGame::new(&ArcadeConfig::default().with_seed(42))
    }

    #[test]
    fn spawns_centered_facing_up() {
        let g = game();
        assert_eq!(g.snake().head(), Position::new(25, 15));
        assert_eq!(g.snake().direction(), Direction::Up);
        assert_eq!(g.snake().length(), SNAKE_INITIAL_LENGTH);
        let fruit = g.fruit().unwrap();
        assert!(!g.snake().occupies(fruit));
    }

    #[test]
    fn reversal_is_ignored() {
        let mut g = game();
        g.input(Some('s'));
        g.set_fruit(Position::new(0, 0));
        g.process();
        assert_eq!(g.snake().head(), Position::new(25, 16));
        assert!(!g.is_over());
    }

    #[test]
    fn timeout_advances_without_input() {
        let mut g = game();
        g.set_fruit(Position::new(0, 0));
        g.input(None);
        g.process();
        g.input(None);
        g.process();
        assert_eq!(g.snake().head(), Position::new(25, 17));
        assert_eq!(g.input_policy(), InputPolicy::Timeout(ArcadeConfig::default().snake_tick));
    }

    #[test]
    fn leaving_the_grid_ends_the_game() {
        let mut g = game();
        g.set_fruit(Position::new(0, 0));
        for _ in 0..SNAKE_HEIGHT {
            g.process();
        }
        assert!(g.is_crashed());
        assert!(g.is_over());
    }

    #[test]
    fn quit_key_ends_the_game() {
        let mut g = game();
        g.input(Some('q'));
        assert!(g.is_over());
        assert!(!g.is_crashed());
    }

    #[test]
    fn reset_restores_a_fresh_snake() {
        let mut g = game();
        g.set_fruit(Position::new(25, 16));
        g.process();
        g.input(Some('q'));
        g.reset();
        assert!(!g.is_over());
        assert_eq!(g.snake().length(), SNAKE_INITIAL_LENGTH);
        assert_eq!(g.snake().head(), Position::new(25, 15));
        assert_eq!(g.score(), 0);
    }

    #[test]
    fn frame_shows_head_at_flipped_row() {
        let g = game();
        let frame = g.frame();
        assert_eq!(frame.width(), SNAKE_WIDTH as u16 + 2);
        assert_eq!(frame.height(), SNAKE_HEIGHT as u16 + 3);
        // y = 15 is drawn on row height - 15.
        let row = (SNAKE_HEIGHT - 15) as u16;
        assert_eq!(frame.get(26, row).unwrap(), HEAD);
        assert_eq!(frame.get(26, row + 1).unwrap(), BODY);
        assert_eq!(frame.get(0, row).unwrap(), VERTICAL_BORDER);
        assert_eq!(frame.get(0, 0).unwrap(), HORIZONTAL_BORDER);
    }
}
