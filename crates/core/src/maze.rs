//! Maze - randomized perfect-maze generation and player traversal
//!
//! Passages sit on even coordinates; odd coordinates are the walls between
//! them that the generator may carve away. Generation is an iterative
//! depth-first "backtracker" with an explicit stack, so every floor cell is
//! reachable from the origin and there is exactly one path between any two
//! floor cells.
//!
//! The player spawns at the origin (bottom-left) and has to reach the
//! opposite corner.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::ArcadeConfig;
use crate::error::ArcadeError;
use crate::game::{Displayable, Game};
use crate::types::{
    Action, Color, ColorPair, Direction, Frame, GameInfo, InputContext, KeyBinding, Point,
    Position, MAZE_CELL_COLUMNS,
};

/// Largest maze width whose frame still fits in `u16` columns.
pub const MAX_MAZE_WIDTH: usize = u16::MAX as usize / MAZE_CELL_COLUMNS as usize - 2;

/// Largest maze height whose frame (plus border and status row) fits in `u16` rows.
pub const MAX_MAZE_HEIGHT: usize = u16::MAX as usize - 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeCell {
    Wall,
    Floor,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Fixed-size grid of walls and floors (y grows upwards).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    width: usize,
    height: usize,
    /// Row-major, `y * width + x`
    cells: Vec<MazeCell>,
}

impl MazeGrid {
    /// Generate a perfect maze.
    ///
    /// Both dimensions must be odd, at least 3, and small enough to be drawn
    /// (see [`MAX_MAZE_WIDTH`] and [`MAX_MAZE_HEIGHT`]).
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, ArcadeError> {
        let valid = |n: usize, max: usize| n >= 3 && n <= max && n % 2 == 1;
        if !valid(width, MAX_MAZE_WIDTH) || !valid(height, MAX_MAZE_HEIGHT) {
            return Err(ArcadeError::InvalidMazeDimensions { width, height });
        }
        Ok(Self::carve(width, height, rng))
    }

    /// A fresh maze with the same dimensions as `self`.
    pub fn regenerate<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::carve(self.width, self.height, rng)
    }

    /// Depth-first carving; dimensions are already validated.
    fn carve<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut grid = Self {
            width,
            height,
            cells: vec![MazeCell::Wall; width * height],
        };
        let mut visited = vec![false; width * height];
        let mut stack = vec![Position::new(0, 0)];
        let mut candidates: Vec<Direction> = Vec::with_capacity(4);

        while let Some(&top) = stack.last() {
            let i = grid.index(top);
            visited[i] = true;
            grid.cells[i] = MazeCell::Floor;

            candidates.clear();
            candidates.extend(DIRECTIONS.iter().copied().filter(|&d| {
                let next = top.step(d).step(d);
                grid.contains(next) && !visited[grid.index(next)]
            }));

            match candidates.choose(&mut *rng) {
                Some(&d) => {
                    let between = top.step(d);
                    let idx = grid.index(between);
                    grid.cells[idx] = MazeCell::Floor;
                    stack.push(between.step(d));
                }
                None => {
                    stack.pop();
                }
            }
        }

        tracing::debug!(width, height, floors = grid.floor_count(), "maze generated");
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    #[inline(always)]
    fn index(&self, p: Position) -> usize {
        (p.y as usize) * self.width + (p.x as usize)
    }

    /// `None` when out of bounds.
    pub fn get(&self, p: Position) -> Option<MazeCell> {
        if self.contains(p) {
            Some(self.cells[self.index(p)])
        } else {
            None
        }
    }

    pub fn is_floor(&self, p: Position) -> bool {
        self.get(p) == Some(MazeCell::Floor)
    }

    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == MazeCell::Floor).count()
    }
}

const INFO: GameInfo = GameInfo {
    title: "Maze",
    author: "Terminal Arcade",
    about: "Find your way from the bottom-left corner\nto the exit in the top-right corner.",
    key_bindings: &[
        KeyBinding { key: "w", action: "up" },
        KeyBinding { key: "a", action: "left" },
        KeyBinding { key: "s", action: "down" },
        KeyBinding { key: "d", action: "right" },
        KeyBinding { key: "y / n", action: "play again / quit when finished" },
        KeyBinding { key: "q", action: "quit" },
    ],
};

const WALL: Point = Point::new(' ', ColorPair::new(Color::White, Color::White));
const FLOOR: Point = Point::new(' ', ColorPair::new(Color::Black, Color::Black));
const PLAYER: Point = Point::new('@', ColorPair::new(Color::Yellow, Color::Black));
const FINISH: Point = Point::new(' ', ColorPair::new(Color::Green, Color::Green));
const STATUS: ColorPair = ColorPair::new(Color::White, Color::Black);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Move(Direction),
    Replay,
    Quit,
}

pub struct MazeGame {
    rng: StdRng,
    grid: MazeGrid,
    player: Position,
    moves: u32,
    pending: Option<Intent>,
    finished: bool,
    quit: bool,
}

impl MazeGame {
    pub fn new(config: &ArcadeConfig) -> Result<Self, ArcadeError> {
        let mut rng = config.rng(2);
        let grid = MazeGrid::generate(config.maze_width, config.maze_height, &mut rng)?;
        Ok(Self {
            rng,
            grid,
            player: Position::new(0, 0),
            moves: 0,
            pending: None,
            finished: false,
            quit: false,
        })
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn finish(&self) -> Position {
        Position::new(self.grid.width as i32 - 1, self.grid.height as i32 - 1)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    fn regenerate(&mut self) {
        self.grid = self.grid.regenerate(&mut self.rng);
        self.player = Position::new(0, 0);
        self.moves = 0;
        self.finished = false;
    }

    fn try_move(&mut self, direction: Direction) {
        let target = self.player.step(direction);
        if !self.grid.is_floor(target) {
            return;
        }
        self.player = target;
        self.moves += 1;
        if self.player == self.finish() {
            self.finished = true;
            tracing::info!(moves = self.moves, "maze finished");
        }
    }
}

impl Game for MazeGame {
    fn info(&self) -> &GameInfo {
        &INFO
    }

    fn input(&mut self, key: Option<char>) {
        let Some(key) = key else { return };
        let context = if self.finished {
            InputContext::Confirmation
        } else {
            InputContext::Play
        };
        self.pending = match Action::from_key(context, key) {
            Some(Action::Move(d)) => Some(Intent::Move(d)),
            Some(Action::Replay(true)) => Some(Intent::Replay),
            Some(Action::Replay(false)) | Some(Action::Back) => Some(Intent::Quit),
            _ => None,
        };
    }

    fn process(&mut self) {
        match self.pending.take() {
            Some(Intent::Move(d)) if !self.finished => self.try_move(d),
            Some(Intent::Replay) if self.finished => self.regenerate(),
            Some(Intent::Quit) => self.quit = true,
            _ => {}
        }
    }

    fn is_over(&self) -> bool {
        self.quit
    }

    fn reset(&mut self) {
        self.regenerate();
        self.pending = None;
        self.quit = false;
    }
}

impl Displayable for MazeGame {
    fn color_pairs(&self) -> Vec<ColorPair> {
        vec![WALL.pair, FLOOR.pair, PLAYER.pair, FINISH.pair, STATUS]
    }

    fn frame(&self) -> Frame {
        let cw = MAZE_CELL_COLUMNS;
        // Bounded by MAX_MAZE_WIDTH / MAX_MAZE_HEIGHT, so these fit in u16.
        let (width, height) = (self.grid.width as u16, self.grid.height as u16);
        // One wall cell of border on every side, plus a status row.
        let w = (width + 2) * cw;
        let h = height + 3;
        let mut frame = Frame::filled(w, h, WALL);

        let finish = self.finish();
        for y in 0..height {
            let row = height - y;
            for x in 0..width {
                let pos = Position::new(x as i32, y as i32);
                let point = if pos == self.player {
                    PLAYER
                } else if pos == finish {
                    FINISH
                } else if self.grid.is_floor(pos) {
                    FLOOR
                } else {
                    continue;
                };
                frame.fill_rect((x + 1) * cw, row, cw, 1, point);
            }
        }

        let status = if self.finished {
            format!("You escaped in {} moves! Play again? (y/n)", self.moves)
        } else {
            format!("Moves: {}", self.moves)
        };
        frame.fill_rect(0, h - 1, w, 1, Point::new(' ', STATUS));
        frame.put_str(0, h - 1, &status, STATUS);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn rejects_even_or_tiny_dimensions() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            MazeGrid::generate(4, 5, &mut rng),
            Err(ArcadeError::InvalidMazeDimensions { width: 4, height: 5 })
        );
        assert!(MazeGrid::generate(1, 1, &mut rng).is_err());
        assert!(MazeGrid::generate(3, 3, &mut rng).is_ok());
    }

    #[test]
    fn rejects_dimensions_too_large_to_draw() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            MazeGrid::generate(32767, 3, &mut rng),
            Err(ArcadeError::InvalidMazeDimensions { width: 32767, height: 3 })
        );
        assert!(MazeGrid::generate(MAX_MAZE_WIDTH + 2, 3, &mut rng).is_err());
        assert!(MazeGrid::generate(3, MAX_MAZE_HEIGHT + 1, &mut rng).is_err());
    }

    #[test]
    fn widest_maze_still_draws() {
        let config = ArcadeConfig {
            maze_width: MAX_MAZE_WIDTH,
            maze_height: 3,
            ..ArcadeConfig::default().with_seed(4)
        };
        let game = MazeGame::new(&config).unwrap();
        let frame = game.frame();
        assert_eq!(frame.width(), u16::MAX - 1);
        assert_eq!(frame.height(), 6);
    }

    #[test]
    fn passage_cells_are_all_floor() {
        let mut rng = StdRng::seed_from_u64(9);
        let grid = MazeGrid::generate(11, 7, &mut rng).unwrap();
        for y in (0..7).step_by(2) {
            for x in (0..11).step_by(2) {
                assert!(grid.is_floor(Position::new(x, y)), "({}, {})", x, y);
            }
        }
        // Odd/odd cells are never carved.
        for y in (1..7).step_by(2) {
            for x in (1..11).step_by(2) {
                assert_eq!(grid.get(Position::new(x, y)), Some(MazeCell::Wall));
            }
        }
    }

    #[test]
    fn out_of_bounds_is_none() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = MazeGrid::generate(5, 5, &mut rng).unwrap();
        assert_eq!(grid.get(Position::new(-1, 0)), None);
        assert_eq!(grid.get(Position::new(0, -1)), None);
        assert_eq!(grid.get(Position::new(0, 5)), None);
        assert_eq!(grid.get(Position::new(5, 0)), None);
    }

    #[test]
    fn bounds_of_a_wide_short_grid() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = MazeGrid::generate(7, 3, &mut rng).unwrap();
        // Columns run to 6, rows only to 2.
        assert!(grid.contains(Position::new(6, 2)));
        assert!(grid.contains(Position::new(0, 2)));
        assert!(!grid.contains(Position::new(0, 3)));
        assert!(!grid.contains(Position::new(3, 3)));
        assert!(!grid.contains(Position::new(7, 0)));
        assert_eq!(grid.get(Position::new(0, 3)), None);
        assert_eq!(grid.get(Position::new(7, 0)), None);
        assert_eq!(grid.get(Position::new(6, 2)), Some(MazeCell::Floor));
    }

    fn small_game() -> MazeGame {
        let config = ArcadeConfig {
            maze_width: 5,
            maze_height: 3,
            ..ArcadeConfig::default().with_seed(11)
        };
        MazeGame::new(&config).unwrap()
    }

    #[test]
    fn walls_block_movement() {
        let mut game = small_game();
        // Left and down from the origin leave the grid.
        game.input(Some('a'));
        game.process();
        game.input(Some('s'));
        game.process();
        assert_eq!(game.player(), Position::new(0, 0));
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn replay_keeps_dimensions() {
        let mut game = small_game();
        let before = game.grid().clone();
        for _ in 0..8 {
            game.reset();
            assert_eq!(game.grid().width(), 5);
            assert_eq!(game.grid().height(), 3);
            assert_eq!(game.player(), Position::new(0, 0));
            assert_eq!(game.finish(), Position::new(4, 2));
            // 6 passage cells joined by 5 carved walls.
            assert_eq!(game.grid().floor_count(), 11);
        }
        let fresh = before.regenerate(&mut StdRng::seed_from_u64(0));
        assert_eq!((fresh.width(), fresh.height()), (5, 3));
    }

    #[test]
    fn invalid_config_fails_construction() {
        let config = ArcadeConfig {
            maze_width: 6,
            ..ArcadeConfig::default()
        };
        assert!(MazeGame::new(&config).is_err());
    }

    #[test]
    fn status_row_reports_moves() {
        let game = small_game();
        let frame = game.frame();
        let last: String = frame
            .rows()
            .last()
            .unwrap()
            .iter()
            .map(|p| p.glyph)
            .collect();
        assert!(last.starts_with("Moves: 0"));
    }
}
