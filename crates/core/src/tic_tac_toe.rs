//! Tic-Tac-Toe - two players sharing one keyboard.
//!
//! Board coordinates are `(row, col)` with row 0 at the top. The player to
//! move is derived from the marks on the board (X moves whenever both players
//! have placed the same number of marks), so it can never drift from the
//! board itself.

use crate::game::{Displayable, Game};
use crate::types::{
    Action, Color, ColorPair, Direction, Frame, GameInfo, InputContext, KeyBinding, Point,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn as_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// `None` is a blank square.
pub type Cell = Option<Mark>;

/// A line of three squares.
pub type Line = [(usize, usize); 3];

/// The 8 ways to get three in a row: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Place `mark`; returns false (and changes nothing) if the square is
    /// taken or out of range.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        match self.get(row, col) {
            Some(None) => {
                self.cells[row][col] = Some(mark);
                true
            }
            _ => false,
        }
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Some(mark))
            .count()
    }

    /// Whose turn it is, derived from the marks placed so far.
    pub fn current_player(&self) -> Mark {
        if self.count(Mark::X) == self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// The first line holding three equal marks, if any.
    pub fn winning_line(&self) -> Option<Line> {
        let cell = |(row, col): (usize, usize)| self.cells[row][col];
        LINES
            .iter()
            .copied()
            .find(|&[a, b, c]| cell(a).is_some() && cell(a) == cell(b) && cell(b) == cell(c))
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winning_line()
            .and_then(|[(r, c), _, _]| self.cells[r][c])
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_some())
    }
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

const INFO: GameInfo = GameInfo {
    title: "Tic-Tac-Toe",
    author: "Terminal Arcade",
    about: "Player one is X and player two is O.\nTake turns marking the squares on the board.\nPlace three in a row horizontally, vertically\nor diagonally to win!",
    key_bindings: &[
        KeyBinding { key: "w/a/s/d", action: "move the cursor" },
        KeyBinding { key: "space", action: "mark the square" },
        KeyBinding { key: "y / n", action: "play again / quit when finished" },
        KeyBinding { key: "q", action: "quit" },
    ],
};

const CELL_W: u16 = 9;
const CELL_H: u16 = 3;
const BOARD_W: u16 = 1 + 3 * (CELL_W + 1);
const BOARD_H: u16 = 1 + 3 * (CELL_H + 1);

const BORDER: Point = Point::new(' ', ColorPair::new(Color::Red, Color::Red));
const BLANK: ColorPair = ColorPair::new(Color::White, Color::Black);
const MARK_X: ColorPair = ColorPair::new(Color::Cyan, Color::Black);
const MARK_O: ColorPair = ColorPair::new(Color::Magenta, Color::Black);
const CURSOR: ColorPair = ColorPair::new(Color::White, Color::Blue);
const HIGHLIGHT: ColorPair = ColorPair::new(Color::Black, Color::Green);

const GLYPH_X: [&str; 3] = ["  \\   /  ", "    X    ", "  /   \\  "];
const GLYPH_O: [&str; 3] = ["  /---\\  ", "  |   |  ", "  \\---/  "];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    MoveCursor(Direction),
    Place,
    Replay,
    Quit,
}

pub struct TicTacToeGame {
    board: Board,
    cursor: (usize, usize),
    pending: Option<Intent>,
    quit: bool,
}

impl TicTacToeGame {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            cursor: (1, 1),
            pending: None,
            quit: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Start from a prepared board.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            ..Self::new()
        }
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(mark) = self.board.winner() {
            Some(Outcome::Win(mark))
        } else if self.board.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        let (row, col) = self.cursor;
        self.cursor = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(2), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(2)),
        };
    }

    fn place(&mut self) {
        let (row, col) = self.cursor;
        let mark = self.board.current_player();
        if self.board.place(row, col, mark) {
            if let Some(winner) = self.board.winner() {
                tracing::info!(winner = %winner.as_char(), "tic-tac-toe round won");
            }
        }
    }

    fn status(&self) -> String {
        match self.outcome() {
            Some(Outcome::Win(mark)) => format!("{} wins! Play again? (y/n)", mark.as_char()),
            Some(Outcome::Draw) => "Draw! Play again? (y/n)".to_string(),
            None => format!("Player {} to move", self.board.current_player().as_char()),
        }
    }
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TicTacToeGame {
    fn info(&self) -> &GameInfo {
        &INFO
    }

    fn input(&mut self, key: Option<char>) {
        let Some(key) = key else { return };
        let context = if self.outcome().is_some() {
            InputContext::Confirmation
        } else {
            InputContext::Play
        };
        self.pending = match Action::from_key(context, key) {
            Some(Action::Move(d)) => Some(Intent::MoveCursor(d)),
            Some(Action::Confirm) => Some(Intent::Place),
            Some(Action::Replay(true)) => Some(Intent::Replay),
            Some(Action::Replay(false)) | Some(Action::Back) => Some(Intent::Quit),
            None => None,
        };
    }

    fn process(&mut self) {
        let finished = self.outcome().is_some();
        match self.pending.take() {
            Some(Intent::MoveCursor(d)) if !finished => self.move_cursor(d),
            Some(Intent::Place) if !finished => self.place(),
            Some(Intent::Replay) if finished => {
                self.board = Board::new();
                self.cursor = (1, 1);
            }
            Some(Intent::Quit) => self.quit = true,
            _ => {}
        }
    }

    fn is_over(&self) -> bool {
        self.quit
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Displayable for TicTacToeGame {
    fn color_pairs(&self) -> Vec<ColorPair> {
        vec![BORDER.pair, BLANK, MARK_X, MARK_O, CURSOR, HIGHLIGHT]
    }

    fn frame(&self) -> Frame {
        let height = BOARD_H + 2;
        let mut frame = Frame::filled(BOARD_W, height, Point::new(' ', BLANK));
        frame.fill_rect(0, 0, BOARD_W, BOARD_H, BORDER);

        // Recomputed on every call; nothing about the highlight is cached.
        let winning = self.board.winning_line();
        let show_cursor = self.outcome().is_none();

        for row in 0..3 {
            for col in 0..3 {
                let x = 1 + col as u16 * (CELL_W + 1);
                let y = 1 + row as u16 * (CELL_H + 1);
                let cell = self.board.cells[row][col];

                let background = if winning.is_some_and(|line| line.contains(&(row, col))) {
                    Some(HIGHLIGHT)
                } else if show_cursor && self.cursor == (row, col) {
                    Some(CURSOR)
                } else {
                    None
                };

                let (glyph, pair) = match cell {
                    Some(Mark::X) => (Some(GLYPH_X), MARK_X),
                    Some(Mark::O) => (Some(GLYPH_O), MARK_O),
                    None => (None, BLANK),
                };
                let pair = background.unwrap_or(pair);

                frame.fill_rect(x, y, CELL_W, CELL_H, Point::new(' ', pair));
                if let Some(lines) = glyph {
                    for (dy, line) in lines.iter().enumerate() {
                        frame.put_str(x, y + dy as u16, line, pair);
                    }
                }
            }
        }

        frame.put_centered_str(height - 1, &self.status(), BLANK);
        frame
    }
}
