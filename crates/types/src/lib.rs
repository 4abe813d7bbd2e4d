//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the arcade.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, terminal rendering, tests).
//!
//! # Coordinates
//!
//! Game positions use a mathematical orientation: `x` grows to the right and
//! `y` grows **upwards**. Games that draw with the origin in the bottom-left
//! corner flip their rows when building a [`Frame`].
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SNAKE_WIDTH` | 50 | Snake playfield columns |
//! | `SNAKE_HEIGHT` | 30 | Snake playfield rows |
//! | `SNAKE_INITIAL_LENGTH` | 3 | Cells occupied by a fresh snake |
//! | `SNAKE_TICK_MS` | 100 | Bounded input wait per snake tick |
//! | `MAZE_WIDTH` | 39 | Maze columns (odd) |
//! | `MAZE_HEIGHT` | 19 | Maze rows (odd) |
//!
//! # Examples
//!
//! ```
//! use arcade_types::{Action, Direction, InputContext, Position};
//!
//! let p = Position::new(25, 15).step(Direction::Up);
//! assert_eq!(p, Position::new(25, 16));
//!
//! assert_eq!(
//!     Action::from_key(InputContext::Play, 'a'),
//!     Some(Action::Move(Direction::Left))
//! );
//! assert_eq!(Action::from_key(InputContext::Confirmation, 'y'), Some(Action::Replay(true)));
//! ```

use std::time::Duration;

pub mod frame;

pub use frame::Frame;

/// Snake playfield width in cells
pub const SNAKE_WIDTH: i32 = 50;

/// Snake playfield height in cells
pub const SNAKE_HEIGHT: i32 = 30;

/// Number of cells a freshly spawned snake occupies
pub const SNAKE_INITIAL_LENGTH: usize = 3;

/// Bounded wait for a key press before the snake advances on its own (ms)
pub const SNAKE_TICK_MS: u64 = 100;

/// Default maze width in cells. Must be odd.
pub const MAZE_WIDTH: usize = 39;

/// Default maze height in cells. Must be odd.
pub const MAZE_HEIGHT: usize = 19;

/// Terminal columns used to draw one maze cell (compensates glyph aspect ratio)
pub const MAZE_CELL_COLUMNS: u16 = 2;

/// Width of the arcade menu frames (including border)
pub const ARCADE_FRAME_WIDTH: u16 = 64;

/// Height of the arcade menu frames (including border)
pub const ARCADE_FRAME_HEIGHT: u16 = 30;

/// The eight terminal colors every backend can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// An ordered (foreground, background) color combination.
///
/// Renderers assign each distinct pair one backend slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Color,
}

impl ColorPair {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    /// Swap foreground and background (used for highlighted menu entries).
    pub const fn inverted(self) -> Self {
        Self {
            fg: self.bg,
            bg: self.fg,
        }
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::new(Color::White, Color::Black)
    }
}

/// A single glyph with its colors: the atomic render unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub glyph: char,
    pub pair: ColorPair,
}

impl Point {
    pub const fn new(glyph: char, pair: ColorPair) -> Self {
        Self { glyph, pair }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(' ', ColorPair::default())
    }
}

/// Movement directions (Up is +y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The direction pointing the other way
    ///
    /// ```
    /// use arcade_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit offset `(dx, dy)` for one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one cell away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// One row of a game's key-binding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: &'static str,
    pub action: &'static str,
}

/// Static metadata shown on a game's info screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameInfo {
    pub title: &'static str,
    pub author: &'static str,
    /// Free text; may contain newlines.
    pub about: &'static str,
    pub key_bindings: &'static [KeyBinding],
}

/// Which key map is live.
///
/// - **Navigation**: arcade menus (vertical movement only)
/// - **Play**: in-game controls
/// - **Confirmation**: a finished game asking whether to play again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Navigation,
    Play,
    Confirmation,
}

/// Semantic input decoded from an ASCII key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Directional key (`w`/`a`/`s`/`d`)
    Move(Direction),
    /// Space bar: select / place
    Confirm,
    /// `q`: leave the current screen or quit
    Back,
    /// `y` / `n` answer to "play again?"
    Replay(bool),
}

impl Action {
    /// Map a key code to an action for the given context.
    ///
    /// Pure function of `(context, key)`; unknown keys map to `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcade_types::{Action, Direction, InputContext};
    ///
    /// assert_eq!(Action::from_key(InputContext::Navigation, 's'), Some(Action::Move(Direction::Down)));
    /// assert_eq!(Action::from_key(InputContext::Navigation, 'a'), None);
    /// assert_eq!(Action::from_key(InputContext::Play, ' '), Some(Action::Confirm));
    /// assert_eq!(Action::from_key(InputContext::Confirmation, 'w'), None);
    /// ```
    pub fn from_key(context: InputContext, key: char) -> Option<Self> {
        match (context, key) {
            (_, 'q') => Some(Action::Back),

            (InputContext::Confirmation, 'y') => Some(Action::Replay(true)),
            (InputContext::Confirmation, 'n') => Some(Action::Replay(false)),
            (InputContext::Confirmation, _) => None,

            (_, 'w') => Some(Action::Move(Direction::Up)),
            (_, 's') => Some(Action::Move(Direction::Down)),
            (_, ' ') => Some(Action::Confirm),

            (InputContext::Play, 'a') => Some(Action::Move(Direction::Left)),
            (InputContext::Play, 'd') => Some(Action::Move(Direction::Right)),

            _ => None,
        }
    }
}

/// How long a game's `input()` may wait for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPolicy {
    /// Wait until a key is pressed
    Blocking,
    /// Wait at most this long; `None` is delivered when it expires
    Timeout(Duration),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maze_defaults_are_odd() {
        assert_eq!(MAZE_WIDTH % 2, 1);
        assert_eq!(MAZE_HEIGHT % 2, 1);
    }

    #[test]
    fn snake_spawn_fits_on_grid() {
        // Spawn is at the center, the body trails below it.
        assert!(SNAKE_HEIGHT / 2 >= SNAKE_INITIAL_LENGTH as i32);
        assert_eq!(SNAKE_TICK_MS, 100);
    }
}
