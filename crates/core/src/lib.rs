//! Core arcade logic - pure, deterministic, and testable
//!
//! This crate contains the game rules, the navigation shell and the contract
//! games satisfy. It has **no dependency** on a terminal: everything that
//! draws or reads keys goes through the [`Screen`] trait, so the whole arcade
//! can be driven headless from tests.
//!
//! # Module Structure
//!
//! - [`game`]: the `Displayable` / `Game` contract and the `Screen` seam
//! - [`arcade`]: menu / info / active navigation state machine
//! - [`snake`]: segment-compressed snake body
//! - [`snake_game`]: the Snake game built on top of it
//! - [`maze`]: randomized perfect-maze generation and the Maze game
//! - [`tic_tac_toe`]: board, win detection and the Tic-Tac-Toe game
//! - [`config`]: runtime-tunable settings and seeded RNGs
//! - [`error`]: construction-time errors
//!
//! # Example
//!
//! ```
//! use arcade_core::{Arcade, ArcadeConfig, ArcadeState};
//!
//! let config = ArcadeConfig::default().with_seed(12345);
//! let mut arcade = Arcade::with_default_games(&config).unwrap();
//!
//! arcade.handle_key('s'); // select the second game
//! arcade.handle_key(' '); // open its info screen
//! assert_eq!(arcade.selected_game().info().title, "Snake");
//! assert!(matches!(arcade.state(), ArcadeState::Info(_)));
//! ```
//!
//! # Timing
//!
//! Games advance in discrete ticks: one `input` followed by one `process`.
//! Only Snake waits a bounded time for a key, so it keeps moving on its own;
//! every other screen blocks until a key arrives.

pub mod arcade;
pub mod config;
pub mod error;
pub mod game;
pub mod maze;
pub mod snake;
pub mod snake_game;
pub mod tic_tac_toe;

pub use arcade_types as types;

// Re-export commonly used types for convenience
pub use arcade::{Arcade, ArcadeState, InfoFocus};
pub use config::ArcadeConfig;
pub use error::ArcadeError;
pub use game::{Displayable, Game, Screen};
pub use maze::{MazeCell, MazeGame, MazeGrid, MAX_MAZE_HEIGHT, MAX_MAZE_WIDTH};
pub use snake::{Segment, Snake};
pub use snake_game::SnakeGame;
pub use tic_tac_toe::{Board, Mark, Outcome, TicTacToeGame};
