//! Terminal Arcade runner (default binary).
//!
//! Parses the command line, takes over the terminal and hands control to the
//! arcade until the player quits from the menu.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use terminal_arcade::core::{Arcade, ArcadeConfig};
use terminal_arcade::term::{restore_terminal, TerminalScreen};
use terminal_arcade::types::{MAZE_HEIGHT, MAZE_WIDTH, SNAKE_TICK_MS};

/// Snake, Maze and Tic-Tac-Toe in your terminal.
#[derive(Debug, Parser)]
#[command(name = "terminal-arcade", version, about)]
struct Args {
    /// Seed for every random choice (maze layout, fruit placement)
    #[arg(long)]
    seed: Option<u64>,

    /// How long the snake waits for a key before moving on its own
    #[arg(long, value_name = "MS", default_value_t = SNAKE_TICK_MS)]
    snake_tick_ms: u64,

    /// Maze width in cells (odd, 3 to 32765)
    #[arg(long, default_value_t = MAZE_WIDTH)]
    maze_width: usize,

    /// Maze height in cells (odd, 3 to 65531)
    #[arg(long, default_value_t = MAZE_HEIGHT)]
    maze_height: usize,
}

impl Args {
    fn config(&self) -> ArcadeConfig {
        ArcadeConfig {
            seed: self.seed,
            snake_tick: Duration::from_millis(self.snake_tick_ms),
            maze_width: self.maze_width,
            maze_height: self.maze_height,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Fail on bad settings before touching the terminal.
    let mut arcade = Arcade::with_default_games(&args.config())?;

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));

    // The terminal is restored when `screen` is dropped, on every exit path.
    let mut screen = TerminalScreen::enter()?;
    arcade.run(&mut screen)
}
