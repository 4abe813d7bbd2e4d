//! Arcade controller - the navigation shell around the games
//!
//! # State machine
//!
//! ```text
//!            confirm                 confirm (Start)
//!   Menu ─────────────▶ Info(focus) ─────────────────▶ Active
//!    │  ▲                 │   ▲                          │
//!    │  └──── confirm ────┘   └──── game over + reset ───┘
//!    │       (Back) / q
//!    │ q
//!    ▼
//!   Done
//! ```
//!
//! The selected game is always looked up from `selected` when needed; there
//! is no second copy to keep in sync.

use anyhow::Result;

use crate::config::ArcadeConfig;
use crate::error::ArcadeError;
use crate::game::{Displayable, Game, Screen};
use crate::maze::MazeGame;
use crate::snake_game::SnakeGame;
use crate::tic_tac_toe::TicTacToeGame;
use crate::types::{
    Action, Color, ColorPair, Direction, Frame, GameInfo, InputContext, InputPolicy, Point,
    ARCADE_FRAME_HEIGHT, ARCADE_FRAME_WIDTH,
};

/// Which option is focused on a game's info screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoFocus {
    Start,
    Back,
}

impl InfoFocus {
    fn toggled(self) -> Self {
        match self {
            InfoFocus::Start => InfoFocus::Back,
            InfoFocus::Back => InfoFocus::Start,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcadeState {
    /// Game list
    Menu,
    /// Info screen of the selected game
    Info(InfoFocus),
    /// The selected game is running
    Active,
    /// The session is over
    Done,
}

const TITLE: &str = "T E R M I N A L   A R C A D E";
const ABOUT: [&str; 3] = [
    "A collection of small classic games for your terminal.",
    "Pick a game from the list below, read how to play it,",
    "then hit start. Have fun!",
];
const COMMANDS: &str = "w/s: move   space: select   q: quit";

const TEXT: ColorPair = ColorPair::new(Color::White, Color::Black);
const ACCENT: ColorPair = ColorPair::new(Color::Yellow, Color::Black);
const SELECTED: ColorPair = TEXT.inverted();
const HORIZONTAL: Point = Point::new('-', TEXT);
const VERTICAL: Point = Point::new('|', TEXT);
const CORNER: Point = Point::new('*', TEXT);

/// Width of a highlighted menu entry.
const ENTRY_WIDTH: usize = 24;

pub struct Arcade {
    games: Vec<Box<dyn Game>>,
    selected: usize,
    state: ArcadeState,
}

impl Arcade {
    /// Build an arcade over `games`, starting at the menu with the first game
    /// selected.
    pub fn new(games: Vec<Box<dyn Game>>) -> Result<Self, ArcadeError> {
        if games.is_empty() {
            return Err(ArcadeError::NoGames);
        }
        Ok(Self {
            games,
            selected: 0,
            state: ArcadeState::Menu,
        })
    }

    /// The bundled games: Maze, Snake and Tic-Tac-Toe.
    pub fn with_default_games(config: &ArcadeConfig) -> Result<Self, ArcadeError> {
        let games: Vec<Box<dyn Game>> = vec![
            Box::new(MazeGame::new(config)?),
            Box::new(SnakeGame::new(config)),
            Box::new(TicTacToeGame::new()),
        ];
        Self::new(games)
    }

    pub fn state(&self) -> ArcadeState {
        self.state
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_game(&self) -> &dyn Game {
        self.games[self.selected].as_ref()
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Feed one key code to the navigation state machine.
    pub fn handle_key(&mut self, key: char) {
        if let Some(action) = Action::from_key(InputContext::Navigation, key) {
            self.handle_action(action);
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        let next = match (self.state, action) {
            (ArcadeState::Menu, Action::Move(Direction::Up)) => {
                self.selected = self.selected.saturating_sub(1);
                ArcadeState::Menu
            }
            (ArcadeState::Menu, Action::Move(Direction::Down)) => {
                self.selected = (self.selected + 1).min(self.games.len() - 1);
                ArcadeState::Menu
            }
            (ArcadeState::Menu, Action::Confirm) => ArcadeState::Info(InfoFocus::Start),
            (ArcadeState::Menu, Action::Back) => ArcadeState::Done,

            (ArcadeState::Info(focus), Action::Move(Direction::Up | Direction::Down)) => {
                ArcadeState::Info(focus.toggled())
            }
            (ArcadeState::Info(InfoFocus::Start), Action::Confirm) => ArcadeState::Active,
            (ArcadeState::Info(InfoFocus::Back), Action::Confirm) => ArcadeState::Menu,
            (ArcadeState::Info(_), Action::Back) => ArcadeState::Menu,

            (state, _) => state,
        };
        self.transition(next);
    }

    fn transition(&mut self, next: ArcadeState) {
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, "arcade transition");
            self.state = next;
        }
    }

    /// Run the selected game until it is over, reset it and return to its
    /// info screen.
    pub fn play_selected<S: Screen>(&mut self, screen: &mut S) -> Result<()> {
        self.transition(ArcadeState::Active);
        let game = self.games[self.selected].as_mut();
        tracing::info!(game = game.info().title, "game started");

        while !game.is_over() {
            screen.present(&*game)?;
            let key = screen.read_key(game.input_policy())?;
            game.input(key);
            game.process();
        }

        tracing::info!(game = game.info().title, "game over");
        game.reset();
        self.transition(ArcadeState::Info(InfoFocus::Start));
        Ok(())
    }

    /// Drive the whole session until the player quits from the menu.
    pub fn run<S: Screen>(&mut self, screen: &mut S) -> Result<()> {
        loop {
            match self.state {
                ArcadeState::Done => return Ok(()),
                ArcadeState::Active => self.play_selected(screen)?,
                ArcadeState::Menu | ArcadeState::Info(_) => {
                    screen.present(&*self)?;
                    if let Some(key) = screen.read_key(InputPolicy::Blocking)? {
                        self.handle_key(key);
                    }
                }
            }
        }
    }

    fn menu_frame(&self, frame: &mut Frame) {
        frame.put_centered_str(2, TITLE, ACCENT);
        for (i, line) in ABOUT.iter().enumerate() {
            frame.put_centered_str(4 + i as u16, line, TEXT);
        }
        frame.put_centered_str(8, COMMANDS, TEXT);
        frame.put_centered_str(10, "Games", ACCENT);

        for (i, game) in self.games.iter().enumerate() {
            let entry = format!("{:^width$}", game.info().title, width = ENTRY_WIDTH);
            let pair = if i == self.selected { SELECTED } else { TEXT };
            frame.put_centered_str(12 + i as u16, &entry, pair);
        }
    }

    fn info_frame(&self, frame: &mut Frame, focus: InfoFocus) {
        let info: &GameInfo = self.selected_game().info();
        frame.put_centered_str(2, info.title, ACCENT);
        frame.put_centered_str(3, &format!("by {}", info.author), TEXT);

        let mut row = 5;
        for line in info.about.lines() {
            frame.put_centered_str(row, line, TEXT);
            row += 1;
        }

        row += 1;
        frame.put_centered_str(row, "Controls", ACCENT);
        row += 1;
        for binding in info.key_bindings {
            frame.put_centered_str(row, &format!("{:>10}  {:<34}", binding.key, binding.action), TEXT);
            row += 1;
        }

        let bottom = frame.height() - 5;
        for (i, (label, option)) in [("Start", InfoFocus::Start), ("Back", InfoFocus::Back)]
            .into_iter()
            .enumerate()
        {
            let pair = if option == focus { SELECTED } else { TEXT };
            frame.put_centered_str(bottom + i as u16, &format!("{:^12}", label), pair);
        }
    }
}

impl Displayable for Arcade {
    fn color_pairs(&self) -> Vec<ColorPair> {
        vec![TEXT, ACCENT, SELECTED]
    }

    fn frame(&self) -> Frame {
        let mut frame = Frame::filled(ARCADE_FRAME_WIDTH, ARCADE_FRAME_HEIGHT, Point::new(' ', TEXT));
        frame.draw_border(HORIZONTAL, VERTICAL, CORNER);
        match self.state {
            ArcadeState::Info(focus) => self.info_frame(&mut frame, focus),
            _ => self.menu_frame(&mut frame),
        }
        frame
    }
}
