//! CrosstermBackend: the renderer backend for a real terminal.
//!
//! Output is queued into one byte buffer and written to stdout on `flush`.
//! `enter()` switches to raw mode and the alternate screen; `exit()` (or
//! dropping the backend) switches back.

use std::collections::HashMap;
use std::io::{self, Write};
use std::time::Instant;

use anyhow::Result;

use crossterm::{
    cursor,
    event::{self, Event},
    style::{self, Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, ExecutableCommand, QueueableCommand,
};

use arcade_input::key_char;

use crate::renderer::Backend;
use crate::types::{Color, ColorPair, InputPolicy};

pub struct CrosstermBackend {
    stdout: io::Stdout,
    buf: Vec<u8>,
    pairs: HashMap<u16, ColorPair>,
    /// Slot the queued output is currently colored with
    current: Option<u16>,
    entered: bool,
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
            pairs: HashMap::new(),
            current: None,
            entered: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }

    fn apply_slot(&mut self, slot: u16) -> Result<()> {
        if self.current == Some(slot) {
            return Ok(());
        }
        match self.pairs.get(&slot) {
            Some(pair) => {
                self.buf.queue(SetForegroundColor(to_crossterm(pair.fg)))?;
                self.buf.queue(SetBackgroundColor(to_crossterm(pair.bg)))?;
            }
            None => {
                self.buf.queue(ResetColor)?;
            }
        }
        self.current = Some(slot);
        Ok(())
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

impl Backend for CrosstermBackend {
    fn clear(&mut self) -> Result<()> {
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.current = None;
        Ok(())
    }

    fn write_glyph(&mut self, row: u16, col: u16, glyph: char, slot: u16) -> Result<()> {
        self.apply_slot(slot)?;
        self.buf.queue(cursor::MoveTo(col, row))?;
        self.buf.queue(Print(glyph))?;
        Ok(())
    }

    fn register_pair(&mut self, slot: u16, pair: ColorPair) -> Result<()> {
        self.pairs.insert(slot, pair);
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows, cols))
    }

    fn flush(&mut self) -> Result<()> {
        self.buf.queue(ResetColor)?;
        self.current = None;
        self.flush_buf()
    }

    /// A resize returns `None` so the caller redraws with the new size.
    fn read_key(&mut self, policy: InputPolicy) -> Result<Option<char>> {
        match policy {
            InputPolicy::Blocking => loop {
                match classify(event::read()?) {
                    Polled::Key(c) => return Ok(Some(c)),
                    Polled::Redraw => return Ok(None),
                    Polled::Ignored => {}
                }
            },
            InputPolicy::Timeout(wait) => {
                let deadline = Instant::now() + wait;
                loop {
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    if !event::poll(remaining)? {
                        return Ok(None);
                    }
                    match classify(event::read()?) {
                        Polled::Key(c) => return Ok(Some(c)),
                        Polled::Redraw => return Ok(None),
                        Polled::Ignored => {}
                    }
                }
            }
        }
    }
}

/// What a terminal event means to `read_key`.
#[derive(Debug, PartialEq, Eq)]
enum Polled {
    Key(char),
    Redraw,
    Ignored,
}

fn classify(event: Event) -> Polled {
    match event {
        Event::Key(key) => key_char(key).map_or(Polled::Ignored, Polled::Key),
        Event::Resize(..) => Polled::Redraw,
        _ => Polled::Ignored,
    }
}

/// Put the terminal back into cooked mode on the main screen.
///
/// For panic hooks: it does not need the backend instance, so the panic
/// message lands on a usable terminal before unwinding reaches `Drop`.
pub fn restore_terminal() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(ResetColor)?;
    stdout.execute(cursor::Show)?;
    stdout.execute(terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    Ok(())
}

fn to_crossterm(color: Color) -> style::Color {
    match color {
        Color::Black => style::Color::Black,
        Color::Red => style::Color::Red,
        Color::Green => style::Color::Green,
        Color::Yellow => style::Color::Yellow,
        Color::Blue => style::Color::Blue,
        Color::Magenta => style::Color::Magenta,
        Color::Cyan => style::Color::Cyan,
        Color::White => style::Color::White,
    }
}
