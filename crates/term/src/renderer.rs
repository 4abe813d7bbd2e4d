//! Renderer: draws frames through a terminal backend.
//!
//! Every call is a full clear-and-redraw; there is no diffing against the
//! previous frame.

use std::collections::HashMap;

use anyhow::Result;

use crate::types::{ColorPair, Frame, InputPolicy};

/// The terminal operations the renderer and the arcade need.
///
/// Coordinates are `(row, col)` with `(0, 0)` in the top-left corner.
pub trait Backend {
    fn clear(&mut self) -> Result<()>;

    /// Put one glyph at `(row, col)` drawn with the pair registered in `slot`
    /// (slot 0 is the terminal's default colors).
    fn write_glyph(&mut self, row: u16, col: u16, glyph: char, slot: u16) -> Result<()>;

    /// Tell the terminal which colors `slot` stands for.
    fn register_pair(&mut self, slot: u16, pair: ColorPair) -> Result<()>;

    /// Terminal size as `(rows, cols)`.
    fn size(&self) -> Result<(u16, u16)>;

    fn flush(&mut self) -> Result<()>;

    /// Wait for one key code according to `policy`.
    fn read_key(&mut self, policy: InputPolicy) -> Result<Option<char>>;
}

/// Color pair to slot registry.
///
/// Slots are assigned sequentially from 1 in registration order. Slot 0 is
/// reserved for pairs that were never registered.
#[derive(Debug, Clone, Default)]
pub struct ColorSlots {
    slots: HashMap<ColorPair, u16>,
}

impl ColorSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot for `pair`, assigning the next free one if needed.
    ///
    /// Returns `(slot, newly_assigned)`.
    pub fn assign(&mut self, pair: ColorPair) -> (u16, bool) {
        if let Some(&slot) = self.slots.get(&pair) {
            return (slot, false);
        }
        let slot = self.slots.len() as u16 + 1;
        self.slots.insert(pair, slot);
        (slot, true)
    }

    /// Resolved slot, 0 when `pair` is unknown.
    pub fn get(&self, pair: ColorPair) -> u16 {
        self.slots.get(&pair).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Offset that centers `frame` cells inside `terminal` cells on one axis.
///
/// Frames that do not fit (or fit exactly) are drawn from the origin.
///
/// ```
/// use arcade_term::centered_origin;
///
/// assert_eq!(centered_origin(52, 80), 14);
/// assert_eq!(centered_origin(80, 80), 0);
/// assert_eq!(centered_origin(120, 80), 0);
/// ```
pub fn centered_origin(frame: u16, terminal: u16) -> u16 {
    if frame < terminal {
        (terminal - frame) / 2
    } else {
        0
    }
}

pub struct Renderer<B> {
    backend: B,
    slots: ColorSlots,
}

impl<B: Backend> Renderer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            slots: ColorSlots::new(),
        }
    }

    /// Register `pairs` with the backend. Pairs seen before keep their slot.
    pub fn register(&mut self, pairs: &[ColorPair]) -> Result<&ColorSlots> {
        for &pair in pairs {
            let (slot, new) = self.slots.assign(pair);
            if new {
                tracing::trace!(slot, ?pair, "color pair registered");
                self.backend.register_pair(slot, pair)?;
            }
        }
        Ok(&self.slots)
    }

    pub fn slot(&self, pair: ColorPair) -> u16 {
        self.slots.get(pair)
    }

    pub fn slots(&self) -> &ColorSlots {
        &self.slots
    }

    /// Clear the terminal and draw `frame`, centered if asked to.
    pub fn render(&mut self, frame: &Frame, centered: bool) -> Result<()> {
        let (rows, cols) = self.backend.size()?;
        let (top, left) = if centered {
            (
                centered_origin(frame.height(), rows),
                centered_origin(frame.width(), cols),
            )
        } else {
            (0, 0)
        };

        self.backend.clear()?;
        for (y, row) in frame.rows().enumerate() {
            let r = top as usize + y;
            if r >= rows as usize {
                break;
            }
            for (x, point) in row.iter().enumerate() {
                let c = left as usize + x;
                if c >= cols as usize {
                    break;
                }
                let slot = self.slots.get(point.pair);
                self.backend.write_glyph(r as u16, c as u16, point.glyph, slot)?;
            }
        }
        self.backend.flush()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
