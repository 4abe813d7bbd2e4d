//! Terminal input module.
//!
//! Games speak in ASCII key codes (`w`, `a`, `s`, `d`, space, `q`, `y`, `n`)
//! and decode them with [`crate::types::Action::from_key`]. This crate is the
//! only place that knows about `crossterm` key events: it folds arrows, Enter,
//! Esc and Ctrl+C onto those codes so every game gets them for free.

pub mod map;

pub use arcade_types as types;

pub use map::{is_interrupt, key_char};
