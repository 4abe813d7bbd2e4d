//! Terminal rendering module.
//!
//! A small renderer for character-grid games. Games hand over a
//! [`Frame`](crate::types::Frame) and the color pairs it uses; the renderer
//! gives every distinct pair a numbered slot, centers the frame in the
//! terminal and redraws it in full.
//!
//! The terminal itself sits behind the [`Backend`] trait:
//! - [`CrosstermBackend`] drives a real terminal (raw mode, alternate screen)
//! - tests plug in a recording double and inspect what was drawn
//!
//! `Renderer<B>` implements the core `Screen` seam, so the arcade can run on
//! any backend.

pub mod crossterm_backend;
pub mod renderer;
pub mod screen;

pub use arcade_core as core;
pub use arcade_types as types;

pub use crossterm_backend::{restore_terminal, CrosstermBackend};
pub use renderer::{centered_origin, Backend, ColorSlots, Renderer};
pub use screen::TerminalScreen;
