//! The arcade's view of the terminal.

use anyhow::Result;

use crate::core::{Displayable, Screen};
use crate::crossterm_backend::CrosstermBackend;
use crate::renderer::{Backend, Renderer};
use crate::types::InputPolicy;

/// A renderer on a real terminal.
pub type TerminalScreen = Renderer<CrosstermBackend>;

impl Renderer<CrosstermBackend> {
    /// Take over the terminal. It is restored when the screen is dropped.
    pub fn enter() -> Result<Self> {
        let mut backend = CrosstermBackend::new();
        backend.enter()?;
        Ok(Renderer::new(backend))
    }
}

impl<B: Backend> Screen for Renderer<B> {
    fn present<D: Displayable + ?Sized>(&mut self, view: &D) -> Result<()> {
        self.register(&view.color_pairs())?;
        self.render(&view.frame(), true)
    }

    fn read_key(&mut self, policy: InputPolicy) -> Result<Option<char>> {
        self.backend_mut().read_key(policy)
    }
}
