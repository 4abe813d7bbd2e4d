//! The uniform lifecycle every arcade game satisfies, plus the screen seam
//! the arcade drives it through.

use anyhow::Result;

use crate::types::{ColorPair, Frame, GameInfo, InputPolicy};

/// Anything that can produce a frame for rendering.
pub trait Displayable {
    /// Build the current frame. Called once per render.
    fn frame(&self) -> Frame;

    /// Every color pair `frame()` may use.
    fn color_pairs(&self) -> Vec<ColorPair>;
}

/// A game hosted by the arcade.
///
/// Run-loop (owned by the arcade):
///
/// ```text
/// while !game.is_over() {
///     screen.present(game);
///     let key = screen.read_key(game.input_policy());
///     game.input(key);
///     game.process();
/// }
/// game.reset();
/// ```
pub trait Game: Displayable {
    fn info(&self) -> &GameInfo;

    /// How long `input` may wait for a key.
    fn input_policy(&self) -> InputPolicy {
        InputPolicy::Blocking
    }

    /// Record the pending intent for one key code.
    ///
    /// `None` means the bounded wait expired without a key press.
    fn input(&mut self, key: Option<char>);

    /// Advance exactly one tick using the pending intent.
    fn process(&mut self);

    fn is_over(&self) -> bool;

    /// Return to a freshly playable state. Every mutable field is reinitialized.
    fn reset(&mut self);
}

/// The terminal as seen by the arcade: somewhere to draw and somewhere to read keys.
pub trait Screen {
    /// Draw `view` (centered) after registering its color pairs.
    fn present<D: Displayable + ?Sized>(&mut self, view: &D) -> Result<()>;

    /// Read one key code, honoring `policy`.
    fn read_key(&mut self, policy: InputPolicy) -> Result<Option<char>>;
}
