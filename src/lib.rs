//! Terminal Arcade (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `terminal_arcade::{core, input, term, types}` and ships
//! the `terminal-arcade` binary.

pub use arcade_core as core;
pub use arcade_input as input;
pub use arcade_term as term;
pub use arcade_types as types;
