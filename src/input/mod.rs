//! Keyboard input
//!
//! Four held directions (arrow keys or WASD), a confirm key that restarts a
//! finished run, and a full-screen toggle.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
