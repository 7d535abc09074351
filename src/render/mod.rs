//! Rendering
//!
//! Immediate-mode drawing of a `GameState` onto the window. The play field
//! has a fixed logical size and is scaled uniformly into the window, with
//! black bars filling the rest.

mod draw;
mod overlay;
mod viewport;

pub use draw::draw_frame;
pub use overlay::Overlay;
