//! Game Module
//!
//! Everything that simulates a run: the entities, the timers that spawn
//! them, the collision tests between them, and the `GameState` that ties
//! them together. Nothing here draws or plays sound; see `render` and
//! `audio` for that.
//!
//! All movement constants are per simulated frame.

pub mod animation;
pub mod background;
pub mod clock;
pub mod collision;
pub mod enemy;
pub mod event;
pub mod letter;
pub mod player;
pub mod runtime;
pub mod spawner;

// Re-export main types
pub use clock::FrameClock;
pub use event::GameEvent;
pub use runtime::GameState;
