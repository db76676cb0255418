//! Input subsystem.
//!
//! The public API is platform-agnostic: the window runtime translates winit
//! events into `InputEvent`s (see `platform::winit`) and feeds them into an
//! `InputState`. The per-frame edge detection lives in `Phase` and is a pure
//! state machine, testable without a window.

mod phase;
mod state;
mod types;

pub(crate) mod platform;

pub use phase::Phase;
pub use state::{CursorSample, InputState};
pub use types::{InputEvent, Key, MouseButton};
