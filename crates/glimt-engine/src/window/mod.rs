//! Window + event pump.
//!
//! `EventPump` owns the process-wide event loop and routes backend events to
//! the window that owns them. `InputWindow` owns one window, its GL context
//! and surface, and the per-window input/timing state.

mod input_window;
mod pump;
mod shared;

pub use input_window::{InputWindow, WindowProps};
pub use pump::EventPump;
