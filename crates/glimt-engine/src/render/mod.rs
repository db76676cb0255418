//! Basic render state: framebuffer clearing and depth testing.

mod state;

pub use state::{DepthFunc, clear, disable_depth_test, enable_depth_test, set_clear_color};
