//! Glimt engine crate.
//!
//! Thin object-oriented wrappers over OpenGL (via glow), windowing/input
//! (winit + glutin) and image decoding (image). Each wrapper owns exactly one
//! backend handle and releases it on drop; nothing here is safe to share
//! across threads.

pub mod input;
pub mod render;
pub mod shader;
pub mod texture;
pub mod time;
pub mod window;

pub mod logging;
