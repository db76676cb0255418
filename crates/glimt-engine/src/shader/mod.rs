//! Shader program wrapper.
//!
//! Compiles a vertex + fragment pair into a linked program and exposes typed
//! uniform setters with a per-program name-to-location cache.

mod program;
mod uniform;

pub use program::{ShaderProgram, ShaderProps};
