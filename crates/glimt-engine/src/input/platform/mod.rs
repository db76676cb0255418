//! Backend event translation. Nothing in here leaks into the public API.

pub(crate) mod winit;
