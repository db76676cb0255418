//! 2D texture wrapper: decode an image file, upload it, bind it to a unit.

mod format;
mod texture2d;

pub use texture2d::{Filter, Texture2d, TextureProps, WrapMode};
