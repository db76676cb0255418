use std::path::Path;
use std::rc::Rc;

use glow::HasContext;

use super::format::channel_formats;

/// Texture coordinate wrap mode.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WrapMode {
    Repeat,
    MirroredRepeat,
    ClampToEdge,
    ClampToBorder,
}

impl WrapMode {
    fn to_gl(self) -> u32 {
        match self {
            WrapMode::Repeat => glow::REPEAT,
            WrapMode::MirroredRepeat => glow::MIRRORED_REPEAT,
            WrapMode::ClampToEdge => glow::CLAMP_TO_EDGE,
            WrapMode::ClampToBorder => glow::CLAMP_TO_BORDER,
        }
    }
}

/// Minification/magnification filter.
///
/// Mipmap variants are only meaningful for minification; mipmaps are always
/// generated on load.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Filter {
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

impl Filter {
    fn to_gl(self) -> u32 {
        match self {
            Filter::Nearest => glow::NEAREST,
            Filter::Linear => glow::LINEAR,
            Filter::NearestMipmapNearest => glow::NEAREST_MIPMAP_NEAREST,
            Filter::LinearMipmapNearest => glow::LINEAR_MIPMAP_NEAREST,
            Filter::NearestMipmapLinear => glow::NEAREST_MIPMAP_LINEAR,
            Filter::LinearMipmapLinear => glow::LINEAR_MIPMAP_LINEAR,
        }
    }
}

/// Sampling and load options for a 2D texture.
#[derive(Debug, Clone)]
pub struct TextureProps {
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
    pub min_filter: Filter,
    pub mag_filter: Filter,
    /// Flip the decoded image vertically; image files are top-down while GL
    /// samples bottom-up.
    pub flip_vertically: bool,
    pub tile_x: f32,
    pub tile_y: f32,
}

impl Default for TextureProps {
    fn default() -> Self {
        Self {
            wrap_s: WrapMode::Repeat,
            wrap_t: WrapMode::Repeat,
            min_filter: Filter::LinearMipmapLinear,
            mag_filter: Filter::Linear,
            flip_vertically: true,
            tile_x: 1.0,
            tile_y: 1.0,
        }
    }
}

/// A 2D texture: decoded CPU-side pixels plus the GPU handle.
///
/// The decoded buffer is deliberately retained after upload so the pixel
/// data stays available for the object's lifetime; both it and the GPU
/// handle are released on drop.
pub struct Texture2d {
    gl: Rc<glow::Context>,
    texture: Option<glow::NativeTexture>,
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    pub tile_x: f32,
    pub tile_y: f32,
}

impl Texture2d {
    pub fn new(gl: Rc<glow::Context>) -> Self {
        Self {
            gl,
            texture: None,
            pixels: Vec::new(),
            width: 0,
            height: 0,
            channels: 0,
            tile_x: 1.0,
            tile_y: 1.0,
        }
    }

    /// Decodes `path` and uploads it.
    ///
    /// Returns `false` on decode failure or an unsupported channel count,
    /// releasing the handle (and buffer) and leaving the object unloaded.
    pub fn load(&mut self, path: impl AsRef<Path>, props: &TextureProps) -> bool {
        let path = path.as_ref();
        self.unload();

        let gl = Rc::clone(&self.gl);

        let texture = match unsafe { gl.create_texture() } {
            Ok(texture) => texture,
            Err(e) => {
                log::error!("couldn't create a texture object: {e}");
                return false;
            }
        };

        let img = match image::open(path) {
            Ok(img) => img,
            Err(e) => {
                unsafe { gl.delete_texture(texture) };
                log::error!("couldn't load the texture '{}': {e}", path.display());
                return false;
            }
        };

        let img = if props.flip_vertically { img.flipv() } else { img };

        let width = img.width();
        let height = img.height();
        let channels = img.color().channel_count();

        // Decode to a tightly packed 8-bit buffer matching the channel count.
        let pixels = match channels {
            1 => Some(img.into_luma8().into_raw()),
            2 => Some(img.into_luma_alpha8().into_raw()),
            3 => Some(img.into_rgb8().into_raw()),
            4 => Some(img.into_rgba8().into_raw()),
            _ => None,
        };

        let (Some(pixels), Some((format, internal_format))) =
            (pixels, channel_formats(channels))
        else {
            unsafe { gl.delete_texture(texture) };
            log::error!("unsupported number of channels: {channels}");
            return false;
        };

        unsafe {
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));

            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                props.wrap_s.to_gl() as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                props.wrap_t.to_gl() as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                props.min_filter.to_gl() as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                props.mag_filter.to_gl() as i32,
            );

            // Rows are tightly packed for every supported channel count.
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                internal_format as i32,
                width as i32,
                height as i32,
                0,
                format,
                glow::UNSIGNED_BYTE,
                Some(&pixels),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
        }

        self.texture = Some(texture);
        self.pixels = pixels;
        self.width = width;
        self.height = height;
        self.channels = channels;
        self.tile_x = props.tile_x;
        self.tile_y = props.tile_y;
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    /// Binds the texture to `unit`. No-op when unloaded.
    pub fn activate(&self, unit: u32) {
        if let Some(texture) = self.texture {
            unsafe {
                self.gl.active_texture(glow::TEXTURE0 + unit);
                self.gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// The retained CPU-side pixel buffer (empty when unloaded).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn unload(&mut self) {
        if let Some(texture) = self.texture.take() {
            unsafe { self.gl.delete_texture(texture) };
        }
        self.pixels = Vec::new();
        self.width = 0;
        self.height = 0;
        self.channels = 0;
    }
}

impl Drop for Texture2d {
    fn drop(&mut self) {
        self.unload();
    }
}
