use glow::HasContext;

/// Depth comparison function used while depth testing is enabled.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DepthFunc {
    Never,
    #[default]
    Less,
    Equal,
    LessOrEqual,
    Greater,
    NotEqual,
    GreaterOrEqual,
    Always,
}

impl DepthFunc {
    fn to_gl(self) -> u32 {
        match self {
            DepthFunc::Never => glow::NEVER,
            DepthFunc::Less => glow::LESS,
            DepthFunc::Equal => glow::EQUAL,
            DepthFunc::LessOrEqual => glow::LEQUAL,
            DepthFunc::Greater => glow::GREATER,
            DepthFunc::NotEqual => glow::NOTEQUAL,
            DepthFunc::GreaterOrEqual => glow::GEQUAL,
            DepthFunc::Always => glow::ALWAYS,
        }
    }
}

/// Sets the color the framebuffer is cleared to.
pub fn set_clear_color(gl: &glow::Context, r: f32, g: f32, b: f32, a: f32) {
    unsafe { gl.clear_color(r, g, b, a) };
}

/// Clears the color and depth buffers.
pub fn clear(gl: &glow::Context) {
    unsafe { gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT) };
}

/// Enables depth testing with the given comparison function and re-enables
/// depth writes.
pub fn enable_depth_test(gl: &glow::Context, func: DepthFunc) {
    unsafe {
        gl.enable(glow::DEPTH_TEST);
        gl.depth_mask(true);
        gl.depth_func(func.to_gl());
    }
}

pub fn disable_depth_test(gl: &glow::Context) {
    unsafe { gl.disable(glow::DEPTH_TEST) };
}
