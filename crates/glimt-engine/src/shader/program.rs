use std::path::PathBuf;
use std::rc::Rc;

use glow::HasContext;

use super::uniform::UniformCache;

/// Source file locations for a program.
#[derive(Debug, Clone)]
pub struct ShaderProps {
    pub vertex_path: PathBuf,
    pub fragment_path: PathBuf,
}

/// A compiled and linked GL program.
///
/// Two-state object: unloaded until a `load*` call succeeds, unloaded again
/// never (a failed reload leaves the previous program deleted and the object
/// unloaded). Every operation on an unloaded program is a silent no-op, so
/// callers can treat load failure as "the effect just doesn't happen".
pub struct ShaderProgram {
    gl: Rc<glow::Context>,
    program: Option<glow::NativeProgram>,
    uniforms: UniformCache<glow::NativeUniformLocation>,
}

impl ShaderProgram {
    pub fn new(gl: Rc<glow::Context>) -> Self {
        Self {
            gl,
            program: None,
            uniforms: UniformCache::new(),
        }
    }

    /// Reads both source files and compiles/links them.
    ///
    /// Returns `false` on any failure (I/O, compile, link), leaving the
    /// program unloaded. Diagnostics go to the log.
    pub fn load(&mut self, props: &ShaderProps) -> bool {
        let vertex_src = match std::fs::read_to_string(&props.vertex_path) {
            Ok(src) => src,
            Err(e) => {
                log::error!(
                    "couldn't read vertex shader '{}': {e}",
                    props.vertex_path.display()
                );
                return false;
            }
        };

        let fragment_src = match std::fs::read_to_string(&props.fragment_path) {
            Ok(src) => src,
            Err(e) => {
                log::error!(
                    "couldn't read fragment shader '{}': {e}",
                    props.fragment_path.display()
                );
                return false;
            }
        };

        self.load_source(&vertex_src, &fragment_src)
    }

    /// Compiles and links from in-memory sources.
    ///
    /// Each unit is compiled independently; a compile failure logs the
    /// driver's info log and releases every partially-created handle. Linking
    /// happens only when both compiles succeed. On success the compiled
    /// units are detached and deleted, and the uniform cache is reset.
    pub fn load_source(&mut self, vertex_src: &str, fragment_src: &str) -> bool {
        self.unload();

        let gl = &self.gl;

        let vertex = match unsafe { compile(gl, glow::VERTEX_SHADER, vertex_src) } {
            Ok(shader) => shader,
            Err(log) => {
                log::error!("vertex shader compilation failed:\n{log}");
                return false;
            }
        };

        let fragment = match unsafe { compile(gl, glow::FRAGMENT_SHADER, fragment_src) } {
            Ok(shader) => shader,
            Err(log) => {
                log::error!("fragment shader compilation failed:\n{log}");
                unsafe { gl.delete_shader(vertex) };
                return false;
            }
        };

        let program = unsafe {
            let program = match gl.create_program() {
                Ok(program) => program,
                Err(e) => {
                    log::error!("couldn't create a program object: {e}");
                    gl.delete_shader(vertex);
                    gl.delete_shader(fragment);
                    return false;
                }
            };

            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                log::error!("program link failed:\n{log}");
                gl.delete_program(program);
                return false;
            }

            program
        };

        self.program = Some(program);
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.program.is_some()
    }

    /// Makes this the active program. No-op when unloaded.
    pub fn activate(&self) {
        if let Some(program) = self.program {
            unsafe { self.gl.use_program(Some(program)) };
        }
    }

    /// Resolves a uniform name against this program's location cache.
    ///
    /// Unloaded programs resolve everything to `None`, which turns the
    /// setters below into no-ops.
    fn location(&mut self, name: &str) -> Option<glow::NativeUniformLocation> {
        let program = self.program?;
        let gl = &self.gl;
        self.uniforms
            .resolve(name, |name| unsafe { gl.get_uniform_location(program, name) })
    }

    pub fn set_i32(&mut self, name: &str, value: i32) {
        let location = self.location(name);
        unsafe { self.gl.uniform_1_i32(location.as_ref(), value) };
    }

    pub fn set_u32(&mut self, name: &str, value: u32) {
        let location = self.location(name);
        unsafe { self.gl.uniform_1_u32(location.as_ref(), value) };
    }

    pub fn set_f32(&mut self, name: &str, value: f32) {
        let location = self.location(name);
        unsafe { self.gl.uniform_1_f32(location.as_ref(), value) };
    }

    pub fn set_vec2(&mut self, name: &str, value: [f32; 2]) {
        let location = self.location(name);
        unsafe { self.gl.uniform_2_f32_slice(location.as_ref(), &value) };
    }

    pub fn set_vec3(&mut self, name: &str, value: [f32; 3]) {
        let location = self.location(name);
        unsafe { self.gl.uniform_3_f32_slice(location.as_ref(), &value) };
    }

    pub fn set_vec4(&mut self, name: &str, value: [f32; 4]) {
        let location = self.location(name);
        unsafe { self.gl.uniform_4_f32_slice(location.as_ref(), &value) };
    }

    /// Column-major 4x4 matrix.
    pub fn set_mat4(&mut self, name: &str, value: &[f32; 16]) {
        let location = self.location(name);
        unsafe {
            self.gl
                .uniform_matrix_4_f32_slice(location.as_ref(), false, value)
        };
    }

    fn unload(&mut self) {
        if let Some(program) = self.program.take() {
            unsafe { self.gl.delete_program(program) };
        }
        self.uniforms.clear();
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        self.unload();
    }
}

/// Compiles one shader unit, returning the driver's info log on failure.
unsafe fn compile(
    gl: &glow::Context,
    stage: u32,
    source: &str,
) -> Result<glow::NativeShader, String> {
    unsafe {
        let shader = gl.create_shader(stage)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(log);
        }

        Ok(shader)
    }
}
