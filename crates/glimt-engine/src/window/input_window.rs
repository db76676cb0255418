use std::cell::RefCell;
use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{Context as _, Result};
use glow::HasContext;
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::GlWindow;
use raw_window_handle::HasWindowHandle;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::window::{CursorGrabMode, Window};

use super::pump::EventPump;
use super::shared::WindowShared;
use crate::input::{Key, MouseButton};
use crate::time::FrameClock;

/// Window creation options.
#[derive(Debug, Clone)]
pub struct WindowProps {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub vsync: bool,
}

impl Default for WindowProps {
    fn default() -> Self {
        Self {
            title: "glimt".to_owned(),
            width: 1280,
            height: 720,
            resizable: true,
            vsync: true,
        }
    }
}

/// A window with an OpenGL 3.3 core context and edge-triggered input state.
///
/// Drive it with a `begin_frame`/`end_frame` pair once per frame:
/// `begin_frame` advances the input edges, pumps backend events, and ticks
/// the frame clock; `end_frame` presents. All input queries in between
/// reflect that frame's edges.
pub struct InputWindow {
    shared: Rc<RefCell<WindowShared>>,
    window: Window,
    gl_surface: Surface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    gl: Rc<glow::Context>,
    clock: FrameClock,
}

impl InputWindow {
    /// Creates the window, its GL context/surface, and makes it current.
    ///
    /// Failure at any step is unrecoverable for this window; propagate it
    /// out of `main`.
    pub fn create(pump: &mut EventPump, props: WindowProps) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(props.title.as_str())
            .with_inner_size(LogicalSize::new(f64::from(props.width), f64::from(props.height)))
            .with_resizable(props.resizable);

        let (window, gl_config) = pump.create_window(attrs)?;

        let raw_handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();
        let gl_display = gl_config.display();

        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(raw_handle));
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attrs) }
            .context("failed to create the GL context")?;

        let surface_attrs = window
            .build_surface_attributes(SurfaceAttributesBuilder::<WindowSurface>::new())
            .context("failed to describe the window surface")?;
        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs) }
            .context("failed to create the window surface")?;

        let gl_context = not_current
            .make_current(&gl_surface)
            .context("failed to make the GL context current")?;

        let gl = Rc::new(unsafe {
            glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name))
        });

        set_swap_interval(&gl_surface, &gl_context, props.vsync);

        let size = window.inner_size();
        unsafe { gl.viewport(0, 0, size.width as i32, size.height as i32) };

        let shared = Rc::new(RefCell::new(WindowShared::new(size, props.resizable)));
        pump.register(window.id(), Rc::downgrade(&shared));

        Ok(Self {
            shared,
            window,
            gl_surface,
            gl_context,
            gl,
            clock: FrameClock::new(),
        })
    }

    /// Starts a frame: advances input edges and zeroes per-frame deltas,
    /// pumps backend events (which may set fresh edges), applies any pending
    /// resize, and ticks the frame clock.
    pub fn begin_frame(&mut self, pump: &mut EventPump) {
        self.shared.borrow_mut().input.begin_frame();

        pump.poll();

        let pending = self.shared.borrow_mut().pending_resize.take();
        if let Some(size) = pending {
            self.apply_resize(size);
        }

        self.clock.tick();
    }

    /// Ends the frame by presenting it.
    pub fn end_frame(&self) {
        if let Err(e) = self.gl_surface.swap_buffers(&self.gl_context) {
            log::error!("failed to present the frame: {e}");
        }
    }

    fn apply_resize(&mut self, size: PhysicalSize<u32>) {
        let width = NonZeroU32::new(size.width).unwrap_or(NonZeroU32::MIN);
        let height = NonZeroU32::new(size.height).unwrap_or(NonZeroU32::MIN);
        self.gl_surface.resize(&self.gl_context, width, height);

        unsafe { self.gl.viewport(0, 0, size.width as i32, size.height as i32) };

        self.shared.borrow_mut().size = size;
    }

    /// The GL handle for this window's context, shared with the shader,
    /// texture, and render-state wrappers.
    pub fn gl(&self) -> Rc<glow::Context> {
        Rc::clone(&self.gl)
    }

    pub fn width(&self) -> u32 {
        self.shared.borrow().size.width
    }

    pub fn height(&self) -> u32 {
        self.shared.borrow().size.height
    }

    pub fn aspect(&self) -> f64 {
        let size = self.shared.borrow().size;
        f64::from(size.width) / f64::from(size.height.max(1))
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    pub fn enable_vsync(&self) {
        set_swap_interval(&self.gl_surface, &self.gl_context, true);
    }

    pub fn disable_vsync(&self) {
        set_swap_interval(&self.gl_surface, &self.gl_context, false);
    }

    /// Hides the cursor and grabs it, for mouselook-style input.
    pub fn disable_cursor(&self) {
        self.window.set_cursor_visible(false);
        if self.window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
            // Locked isn't supported everywhere (X11); confinement is the
            // closest available behavior there.
            if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::Confined) {
                log::warn!("couldn't grab the cursor: {e}");
            }
        }
    }

    pub fn enable_cursor(&self) {
        if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("couldn't release the cursor: {e}");
        }
        self.window.set_cursor_visible(true);
    }

    pub fn reset_cursor_pos(&self) {
        if let Err(e) = self.window.set_cursor_position(PhysicalPosition::new(0.0, 0.0)) {
            log::warn!("couldn't move the cursor: {e}");
        }
    }

    /// True once the user asked to close the window.
    pub fn should_close(&self) -> bool {
        self.shared.borrow().close_requested
    }

    pub fn set_should_close(&self, close: bool) {
        self.shared.borrow_mut().close_requested = close;
    }

    /// Seconds between the two most recent `begin_frame` calls.
    pub fn delta_seconds(&self) -> f64 {
        self.clock.delta_seconds()
    }

    /// Frames counted over the most recent full second.
    pub fn fps(&self) -> u32 {
        self.clock.fps()
    }

    /// Down in any form this frame.
    pub fn key(&self, key: Key) -> bool {
        self.shared.borrow().input.key(key)
    }

    /// Went down this frame.
    pub fn key_down(&self, key: Key) -> bool {
        self.shared.borrow().input.key_down(key)
    }

    /// Went up this frame.
    pub fn key_up(&self, key: Key) -> bool {
        self.shared.borrow().input.key_up(key)
    }

    /// Down, and was already down last frame.
    pub fn key_held(&self, key: Key) -> bool {
        self.shared.borrow().input.key_held(key)
    }

    pub fn button(&self, button: MouseButton) -> bool {
        self.shared.borrow().input.button(button)
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.shared.borrow().input.button_down(button)
    }

    pub fn button_up(&self, button: MouseButton) -> bool {
        self.shared.borrow().input.button_up(button)
    }

    pub fn button_held(&self, button: MouseButton) -> bool {
        self.shared.borrow().input.button_held(button)
    }

    pub fn mouse_x(&self) -> f64 {
        self.shared.borrow().input.cursor().x
    }

    pub fn mouse_y(&self) -> f64 {
        self.shared.borrow().input.cursor().y
    }

    pub fn mouse_delta_x(&self) -> f64 {
        self.shared.borrow().input.cursor().dx
    }

    pub fn mouse_delta_y(&self) -> f64 {
        self.shared.borrow().input.cursor().dy
    }

    pub fn scroll_x(&self) -> f64 {
        self.shared.borrow().input.scroll_x()
    }

    pub fn scroll_y(&self) -> f64 {
        self.shared.borrow().input.scroll_y()
    }
}

fn set_swap_interval(
    surface: &Surface<WindowSurface>,
    context: &PossiblyCurrentContext,
    vsync: bool,
) {
    let interval = if vsync {
        SwapInterval::Wait(NonZeroU32::MIN)
    } else {
        SwapInterval::DontWait
    };

    if let Err(e) = surface.set_swap_interval(context, interval) {
        log::warn!("couldn't set the swap interval: {e}");
    }
}
