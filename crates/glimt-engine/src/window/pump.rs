use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Weak;
use std::time::Duration;

use anyhow::{Context as _, Result, anyhow};
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin_winit::DisplayBuilder;
use winit::application::ApplicationHandler;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::EventLoopExtPumpEvents;
use winit::window::{Window, WindowAttributes, WindowId};

use super::shared::WindowShared;
use crate::input::platform;

/// Owns the process-wide event loop and dispatches window events.
///
/// Events are routed through a map from backend window id to the owning
/// window's shared state; there is no global instance, so several windows
/// can coexist on one pump. Windows register on creation and are pruned once
/// their owner is dropped.
pub struct EventPump {
    event_loop: EventLoop<()>,
    routes: HashMap<WindowId, Weak<RefCell<WindowShared>>>,
}

impl EventPump {
    /// One-time backend setup.
    ///
    /// Failure means the windowing backend is unusable; there is no recovery
    /// path, so callers should propagate this out of `main`.
    pub fn new() -> Result<Self> {
        let event_loop = EventLoop::new().context("failed to create the event loop")?;
        Ok(Self {
            event_loop,
            routes: HashMap::new(),
        })
    }

    pub(crate) fn register(&mut self, id: WindowId, shared: Weak<RefCell<WindowShared>>) {
        self.routes.insert(id, shared);
    }

    /// Pumps all pending backend events, dispatching each to its window.
    ///
    /// Returns once the queue is drained; event delivery happens
    /// synchronously inside this call.
    pub(crate) fn poll(&mut self) {
        self.routes.retain(|_, shared| shared.strong_count() > 0);

        let Self { event_loop, routes } = self;
        let mut router = Router { routes };
        let _ = event_loop.pump_app_events(Some(Duration::ZERO), &mut router);
    }

    /// Creates a winit window together with a matching GL config.
    ///
    /// winit only hands out window-creation capability inside an event-loop
    /// callback, so this runs one pump iteration with a handler that builds
    /// the window on its first callback. Events for existing windows that
    /// arrive during that iteration are routed as usual.
    pub(crate) fn create_window(&mut self, attrs: WindowAttributes) -> Result<(Window, Config)> {
        self.routes.retain(|_, shared| shared.strong_count() > 0);

        let Self { event_loop, routes } = self;
        let mut factory = WindowFactory {
            routes,
            attrs: Some(attrs),
            created: None,
        };
        let _ = event_loop.pump_app_events(Some(Duration::ZERO), &mut factory);

        factory
            .created
            .take()
            .unwrap_or_else(|| Err(anyhow!("the event loop never invoked the window factory")))
    }
}

/// Routes one backend event to the owning window's shared state.
fn dispatch(
    routes: &HashMap<WindowId, Weak<RefCell<WindowShared>>>,
    window_id: WindowId,
    event: &WindowEvent,
) {
    let Some(shared) = routes.get(&window_id).and_then(Weak::upgrade) else {
        return;
    };
    let mut shared = shared.borrow_mut();

    match event {
        WindowEvent::CloseRequested => shared.close_requested = true,

        WindowEvent::Resized(size) => {
            // Fixed-size windows ignore resize events entirely.
            if shared.resizable {
                shared.pending_resize = Some(*size);
            }
        }

        other => {
            if let Some(ev) = platform::winit::translate(other) {
                shared.input.apply_event(ev);
            }
        }
    }
}

struct Router<'a> {
    routes: &'a HashMap<WindowId, Weak<RefCell<WindowShared>>>,
}

impl ApplicationHandler for Router<'_> {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        dispatch(self.routes, window_id, &event);
    }
}

struct WindowFactory<'a> {
    routes: &'a HashMap<WindowId, Weak<RefCell<WindowShared>>>,
    attrs: Option<WindowAttributes>,
    created: Option<Result<(Window, Config)>>,
}

impl WindowFactory<'_> {
    fn try_create(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attrs) = self.attrs.take() else {
            return;
        };

        let builder = DisplayBuilder::new().with_window_attributes(Some(attrs));
        self.created = Some(
            match builder.build(event_loop, ConfigTemplateBuilder::new(), pick_config) {
                Ok((Some(window), config)) => Ok((window, config)),
                Ok((None, _)) => Err(anyhow!("display builder produced no window")),
                Err(e) => Err(anyhow!("failed to create the window and GL config: {e}")),
            },
        );
    }
}

impl ApplicationHandler for WindowFactory<'_> {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, _cause: StartCause) {
        self.try_create(event_loop);
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.try_create(event_loop);
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        dispatch(self.routes, window_id, &event);
    }
}

/// Prefers the config with the fewest samples; multisampling is not part of
/// this layer.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, candidate| {
            if candidate.num_samples() < best.num_samples() {
                candidate
            } else {
                best
            }
        })
        .expect("the platform offered no GL configs")
}
