use winit::dpi::PhysicalSize;

use crate::input::InputState;

/// Per-window state written by the event pump and read by the owning
/// `InputWindow`.
///
/// GL is deliberately untouched here: resize events only record the new size
/// and the owning window applies the viewport/surface change itself, on the
/// thread that owns the context.
#[derive(Debug)]
pub(crate) struct WindowShared {
    pub input: InputState,
    pub size: PhysicalSize<u32>,
    pub resizable: bool,
    pub pending_resize: Option<PhysicalSize<u32>>,
    pub close_requested: bool,
}

impl WindowShared {
    pub fn new(size: PhysicalSize<u32>, resizable: bool) -> Self {
        Self {
            input: InputState::default(),
            size,
            resizable,
            pending_resize: None,
            close_requested: false,
        }
    }
}
