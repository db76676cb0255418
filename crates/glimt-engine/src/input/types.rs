/// Keyboard key identifier.
///
/// Deliberately minimal: the set an application polls by name. Platform
/// keycodes without a variant here surface as `Key::Unknown` with the stable
/// platform code, so nothing is silently dropped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    Up,
    Down,
    Left,
    Right,

    Shift,
    Control,
    Alt,
    Super,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Num0, Num1, Num2, Num3, Num4,
    Num5, Num6, Num7, Num8, Num9,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    Unknown(u32),
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// Platform-agnostic input event, as delivered by the event pump during
/// `begin_frame`. Press/release carry no edge information themselves; the
/// edge detection happens in `InputState`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key { key: Key, pressed: bool },
    Button { button: MouseButton, pressed: bool },
    /// Absolute cursor position in physical pixels.
    CursorMoved { x: f64, y: f64 },
    /// Scroll offsets for this event (lines or pixels, backend-dependent).
    Scroll { x: f64, y: f64 },
}
