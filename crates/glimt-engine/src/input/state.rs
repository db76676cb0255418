use std::collections::HashMap;

use super::phase::Phase;
use super::types::{InputEvent, Key, MouseButton};

/// Absolute cursor position plus its delta since the last frame.
///
/// The delta is recomputed by position differencing on every move event, so
/// several events within one frame accumulate correctly. It is zeroed at the
/// start of each frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CursorSample {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

/// Edge-triggered input state for a single window.
///
/// Keys and buttons without an entry are `Idle`; entries that settle back to
/// `Idle` are dropped on the next frame tick, so the maps only ever hold
/// codes that were recently active.
#[derive(Debug, Default)]
pub struct InputState {
    keys: HashMap<Key, Phase>,
    buttons: HashMap<MouseButton, Phase>,
    cursor: CursorSample,
    scroll: (f64, f64),
}

impl InputState {
    /// Per-frame advance: promotes `Pressed` to `Held`, retires `Released`
    /// to `Idle`, and zeroes cursor delta and scroll offsets.
    ///
    /// Call before pumping backend events so that the edges produced by this
    /// frame's events survive until the next call.
    pub fn begin_frame(&mut self) {
        for phase in self.keys.values_mut() {
            *phase = phase.tick();
        }
        self.keys.retain(|_, phase| *phase != Phase::Idle);

        for phase in self.buttons.values_mut() {
            *phase = phase.tick();
        }
        self.buttons.retain(|_, phase| *phase != Phase::Idle);

        self.cursor.dx = 0.0;
        self.cursor.dy = 0.0;
        self.scroll = (0.0, 0.0);
    }

    /// Applies one backend event to the state.
    pub fn apply_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Key { key, pressed } => {
                let phase = self.keys.entry(key).or_default();
                *phase = if pressed { phase.press() } else { phase.release() };
            }

            InputEvent::Button { button, pressed } => {
                let phase = self.buttons.entry(button).or_default();
                *phase = if pressed { phase.press() } else { phase.release() };
            }

            InputEvent::CursorMoved { x, y } => {
                self.cursor.dx = x - self.cursor.x;
                self.cursor.dy = y - self.cursor.y;
                self.cursor.x = x;
                self.cursor.y = y;
            }

            // Latest-wins: multiple scroll events in one frame overwrite
            // rather than sum.
            InputEvent::Scroll { x, y } => {
                self.scroll = (x, y);
            }
        }
    }

    pub fn key_phase(&self, key: Key) -> Phase {
        self.keys.get(&key).copied().unwrap_or_default()
    }

    pub fn button_phase(&self, button: MouseButton) -> Phase {
        self.buttons.get(&button).copied().unwrap_or_default()
    }

    /// Down in any form this frame.
    pub fn key(&self, key: Key) -> bool {
        self.key_phase(key).is_down()
    }

    /// Went down this frame.
    pub fn key_down(&self, key: Key) -> bool {
        self.key_phase(key).is_pressed()
    }

    /// Went up this frame.
    pub fn key_up(&self, key: Key) -> bool {
        self.key_phase(key).is_released()
    }

    /// Down, and was already down last frame.
    pub fn key_held(&self, key: Key) -> bool {
        self.key_phase(key).is_held()
    }

    pub fn button(&self, button: MouseButton) -> bool {
        self.button_phase(button).is_down()
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.button_phase(button).is_pressed()
    }

    pub fn button_up(&self, button: MouseButton) -> bool {
        self.button_phase(button).is_released()
    }

    pub fn button_held(&self, button: MouseButton) -> bool {
        self.button_phase(button).is_held()
    }

    pub fn cursor(&self) -> CursorSample {
        self.cursor
    }

    pub fn scroll_x(&self) -> f64 {
        self.scroll.0
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: &mut InputState, key: Key) {
        state.apply_event(InputEvent::Key { key, pressed: true });
    }

    fn release(state: &mut InputState, key: Key) {
        state.apply_event(InputEvent::Key { key, pressed: false });
    }

    #[test]
    fn press_hold_release_idle_sequence() {
        let mut state = InputState::default();

        press(&mut state, Key::W);
        assert!(state.key_down(Key::W));
        assert!(state.key(Key::W));
        assert!(!state.key_held(Key::W));

        state.begin_frame();
        assert!(state.key_held(Key::W));
        assert!(state.key(Key::W));
        assert!(!state.key_down(Key::W));

        release(&mut state, Key::W);
        assert!(state.key_up(Key::W));
        assert!(!state.key(Key::W));

        state.begin_frame();
        assert_eq!(state.key_phase(Key::W), Phase::Idle);
    }

    #[test]
    fn rapid_press_release_within_one_frame() {
        let mut state = InputState::default();

        press(&mut state, Key::Space);
        release(&mut state, Key::Space);
        assert!(state.key_up(Key::Space));

        state.begin_frame();
        assert_eq!(state.key_phase(Key::Space), Phase::Idle);

        // And the state must not be stuck: a fresh press still registers.
        press(&mut state, Key::Space);
        assert!(state.key_down(Key::Space));
    }

    #[test]
    fn repeat_press_while_held_stays_held() {
        let mut state = InputState::default();

        press(&mut state, Key::A);
        state.begin_frame();
        assert!(state.key_held(Key::A));

        press(&mut state, Key::A);
        assert!(state.key_held(Key::A));
        assert!(!state.key_down(Key::A));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::default();

        release(&mut state, Key::Q);
        assert_eq!(state.key_phase(Key::Q), Phase::Idle);
        assert!(!state.key_up(Key::Q));
    }

    #[test]
    fn idle_entries_are_dropped_after_tick() {
        let mut state = InputState::default();

        press(&mut state, Key::E);
        release(&mut state, Key::E);
        state.begin_frame();

        assert!(state.keys.is_empty());
    }

    #[test]
    fn button_edges_mirror_key_edges() {
        let mut state = InputState::default();

        state.apply_event(InputEvent::Button {
            button: MouseButton::Left,
            pressed: true,
        });
        assert!(state.button_down(MouseButton::Left));

        state.begin_frame();
        assert!(state.button_held(MouseButton::Left));

        state.apply_event(InputEvent::Button {
            button: MouseButton::Left,
            pressed: false,
        });
        assert!(state.button_up(MouseButton::Left));

        state.begin_frame();
        assert!(!state.button(MouseButton::Left));
    }

    #[test]
    fn cursor_delta_is_zero_without_events() {
        let mut state = InputState::default();

        state.apply_event(InputEvent::CursorMoved { x: 10.0, y: 20.0 });
        state.begin_frame();

        let cursor = state.cursor();
        assert_eq!((cursor.dx, cursor.dy), (0.0, 0.0));
        assert_eq!((cursor.x, cursor.y), (10.0, 20.0));
    }

    #[test]
    fn cursor_delta_from_single_move() {
        let mut state = InputState::default();

        state.apply_event(InputEvent::CursorMoved { x: 100.0, y: 50.0 });
        state.begin_frame();
        state.apply_event(InputEvent::CursorMoved { x: 103.0, y: 46.0 });

        let cursor = state.cursor();
        assert_eq!((cursor.dx, cursor.dy), (3.0, -4.0));
    }

    #[test]
    fn cursor_events_accumulate_via_position_differencing() {
        let mut state = InputState::default();

        state.apply_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        state.begin_frame();

        // Two moves in one frame: the delta reflects only the last hop, but
        // the recorded position tracks every event.
        state.apply_event(InputEvent::CursorMoved { x: 15.0, y: 10.0 });
        state.apply_event(InputEvent::CursorMoved { x: 18.0, y: 12.0 });

        let cursor = state.cursor();
        assert_eq!((cursor.x, cursor.y), (18.0, 12.0));
        assert_eq!((cursor.dx, cursor.dy), (3.0, 2.0));
    }

    #[test]
    fn scroll_overwrites_within_a_frame_and_resets() {
        let mut state = InputState::default();

        state.apply_event(InputEvent::Scroll { x: 0.0, y: 1.0 });
        state.apply_event(InputEvent::Scroll { x: 0.0, y: -2.0 });
        assert_eq!((state.scroll_x(), state.scroll_y()), (0.0, -2.0));

        state.begin_frame();
        assert_eq!((state.scroll_x(), state.scroll_y()), (0.0, 0.0));
    }
}
