/// Edge-triggered state of a single key or mouse button.
///
/// `Pressed` and `Released` are visible for exactly one frame: the next
/// `tick()` promotes them to `Held` and `Idle` respectively. Transitions are
/// pure so the table is testable in isolation.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Phase {
    #[default]
    Idle,
    /// Went down this frame.
    Pressed,
    /// Down, and was already down last frame.
    Held,
    /// Went up this frame.
    Released,
}

impl Phase {
    /// Per-frame advance, applied at the start of every frame.
    #[must_use]
    pub fn tick(self) -> Self {
        match self {
            Phase::Pressed => Phase::Held,
            Phase::Released => Phase::Idle,
            other => other,
        }
    }

    /// Applies a backend press event.
    ///
    /// A press while already `Held` stays `Held`, so repeat events from the
    /// backend cannot re-trigger the `Pressed` edge.
    #[must_use]
    pub fn press(self) -> Self {
        match self {
            Phase::Held => Phase::Held,
            _ => Phase::Pressed,
        }
    }

    /// Applies a backend release event.
    ///
    /// A release while `Idle` stays `Idle`; anything that was down in any
    /// form becomes `Released`.
    #[must_use]
    pub fn release(self) -> Self {
        match self {
            Phase::Idle => Phase::Idle,
            _ => Phase::Released,
        }
    }

    /// Down in any form (`Pressed` or `Held`).
    pub fn is_down(self) -> bool {
        matches!(self, Phase::Pressed | Phase::Held)
    }

    pub fn is_pressed(self) -> bool {
        self == Phase::Pressed
    }

    pub fn is_held(self) -> bool {
        self == Phase::Held
    }

    pub fn is_released(self) -> bool {
        self == Phase::Released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_table() {
        assert_eq!(Phase::Idle.tick(), Phase::Idle);
        assert_eq!(Phase::Pressed.tick(), Phase::Held);
        assert_eq!(Phase::Held.tick(), Phase::Held);
        assert_eq!(Phase::Released.tick(), Phase::Idle);
    }

    #[test]
    fn full_press_release_cycle() {
        let p = Phase::Idle.press();
        assert_eq!(p, Phase::Pressed);

        let p = p.tick();
        assert_eq!(p, Phase::Held);

        let p = p.release();
        assert_eq!(p, Phase::Released);

        let p = p.tick();
        assert_eq!(p, Phase::Idle);
    }

    #[test]
    fn press_while_held_does_not_retrigger() {
        assert_eq!(Phase::Held.press(), Phase::Held);
    }

    #[test]
    fn release_while_idle_is_ignored() {
        assert_eq!(Phase::Idle.release(), Phase::Idle);
    }

    #[test]
    fn press_and_release_within_one_frame() {
        // Both edges arrive before the next tick; the release edge wins and
        // the state settles back to Idle on the following tick.
        let p = Phase::Idle.press().release();
        assert_eq!(p, Phase::Released);
        assert_eq!(p.tick(), Phase::Idle);
    }

    #[test]
    fn queries() {
        assert!(Phase::Pressed.is_down());
        assert!(Phase::Held.is_down());
        assert!(!Phase::Released.is_down());
        assert!(!Phase::Idle.is_down());

        assert!(Phase::Pressed.is_pressed());
        assert!(!Phase::Held.is_pressed());
        assert!(Phase::Held.is_held());
        assert!(Phase::Released.is_released());
    }
}
