use std::time::{Duration, Instant};

/// Per-frame clock: delta time plus a rolling one-second FPS counter.
///
/// `fps()` publishes a new value only once at least one second has elapsed
/// since the previous sample; in between, frames are accumulated internally.
/// The publishing tick itself is not counted toward the next sample.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame: Instant,
    last_fps_sample: Instant,
    frames: u32,
    delta: f64,
    fps: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            last_fps_sample: now,
            frames: 0,
            delta: 0.0,
            fps: 0,
        }
    }

    /// Advances the clock by one frame.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        self.delta = now.saturating_duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;

        if now.saturating_duration_since(self.last_fps_sample) >= Duration::from_secs(1) {
            self.fps = self.frames;
            self.frames = 0;
            self.last_fps_sample = now;
        } else {
            self.frames += 1;
        }
    }

    /// Seconds elapsed between the two most recent ticks.
    pub fn delta_seconds(&self) -> f64 {
        self.delta
    }

    /// Most recently published frames-per-second sample.
    ///
    /// Zero until the first full second has elapsed.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn delta_tracks_gap_between_ticks() {
        let mut clock = FrameClock::new();
        let start = clock.last_frame;

        clock.tick_at(at(start, 250));
        assert_eq!(clock.delta_seconds(), 0.25);

        clock.tick_at(at(start, 350));
        assert_eq!(clock.delta_seconds(), 0.1);
    }

    #[test]
    fn fps_not_published_within_first_second() {
        let mut clock = FrameClock::new();
        let start = clock.last_frame;

        for i in 1..=5 {
            clock.tick_at(at(start, i * 100));
            assert_eq!(clock.fps(), 0);
        }
    }

    #[test]
    fn fps_published_after_one_second() {
        let mut clock = FrameClock::new();
        let start = clock.last_frame;

        // 9 frames inside the window, then the publishing tick at 1.1s.
        for i in 1..=9 {
            clock.tick_at(at(start, i * 100));
        }
        clock.tick_at(at(start, 1100));

        assert_eq!(clock.fps(), 9);
    }

    #[test]
    fn publishing_tick_starts_a_fresh_window() {
        let mut clock = FrameClock::new();
        let start = clock.last_frame;

        for i in 1..=9 {
            clock.tick_at(at(start, i * 100));
        }
        clock.tick_at(at(start, 1000));
        assert_eq!(clock.fps(), 9);

        // Second window: 3 frames, published at the 2s mark.
        for i in 1..=3 {
            clock.tick_at(at(start, 1000 + i * 100));
        }
        clock.tick_at(at(start, 2000));
        assert_eq!(clock.fps(), 3);
    }
}
