//! Frame timing.
//!
//! One `FrameClock` per window; call `tick()` once per frame (the window does
//! this inside `begin_frame`). Kept free of backend types so the publish
//! behavior is testable with synthetic timestamps.

mod frame_clock;

pub use frame_clock::FrameClock;
