//! Time subsystem.
//!
//! Provides a fixed-period frame pacer decoupled from the platform clock.
//! Intended usage:
//! - one `FrameTimer` per loop
//! - call `wait()` once per frame, after drawing

mod clock;
mod frame_timer;

pub use clock::{Clock, MonotonicClock};
pub use frame_timer::FrameTimer;
