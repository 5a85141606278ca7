//! Fixed-step frame clock.
//!
//! Wall-clock time is accumulated and paid out in whole frames, so the
//! simulation always advances in identical steps regardless of how often
//! the host loop wakes up.

use super::constants::{FRAME_INTERVAL_MS, MAX_FRAME_DELTA_MS};

#[derive(Debug, Clone)]
pub struct FrameClock {
    pub frame_interval_ms: u64,
    /// Frames handed out so far. The first frame is 1.
    pub frame_count: u64,
    accumulated_ms: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL_MS)
    }
}

impl FrameClock {
    pub fn new(frame_interval_ms: u64) -> Self {
        Self {
            frame_interval_ms: frame_interval_ms.max(1),
            frame_count: 0,
            accumulated_ms: 0,
        }
    }

    /// Add elapsed time and return how many frames are now due.
    ///
    /// A single call is clamped to 100ms so a stall does not replay a burst
    /// of frames.
    pub fn accumulate(&mut self, dt_ms: u64) -> u32 {
        self.accumulated_ms += dt_ms.min(MAX_FRAME_DELTA_MS);
        let due = self.accumulated_ms / self.frame_interval_ms;
        self.accumulated_ms -= due * self.frame_interval_ms;
        due as u32
    }

    /// Hand out the next frame number.
    pub fn next_frame(&mut self) -> u64 {
        self.frame_count += 1;
        self.frame_count
    }
}
