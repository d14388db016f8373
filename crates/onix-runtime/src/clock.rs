//! Frame clock with clamped delta time

use std::time::Instant;

/// Longest frame the clock will report, in seconds
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Tracks viewer time and hands out one clamped delta per frame
pub struct FrameClock {
    /// Total elapsed time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Frames counted so far
    pub frame: u64,
    last_instant: Instant,
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            frame: 0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance from the wall clock. Call once per frame; the first call
    /// yields a zero delta.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            return 0.0;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.advance(elapsed)
    }

    /// Advance by a measured frame time, clamped to `MAX_FRAME_TIME`
    pub fn advance(&mut self, elapsed: f64) -> f64 {
        // A stalled frame (debugger, window drag) must not teleport models
        self.delta_time = if elapsed.is_finite() {
            elapsed.clamp(0.0, MAX_FRAME_TIME)
        } else {
            0.0
        };
        self.total_time += self.delta_time;
        self.frame += 1;
        self.delta_time
    }

    /// Advance by one fixed simulation step. Offline runs pick their own
    /// step, so the frame-time clamp does not apply.
    pub fn step_fixed(&mut self, step: f64) -> f64 {
        self.delta_time = if step.is_finite() { step.max(0.0) } else { 0.0 };
        self.total_time += self.delta_time;
        self.frame += 1;
        self.delta_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults() {
        let clock = FrameClock::new();
        assert_eq!(clock.total_time, 0.0);
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.frame, 0);
    }

    #[test]
    fn test_first_tick_zero_delta() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(), 0.0);
        assert_eq!(clock.frame, 0);
    }

    #[test]
    fn test_long_frames_clamp() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(2.0), MAX_FRAME_TIME);
        assert_eq!(clock.advance(-1.0), 0.0);
        assert_eq!(clock.advance(f64::NAN), 0.0);
        assert!((clock.advance(0.1) - 0.1).abs() < 1e-12);
        assert!((clock.total_time - 0.35).abs() < 1e-12);
        assert_eq!(clock.frame, 4);
    }

    #[test]
    fn test_fixed_steps_are_not_clamped() {
        let mut clock = FrameClock::new();
        for _ in 0..10 {
            assert_eq!(clock.step_fixed(1.0), 1.0);
        }
        assert_eq!(clock.total_time, 10.0);
        assert_eq!(clock.frame, 10);
        assert_eq!(clock.step_fixed(f64::INFINITY), 0.0);
        assert_eq!(clock.step_fixed(-0.5), 0.0);
    }
}
