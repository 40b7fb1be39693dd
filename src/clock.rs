//! Fixed-interval input clock
//!
//! Horizontal movement runs on its own ~60 Hz clock, independent of the
//! display refresh that drives physics. The clock turns elapsed wall time into
//! a number of whole input steps.

use crate::consts::{INPUT_INTERVAL, MAX_INPUT_STEPS};

#[derive(Debug, Clone)]
pub struct InputClock {
    interval: f32,
    accumulator: f32,
}

impl Default for InputClock {
    fn default() -> Self {
        Self::new(INPUT_INTERVAL)
    }
}

impl InputClock {
    pub fn new(interval: f32) -> Self {
        Self {
            interval: interval.max(f32::EPSILON),
            accumulator: 0.0,
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Add `dt` seconds and return how many steps are due.
    ///
    /// At most `MAX_INPUT_STEPS` are returned; any backlog beyond that is
    /// dropped so a long stall does not replay a burst of movement.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.interval && steps < MAX_INPUT_STEPS {
            self.accumulator -= self.interval;
            steps += 1;
        }
        if steps == MAX_INPUT_STEPS {
            self.accumulator = self.accumulator.min(self.interval);
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_steps(clock: &mut InputClock, frame_dt: f32, frames: u32) -> u32 {
        (0..frames).map(|_| clock.advance(frame_dt)).sum()
    }

    #[test]
    fn test_coupled_rate_one_step_per_frame() {
        let mut clock = InputClock::new(1.0 / 60.0);
        // Slightly over one interval per frame so float error never drops a step
        let steps: Vec<u32> = (0..60).map(|_| clock.advance(1.0 / 60.0 + 1e-6)).collect();
        assert!(steps.iter().all(|&s| s == 1));
    }

    #[test]
    fn test_slow_frames_get_multiple_steps() {
        let mut clock = InputClock::new(0.016);
        // 30 Hz display: ~2 input steps per frame
        let steps = total_steps(&mut clock, 1.0 / 30.0, 30);
        assert!((61..=63).contains(&steps), "steps {steps}");
    }

    #[test]
    fn test_fast_frames_skip_steps() {
        let mut clock = InputClock::new(0.016);
        // 144 Hz display: most frames run no input step
        let per_frame: Vec<u32> = (0..144).map(|_| clock.advance(1.0 / 144.0)).collect();
        let total: u32 = per_frame.iter().sum();
        assert!((61..=63).contains(&total), "total {total}");
        assert!(per_frame.iter().filter(|&&s| s == 0).count() > 70);
    }

    #[test]
    fn test_stall_is_capped() {
        let mut clock = InputClock::new(0.016);
        assert_eq!(clock.advance(5.0), MAX_INPUT_STEPS);
        // Backlog dropped: next normal frame runs at most one extra step
        assert!(clock.advance(0.016) <= 2);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut clock = InputClock::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.interval(), INPUT_INTERVAL);
    }
}
