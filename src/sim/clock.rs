//! Fixed timestep accumulator
//!
//! Turns variable frame deltas into a whole number of simulation steps and
//! keeps the leftover as an interpolation fraction for the renderer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationClock {
    /// Seconds per discrete step
    step_seconds: f32,
    /// Per-frame delta clamp (None = unbounded catch-up)
    max_frame_seconds: Option<f32>,
    /// Accumulated, not yet simulated time
    timer: f32,
}

impl SimulationClock {
    pub fn new(step_seconds: f32, max_frame_seconds: Option<f32>) -> Self {
        Self {
            step_seconds,
            max_frame_seconds,
            timer: 0.0,
        }
    }

    /// Accumulate `dt` and return how many steps are now due
    pub fn advance(&mut self, dt: f32) -> u32 {
        let mut dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        if let Some(max) = self.max_frame_seconds {
            if dt > max {
                log::warn!(
                    "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                    dt * 1000.0,
                    max * 1000.0
                );
                dt = max;
            }
        }
        self.timer += dt;

        let mut due = 0;
        while self.timer >= self.step_seconds {
            self.timer -= self.step_seconds;
            due += 1;
        }
        due
    }

    /// Fraction of the way to the next step, in [0, 1)
    pub fn progress(&self) -> f32 {
        (self.timer / self.step_seconds).clamp(0.0, 1.0)
    }

    pub fn step_seconds(&self) -> f32 {
        self.step_seconds
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one_or_many_steps() {
        let mut clock = SimulationClock::new(0.25, None);
        assert_eq!(clock.advance(0.125), 0);
        assert_eq!(clock.progress(), 0.5);
        assert_eq!(clock.advance(0.125), 1);
        assert_eq!(clock.progress(), 0.0);
        assert_eq!(clock.advance(1.0), 4);
    }

    #[test]
    fn test_leftover_carries_over() {
        let mut clock = SimulationClock::new(0.25, None);
        assert_eq!(clock.advance(0.375), 1);
        assert_eq!(clock.progress(), 0.5);
        assert_eq!(clock.advance(0.125), 1);
        assert_eq!(clock.progress(), 0.0);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = SimulationClock::new(0.25, Some(1.0));
        assert_eq!(clock.advance(30.0), 4);
        assert_eq!(clock.progress(), 0.0);
    }

    #[test]
    fn test_bad_deltas_ignored() {
        let mut clock = SimulationClock::new(0.25, None);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(f32::INFINITY), 0);
        assert_eq!(clock.progress(), 0.0);
    }

    #[test]
    fn test_reset_clears_timer() {
        let mut clock = SimulationClock::new(0.25, None);
        clock.advance(0.125);
        clock.reset();
        assert_eq!(clock.progress(), 0.0);
    }
}
