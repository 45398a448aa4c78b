//! Frame timing.
//!
//! Provides delta time with a spike clamp, a rolling FPS average, and the
//! per-frame budget for sleeping when the loop runs ahead of the target.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Frame timing manager.
#[derive(Debug)]
pub struct FrameTiming {
    /// Time budget per frame
    frame_budget: Duration,
    /// Time of last frame start
    last_frame: Instant,
    /// Maximum delta time to prevent spiral of death
    max_dt: f32,
    /// Recent frame times for averaging
    frame_times: VecDeque<f32>,
    /// Maximum samples for averaging
    max_samples: usize,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FrameTiming {
    /// Create a new frame timing manager targeting the given FPS.
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let target_fps = target_fps.max(1);
        Self {
            frame_budget: Duration::from_secs_f64(1.0 / f64::from(target_fps)),
            last_frame: Instant::now(),
            max_dt: 0.25,
            frame_times: VecDeque::with_capacity(120),
            max_samples: 120,
        }
    }

    /// Calculate delta time since last frame, clamped to the spike limit.
    /// Also stores the frame time for FPS calculation.
    pub fn delta_time(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        let clamped_dt = dt.min(self.max_dt);

        self.frame_times.push_back(clamped_dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }

        clamped_dt
    }

    /// Average FPS over the recent sample window.
    #[must_use]
    pub fn average_fps(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.frame_times.iter().sum();
        if sum <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f32 / sum
    }

    /// The per-frame time budget for the target FPS.
    #[must_use]
    pub const fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Time remaining in the current frame's budget, if any.
    #[must_use]
    pub fn budget_remaining(&self) -> Option<Duration> {
        self.frame_budget.checked_sub(self.last_frame.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_from_target() {
        let timing = FrameTiming::new(60);
        let budget = timing.frame_budget().as_secs_f64();
        assert!((budget - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_fps_clamps_to_one() {
        let timing = FrameTiming::new(0);
        assert!((timing.frame_budget().as_secs_f64() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_delta_time_positive_and_clamped() {
        let mut timing = FrameTiming::new(60);
        std::thread::sleep(Duration::from_millis(2));
        let dt = timing.delta_time();
        assert!(dt > 0.0);
        assert!(dt <= 0.25);
    }

    #[test]
    fn test_average_fps_after_samples() {
        let mut timing = FrameTiming::new(60);
        assert_eq!(timing.average_fps(), 0.0);
        for _ in 0..5 {
            std::thread::sleep(Duration::from_millis(1));
            let _ = timing.delta_time();
        }
        assert!(timing.average_fps() > 0.0);
    }
}
