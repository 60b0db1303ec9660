//! Frame rate limiting
//!
//! Sleeps away whatever is left of the frame interval after a frame is
//! presented, so the frame loop ticks at most `cap` times per second.

use std::time::{Duration, Instant};

/// Blocks the calling thread to enforce a frame cap
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Option<Duration>,
    last_frame: Instant,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new()
    }
}

impl FramePacer {
    /// Uncapped until [`FramePacer::set_cap`] is called
    pub fn new() -> Self {
        Self {
            interval: None,
            last_frame: Instant::now(),
        }
    }

    /// Limit to `fps` frames per second; 0 removes the cap
    pub fn set_cap(&mut self, fps: u32) {
        self.interval = (fps > 0).then(|| Duration::from_secs_f64(1.0 / fps as f64));
        self.last_frame = Instant::now();
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Sleep until one interval has passed since the previous frame.
    /// Returns how long the thread slept.
    pub fn wait(&mut self) -> Duration {
        let mut slept = Duration::ZERO;
        if let Some(interval) = self.interval {
            let elapsed = self.last_frame.elapsed();
            if elapsed < interval {
                slept = interval - elapsed;
                std::thread::sleep(slept);
            }
        }
        self.last_frame = Instant::now();
        slept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncapped_never_sleeps() {
        let mut pacer = FramePacer::new();
        assert!(pacer.interval().is_none());
        assert_eq!(pacer.wait(), Duration::ZERO);
    }

    #[test]
    fn test_cap_sets_interval() {
        let mut pacer = FramePacer::new();
        pacer.set_cap(60);
        let interval = pacer.interval().unwrap();
        assert!((interval.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);

        pacer.set_cap(0);
        assert!(pacer.interval().is_none());
    }

    #[test]
    fn test_wait_holds_for_interval() {
        let mut pacer = FramePacer::new();
        let start = Instant::now();
        pacer.set_cap(100);
        pacer.wait();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_slow_frame_does_not_sleep() {
        let mut pacer = FramePacer::new();
        pacer.set_cap(1000);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(pacer.wait(), Duration::ZERO);
    }
}
