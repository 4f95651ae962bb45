use instant::Instant;

/// Counts ticks and reports the average rate once per interval.
pub struct FrameStats {
    interval_sec: f32,
    window_start: Instant,
    frames: u32,
}

impl FrameStats {
    pub fn new(interval_sec: f32) -> Self {
        Self::starting_at(interval_sec, Instant::now())
    }

    pub fn starting_at(interval_sec: f32, start: Instant) -> Self {
        Self {
            interval_sec,
            window_start: start,
            frames: 0,
        }
    }

    /// Record one frame; returns frames per second when an interval completes.
    pub fn record(&mut self) -> Option<f32> {
        self.record_at(Instant::now())
    }

    pub fn record_at(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        if now <= self.window_start {
            return None;
        }
        let elapsed = now.duration_since(self.window_start).as_secs_f32();
        if elapsed < self.interval_sec {
            return None;
        }
        let fps = self.frames as f32 / elapsed;
        self.frames = 0;
        self.window_start = now;
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn reports_once_per_interval() {
        let t0 = Instant::now();
        let mut stats = FrameStats::starting_at(1.0, t0);
        for i in 1..60 {
            let t = t0 + Duration::from_millis(i * 16);
            assert_eq!(stats.record_at(t), None);
        }
        let fps = stats.record_at(t0 + Duration::from_secs(1)).unwrap();
        assert!((fps - 60.0).abs() < 1e-3);
        assert_eq!(
            stats.record_at(t0 + Duration::from_millis(1016)),
            None,
            "counter restarts after a report"
        );
    }
}
