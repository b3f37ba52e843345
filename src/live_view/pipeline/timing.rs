use std::time::{Duration, Instant};

/// Running counters for the capture thread
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingStats {
    pub frames_processed: u64,
    /// Frames refused before integration (bad size)
    pub frames_rejected: u64,
    pub last_duration: Duration,
    pub total_duration: Duration,
}

impl ProcessingStats {
    pub fn record(&mut self, duration: Duration) {
        self.frames_processed += 1;
        self.last_duration = duration;
        self.total_duration += duration;
    }

    pub fn average_duration(&self) -> Duration {
        if self.frames_processed == 0 {
            return Duration::ZERO;
        }
        let frames = u32::try_from(self.frames_processed).unwrap_or(u32::MAX);
        self.total_duration / frames
    }

    pub fn average_ms(&self) -> f64 {
        self.average_duration().as_secs_f64() * 1000.0
    }
}

pub struct Timer {
    start: Instant,
    name: &'static str,
}

impl Timer {
    pub fn start(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    pub fn stop(self) -> (&'static str, Duration) {
        (self.name, self.start.elapsed())
    }
}
