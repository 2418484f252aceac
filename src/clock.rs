use instant::{Duration, Instant};

/// Frame timer.
///
/// Call [`Clock::tick`] once at the start of every frame; [`Clock::delta`]
/// then holds the time since the previous tick (or since construction for
/// the very first one).
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    last: Instant,
    delta: Duration,
    frames: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            delta: Duration::ZERO,
            frames: 0,
        }
    }

    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        self.delta = now.duration_since(self.last);
        self.last = now;
        self.frames += 1;
        self.delta
    }

    pub fn delta(&self) -> Duration {
        self.delta
    }

    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Number of ticks so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
