/// Converts host frame timestamps (milliseconds) into frame deltas (seconds).
/// The first frame yields a zero delta; long stalls (hidden tab) are capped.
pub struct FrameClock {
    /// Largest delta reported in seconds.
    max_dt: f32,
    /// Timestamp of the previous frame in milliseconds.
    last_ms: Option<f64>,
    /// Total frames observed.
    frames: u64,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt,
            last_ms: None,
            frames: 0,
        }
    }

    /// Record a frame at `now_ms` and return the elapsed seconds since the last one.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        self.frames += 1;
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        // Timestamps can run backwards across a host clock reset
        dt.clamp(0.0, self.max_dt)
    }

    /// Forget the previous timestamp so the next frame starts from zero.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }
}
