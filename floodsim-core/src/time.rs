//! Simulation time
//!
//! The engine does not read a wall clock. Time is a counter in seconds that
//! moves forward by one tick interval per tick and goes back to zero on
//! reset. Each channel then lays out its chunk of sample times so the chunk
//! ends just before the new global time:
//!
//! ```text
//! t_start = t_new - n/fs
//! t[i]    = t_start + i/fs        i = 0..n
//! ```
//!
//! With `n = round(fs·Δ)` the first timestamp of a chunk is never earlier
//! than half a sample period before the previous tick's end, so histories
//! stay strictly increasing across ticks.

/// Seconds since the engine last started
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimClock {
    now: f64,
}

impl SimClock {
    /// Clock at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time (s)
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Time one step ahead, without moving the clock
    pub fn peek(&self, dt: f64) -> f64 {
        self.now + dt
    }

    /// Move to an absolute time
    pub fn set(&mut self, t: f64) {
        self.now = t;
    }

    /// Move forward by `dt` seconds
    pub fn advance(&mut self, dt: f64) {
        self.now += dt;
    }

    /// Back to zero
    pub fn reset(&mut self) {
        self.now = 0.0;
    }
}

/// Samples per tick: `max(1, round(rate·dt))`, optionally capped
pub fn chunk_len(sample_rate_hz: f64, dt: f64, cap: Option<usize>) -> usize {
    let ideal = (sample_rate_hz * dt).round();
    let n = if ideal.is_finite() && ideal >= 1.0 {
        ideal as usize
    } else {
        1
    };
    match cap {
        Some(cap) => n.min(cap.max(1)),
        None => n,
    }
}

/// `len` evenly spaced timestamps ending one sample period before `t_end`
pub fn chunk_timestamps(t_end: f64, len: usize, sample_rate_hz: f64) -> Vec<f64> {
    let t_start = t_end - len as f64 / sample_rate_hz;
    (0..len).map(|i| t_start + i as f64 / sample_rate_hz).collect()
}
