//! Looping playback clock for animation clips

/// Playback cursor of a clip
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackClock {
    /// Current time within the clip (seconds)
    time: f32,
    /// Clip length (seconds)
    duration: f32,
}

impl PlaybackClock {
    /// Create a clock at time 0
    pub fn new(duration: f32) -> Self {
        Self {
            time: 0.0,
            duration,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Check if the clock can advance at all
    pub fn has_duration(&self) -> bool {
        self.duration > 0.0
    }

    /// Reset the time to the beginning
    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    /// Advance by `delta_time` seconds, wrapping around at the end
    ///
    /// Clips without duration stay at time 0. Negative deltas wrap backwards.
    pub fn tick(&mut self, delta_time: f32) {
        if !delta_time.is_finite() {
            log::warn!("Ignoring non-finite animation delta time {}", delta_time);
            return;
        }

        if !self.has_duration() {
            self.time = 0.0;
            return;
        }

        self.time = (self.time + delta_time).rem_euclid(self.duration);
        // Tiny negative sums round up to exactly `duration` in f32
        if self.time >= self.duration {
            self.time = 0.0;
        }
    }
}
