//! Movement domain: one-shot countdown timers for input forgiveness windows.

/// One-shot countdown measured in seconds.
///
/// A stopped or expired timer reports zero remaining time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountdownTimer {
    wait_time: f32,
    time_left: f32,
}

impl CountdownTimer {
    pub fn new(wait_time: f32) -> Self {
        Self {
            wait_time: wait_time.max(0.0),
            time_left: 0.0,
        }
    }

    /// Restart from the full wait time.
    pub fn start(&mut self) {
        self.time_left = self.wait_time;
    }

    pub fn stop(&mut self) {
        self.time_left = 0.0;
    }

    pub fn remaining(&self) -> f32 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.time_left > 0.0
    }

    pub fn wait_time(&self) -> f32 {
        self.wait_time
    }

    pub fn tick(&mut self, dt: f32) {
        if self.time_left > 0.0 {
            self.time_left = (self.time_left - dt).max(0.0);
        }
    }
}
