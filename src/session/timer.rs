use serde::{Deserialize, Serialize};

/// How close the countdown is to running out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Calm,
    /// 5 seconds or less left
    Warning,
    /// 3 seconds or less left
    Critical,
}

/// Per-frame answer countdown. Pure arithmetic over caller-measured time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    duration_secs: u32,
}

impl Countdown {
    pub fn new(duration_secs: u32) -> Self {
        Self { duration_secs }
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn remaining(&self, elapsed_secs: f64) -> f64 {
        (self.duration_secs as f64 - elapsed_secs).max(0.0)
    }

    pub fn is_expired(&self, elapsed_secs: f64) -> bool {
        elapsed_secs >= self.duration_secs as f64
    }

    pub fn urgency(&self, elapsed_secs: f64) -> Urgency {
        let left = self.remaining(elapsed_secs);
        if left <= 3.0 {
            Urgency::Critical
        } else if left <= 5.0 {
            Urgency::Warning
        } else {
            Urgency::Calm
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(20)
    }
}

/// Format whole seconds as `M:SS`
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
