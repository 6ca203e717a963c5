use std::time::Duration;

#[cfg(test)]
mod tests;

/// Per-question countdown. Armed on creation, fires at most once.
#[derive(Clone, Debug, PartialEq)]
pub struct Countdown {
    time_elapsed: Duration,
    time_limit: Duration,
    armed: bool,
}

impl Countdown {
    pub fn new(time_limit: Duration) -> Self {
        Countdown {
            time_elapsed: Duration::default(),
            time_limit,
            armed: true,
        }
    }

    /// Returns true on the tick where the countdown expires.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.armed {
            return false;
        }
        self.time_elapsed += dt;
        if self.time_elapsed >= self.time_limit {
            self.armed = false;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }

    pub fn is_expired(&self) -> bool {
        self.time_elapsed >= self.time_limit
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn remaining(&self) -> Duration {
        self.time_limit
            .checked_sub(self.time_elapsed)
            .unwrap_or_default()
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining().as_secs_f64().ceil() as u64
    }

    pub fn fraction(&self) -> f32 {
        if self.time_limit.as_nanos() == 0 {
            return 0.0;
        }
        self.remaining().as_secs_f32() / self.time_limit.as_secs_f32()
    }
}
