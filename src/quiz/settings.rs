use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub question_duration: Duration,
    pub timeout_reveal_duration: Duration,
    pub tick_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            question_duration: Duration::from_secs(20),
            timeout_reveal_duration: Duration::from_millis(1500),
            tick_interval: Duration::from_millis(100),
        }
    }
}
