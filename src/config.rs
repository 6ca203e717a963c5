use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::quiz::Settings;

const ENV_PREFIX: &str = "QUIZ";

/// Runtime configuration, read from `QUIZ_*` environment variables.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub question_seconds: f64,
    pub timeout_reveal_seconds: f64,
    pub tick_millis: u64,
    pub welcome_animation_url: String,
    pub celebration_animation_url: String,
    pub fetch_timeout_seconds: Option<u64>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            question_seconds: 20.0,
            timeout_reveal_seconds: 1.5,
            tick_millis: 100,
            welcome_animation_url: "https://assets1.lottiefiles.com/packages/lf20_UJNc2t.json"
                .to_owned(),
            celebration_animation_url:
                "https://assets2.lottiefiles.com/packages/lf20_jbrw3hcz.json".to_owned(),
            fetch_timeout_seconds: Some(10),
            log_filter: "warn".to_owned(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Config> {
        Config::from_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn from_source<S>(source: S) -> Result<Config>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()
            .context("Could not read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn quiz_settings(&self) -> Result<Settings> {
        let question_duration = Duration::try_from_secs_f64(self.question_seconds)
            .context("Invalid question duration")?;
        let timeout_reveal_duration = Duration::try_from_secs_f64(self.timeout_reveal_seconds)
            .context("Invalid timeout reveal duration")?;
        Ok(Settings {
            question_duration,
            timeout_reveal_duration,
            tick_interval: Duration::from_millis(self.tick_millis.max(1)),
        })
    }
}
