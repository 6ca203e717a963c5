use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;

#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(StatusCode),

    #[error("Malformed animation: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Header fields of a Lottie document.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Animation {
    #[serde(rename = "nm", default)]
    pub name: String,
    #[serde(rename = "fr")]
    pub frame_rate: f64,
    #[serde(rename = "ip")]
    pub in_point: f64,
    #[serde(rename = "op")]
    pub out_point: f64,
    #[serde(rename = "w")]
    pub width: f64,
    #[serde(rename = "h")]
    pub height: f64,
}

impl Animation {
    pub fn parse(body: &str) -> Result<Animation, FetchError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn duration(&self) -> Duration {
        let frames = self.out_point - self.in_point;
        if self.frame_rate <= 0.0 || frames <= 0.0 {
            return Duration::default();
        }
        Duration::try_from_secs_f64(frames / self.frame_rate).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Decorations {
    pub welcome: Option<Animation>,
    pub celebration: Option<Animation>,
}

impl Decorations {
    pub fn none() -> Self {
        Default::default()
    }

    pub fn fetch(config: &Config) -> Self {
        let mut builder = Client::builder();
        if let Some(seconds) = config.fetch_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = match builder.build() {
            Ok(client) => client,
            Err(e) => {
                warn!("Could not create HTTP client, skipping animations: {}", e);
                return Decorations::none();
            }
        };

        Decorations {
            welcome: load_animation(&client, &config.welcome_animation_url),
            celebration: load_animation(&client, &config.celebration_animation_url),
        }
    }
}

fn fetch_animation(client: &Client, url: &str) -> Result<Animation, FetchError> {
    let response = client.get(url).send()?;
    if response.status() != StatusCode::OK {
        return Err(FetchError::Status(response.status()));
    }
    let body = response.text()?;
    Animation::parse(&body)
}

pub fn load_animation(client: &Client, url: &str) -> Option<Animation> {
    match fetch_animation(client, url) {
        Ok(animation) => {
            info!("Loaded animation `{}` from {}", animation.name, url);
            Some(animation)
        }
        Err(e) => {
            warn!("Could not load animation from {}: {}", url, e);
            None
        }
    }
}
