//! Simulated "thinking" pause shown before each interviewer reply

use crate::config::PacingConfig;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ThinkingDelay {
    enabled: bool,
    min_ms: u64,
    max_ms: u64,
}

impl ThinkingDelay {
    pub fn from_config(config: &PacingConfig) -> Self {
        let (min_ms, max_ms) = if config.min_delay_ms <= config.max_delay_ms {
            (config.min_delay_ms, config.max_delay_ms)
        } else {
            (config.max_delay_ms, config.min_delay_ms)
        };
        Self {
            enabled: config.enabled,
            min_ms,
            max_ms,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            min_ms: 0,
            max_ms: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Random pause length within the configured bounds, zero when disabled
    pub fn duration(&self) -> Duration {
        if !self.enabled || self.max_ms == 0 {
            return Duration::ZERO;
        }
        let ms = rand::rng().random_range(self.min_ms..=self.max_ms);
        Duration::from_millis(ms)
    }

    /// Show a spinner while pausing. Purely presentational.
    pub async fn wait(&self) {
        let pause = self.duration();
        if pause.is_zero() {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message("thinking...");
        spinner.enable_steady_tick(Duration::from_millis(120));

        tokio::time::sleep(pause).await;
        spinner.finish_and_clear();
    }
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self::from_config(&PacingConfig::default())
    }
}
