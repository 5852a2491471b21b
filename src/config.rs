//! Configuration management for the resume interviewer

use crate::error::{InterviewError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub interview: InterviewConfig,
    #[serde(default)]
    pub pacing: PacingConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewConfig {
    /// Soft ceiling on accepted answers before the interview wraps up
    pub max_questions: usize,
    /// Accepted achievement fragments needed to leave the achievements phase
    pub min_achievements: usize,
    pub pushback_history: usize,
    pub question_history: usize,
    pub max_answer_chars: usize,
    pub vagueness: VaguenessPolicy,
    /// Fixed seed for question and pushback selection
    pub seed: Option<u64>,
    pub transition_probability: f64,
}

/// Which vagueness rule the classifier applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaguenessPolicy {
    /// Fewer than five words during the achievements phase
    WordCount,
    /// Hedge words without numbers, or short answers without numbers
    HedgeAndDigits,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub enabled: bool,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub max_upload_bytes: u64,
    pub min_clean_ratio: f32,
    pub enable_cache: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
    Pdf,
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            max_questions: 15,
            min_achievements: 3,
            pushback_history: 10,
            question_history: 8,
            max_answer_chars: 4000,
            vagueness: VaguenessPolicy::WordCount,
            seed: None,
            transition_probability: 0.5,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_delay_ms: 800,
            max_delay_ms: 2000,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: 10 * 1024 * 1024,
            min_clean_ratio: 0.5,
            enable_cache: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interview: InterviewConfig::default(),
            pacing: PacingConfig::default(),
            input: InputConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| InterviewError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| InterviewError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-interviewer")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.interview.min_achievements == 0 {
            return Err(InterviewError::Configuration(
                "interview.min_achievements must be at least 1".to_string(),
            ));
        }
        if self.interview.max_questions == 0 {
            return Err(InterviewError::Configuration(
                "interview.max_questions must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.interview.transition_probability) {
            return Err(InterviewError::Configuration(
                "interview.transition_probability must be between 0 and 1".to_string(),
            ));
        }
        if self.pacing.min_delay_ms > self.pacing.max_delay_ms {
            return Err(InterviewError::Configuration(
                "pacing.min_delay_ms must not exceed pacing.max_delay_ms".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.input.min_clean_ratio) {
            return Err(InterviewError::Configuration(
                "input.min_clean_ratio must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}
