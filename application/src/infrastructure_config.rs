use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ProcessingSettings;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub fonts: FontConfig,
    pub logging: LoggingConfig,
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub request_timeout_secs: u64,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    pub enabled: bool,
    /// Fonts rendered at the size derived from the image dimensions.
    pub scalable_font_paths: Vec<String>,
    /// Fonts rendered at `default_font_px` when no scalable font loads.
    pub default_font_paths: Vec<String>,
    pub default_font_px: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Overrides the level implied by `server.debug`.
    pub level: Option<String>,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scalable_font_paths: vec![
                "Arial.ttf".to_string(),
                "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf".to_string(),
                "/Library/Fonts/Arial.ttf".to_string(),
                "/System/Library/Fonts/Supplemental/Arial.ttf".to_string(),
                "C:\\Windows\\Fonts\\arial.ttf".to_string(),
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf".to_string(),
                "/usr/share/fonts/TTF/DejaVuSans.ttf".to_string(),
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf".to_string(),
            ],
            default_font_paths: vec![
                "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf".to_string(),
                "/usr/share/fonts/TTF/DejaVuSansMono.ttf".to_string(),
                "/System/Library/Fonts/Monaco.ttf".to_string(),
                "C:\\Windows\\Fonts\\consola.ttf".to_string(),
            ],
            default_font_px: 11.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5001,
                debug: true,
                request_timeout_secs: 30,
                max_body_bytes: 50 * 1024 * 1024,
            },
            fonts: FontConfig::default(),
            logging: LoggingConfig {
                level: None,
                format: LogFormat::Pretty,
                include_location: false,
            },
            environment: EnvironmentConfig {
                env: "development".to_string(),
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        if self.server.port == 0 {
            return Err(AppError::ConfigError {
                message: "port must be between 1 and 65535".to_string(),
            });
        }

        if self.server.request_timeout_secs == 0 {
            return Err(AppError::ConfigError {
                message: "request_timeout_secs must be greater than 0".to_string(),
            });
        }

        if self.server.max_body_bytes == 0 {
            return Err(AppError::ConfigError {
                message: "max_body_bytes must be greater than 0".to_string(),
            });
        }

        if !self.fonts.default_font_px.is_finite() || self.fonts.default_font_px <= 0.0 {
            return Err(AppError::ConfigError {
                message: "default_font_px must be a positive number".to_string(),
            });
        }

        if self
            .logging
            .level
            .as_deref()
            .is_some_and(|level| level.trim().is_empty())
        {
            return Err(AppError::ConfigError {
                message: "logging level cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// `debug` when debug mode is on, `info` otherwise, unless configured.
    #[must_use]
    pub fn log_level(&self) -> &str {
        match self.logging.level.as_deref() {
            Some(level) => level,
            None if self.server.debug => "debug",
            None => "info",
        }
    }

    #[must_use]
    pub fn processing_settings(&self) -> ProcessingSettings {
        ProcessingSettings {
            request_timeout: Duration::from_secs(self.server.request_timeout_secs),
        }
    }
}
