//! Configuration for the eval console.

use serde::{Deserialize, Serialize};
use std::path::Path;
use verrocchio_error::{ConfigError, VerrocchioError, VerrocchioResult};
use verrocchio_harness::ReportLimits;

fn default_prefix() -> String {
    ".".to_string()
}

fn default_command() -> String {
    "eval".to_string()
}

fn default_section_limit() -> usize {
    ReportLimits::default().section
}

fn default_total_limit() -> usize {
    ReportLimits::default().total
}

/// Configuration for the eval console.
///
/// Loaded from a TOML file; every field has a default, so an empty file
/// (or no file at all) is a valid configuration as long as the token
/// arrives through the `DISCORD_TOKEN` environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerrocchioConfig {
    /// Bot token. The `DISCORD_TOKEN` environment variable takes
    /// precedence when set.
    #[serde(default)]
    pub token: Option<String>,
    /// Command prefix.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Command name.
    #[serde(default = "default_command")]
    pub command: String,
    /// Maximum characters per fenced report section.
    #[serde(default = "default_section_limit")]
    pub section_limit: usize,
    /// Maximum characters for a whole report description.
    #[serde(default = "default_total_limit")]
    pub total_limit: usize,
}

impl Default for VerrocchioConfig {
    fn default() -> Self {
        Self {
            token: None,
            prefix: default_prefix(),
            command: default_command(),
            section_limit: default_section_limit(),
            total_limit: default_total_limit(),
        }
    }
}

impl VerrocchioConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> VerrocchioResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            VerrocchioError::from(ConfigError::new(format!(
                "Failed to read config file: {}",
                e
            )))
        })?;

        toml::from_str(&content).map_err(|e| {
            VerrocchioError::from(ConfigError::new(format!("Failed to parse config: {}", e)))
        })
    }

    /// Resolve the bot token: environment first, then the config file.
    pub fn token(&self) -> VerrocchioResult<String> {
        if let Ok(token) = std::env::var("DISCORD_TOKEN") {
            if !token.trim().is_empty() {
                return Ok(token);
            }
        }
        self.token.clone().ok_or_else(|| {
            VerrocchioError::from(ConfigError::new(
                "no bot token: set DISCORD_TOKEN or the `token` config key",
            ))
        })
    }

    /// The report bounds this configuration selects.
    pub fn limits(&self) -> ReportLimits {
        ReportLimits {
            section: self.section_limit,
            total: self.total_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: VerrocchioConfig = toml::from_str("").unwrap();
        assert_eq!(config.prefix, ".");
        assert_eq!(config.command, "eval");
        assert_eq!(config.token, None);
        assert_eq!(config.limits(), ReportLimits::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config: VerrocchioConfig = toml::from_str(
            r#"
token = "abc"
prefix = "!"
command = "exec"
section_limit = 500
"#,
        )
        .unwrap();
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.prefix, "!");
        assert_eq!(config.command, "exec");
        assert_eq!(config.limits().section, 500);
        assert_eq!(config.limits().total, 4096);
    }

    #[test]
    fn unreadable_file_is_a_config_error() {
        let err = VerrocchioConfig::from_file("/nonexistent/verrocchio.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
