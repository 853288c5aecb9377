use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{DeskError, Result};

/// Greeting shown as the first transcript entry of every chat intake.
pub const DEFAULT_GREETING: &str =
    "Hello! I'm here to help you with your complaints. What seems to be the issue today?";

/// Top-level configuration for the desk system.
///
/// Loaded from a TOML file by the embedding application. Each section
/// corresponds to one member crate's knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub triage: TriageConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            triage: TriageConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl DeskConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DeskConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| DeskError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Triage and ticket-creation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Character count a derived title is truncated to before the ellipsis
    /// marker is appended.
    pub title_max_chars: usize,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self { title_max_chars: 50 }
    }
}

/// Chat intake settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// First bot message seeded into every transcript.
    pub greeting: String,
    /// Maximum accepted message length in characters.
    pub max_message_chars: usize,
    /// Staged intake: delay before the acknowledgment reply is recorded.
    pub ack_delay_ms: u64,
    /// Staged intake: delay between the acknowledgment and ticket creation.
    pub materialize_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            max_message_chars: 2000,
            ack_delay_ms: 1500,
            materialize_delay_ms: 1000,
        }
    }
}
