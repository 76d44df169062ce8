//! Shared configuration loader for agentdesk.
//!
//! `defaults/agentdesk.default.toml` is embedded into the binary so that docs
//! and runtime behavior stay in sync. User files are layered on top of those
//! defaults via [`Loader`] before deserializing into [`AgentdeskConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/agentdesk.default.toml");

/// Top-level configuration consumed by the agentdesk binary.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentdeskConfig {
    pub logging: LoggingConfig,
    pub narration: NarrationConfig,
    pub pacing: PacingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// How the demo conversation is rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct NarrationConfig {
    pub assistant_name: String,
    pub banner_width: usize,
}

/// Pauses between narration steps.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PacingConfig {
    pub interactive: bool,
    pub header_ms: u64,
    pub user_action_ms: u64,
    pub item_ms: u64,
    pub response_ms: u64,
    pub scene_ms: u64,
}

impl PacingConfig {
    /// No delays and no prompts.
    pub fn instant() -> Self {
        Self {
            interactive: false,
            header_ms: 0,
            user_action_ms: 0,
            item_ms: 0,
            response_ms: 0,
            scene_ms: 0,
        }
    }

    pub fn header(&self) -> Duration {
        Duration::from_millis(self.header_ms)
    }

    pub fn user_action(&self) -> Duration {
        Duration::from_millis(self.user_action_ms)
    }

    pub fn item(&self) -> Duration {
        Duration::from_millis(self.item_ms)
    }

    pub fn response(&self) -> Duration {
        Duration::from_millis(self.response_ms)
    }

    pub fn scene(&self) -> Duration {
        Duration::from_millis(self.scene_ms)
    }
}

/// Builds an [`AgentdeskConfig`] from the embedded defaults, an optional user
/// file and the demo's command-line switches, in that order of precedence.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

const DELAY_KEYS: [&str; 5] = [
    "pacing.header_ms",
    "pacing.user_action_ms",
    "pacing.item_ms",
    "pacing.response_ms",
    "pacing.scene_ms",
];

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file over the defaults. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Never wait for Enter, whatever the files say.
    pub fn without_pauses(mut self) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override("pacing.interactive", false)?;
        Ok(self)
    }

    /// Zero every narration delay. Pauses are left alone.
    pub fn without_delays(mut self) -> Result<Self, ConfigError> {
        for key in DELAY_KEYS {
            self.builder = self.builder.set_override(key, 0_i64)?;
        }
        Ok(self)
    }

    pub fn build(self) -> Result<AgentdeskConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AgentdeskConfig, ConfigError> {
    Loader::new().build()
}
