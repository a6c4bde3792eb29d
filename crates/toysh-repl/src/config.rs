//! Configuration for the toysh front end.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/toysh/config.toml`, or a
//! path given on the command line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

use toysh_kernel::{KernelConfig, ModeCheck};

const APPLICATION: &str = "toysh";

/// Front end settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplConfig {
    /// Host name shown in the prompt.
    pub hostname: String,

    /// Show the boot sequence before the login prompt.
    pub boot: bool,

    /// Multiplier on the boot sequence pauses. `0` skips them.
    pub boot_pacing: f64,

    /// Fail on unresolvable working path segments.
    pub strict: bool,

    /// Let `chmod` accept any integer mode and keep its low three bits.
    pub lenient_chmod: bool,

    /// Keep line history across sessions.
    pub history: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            hostname: "desktop".to_string(),
            boot: true,
            boot_pacing: 1.0,
            strict: false,
            lenient_chmod: false,
            history: true,
        }
    }
}

impl ReplConfig {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file at the default location yields defaults. An explicit
    /// path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => {
                let path = Self::config_path()?;
                if !path.exists() {
                    tracing::debug!("No config file at {}, using defaults", path.display());
                    return Ok(Self::default());
                }
                Self::load_from(&path)?
            }
        };
        Ok(config.sanitized())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Get the default config file path.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", APPLICATION).context("Could not determine config directory")?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Where line history is saved, if anywhere.
    pub fn history_path(&self) -> Option<PathBuf> {
        if !self.history {
            return None;
        }
        ProjectDirs::from("", "", APPLICATION).map(|dirs| dirs.data_dir().join("history.txt"))
    }

    /// Kernel settings derived from this configuration.
    pub fn kernel_config(&self) -> KernelConfig {
        let base = if self.strict {
            KernelConfig::strict()
        } else {
            KernelConfig::default()
        };
        let mode_check = if self.lenient_chmod {
            ModeCheck::Lenient
        } else {
            ModeCheck::Strict
        };
        KernelConfig {
            mode_check,
            ..base.with_hostname(self.hostname.clone())
        }
    }

    fn sanitized(mut self) -> Self {
        if !self.boot_pacing.is_finite() || self.boot_pacing < 0.0 {
            tracing::warn!(boot_pacing = self.boot_pacing, "boot_pacing out of range, using 0");
            self.boot_pacing = 0.0;
        }
        if self.hostname.is_empty() {
            tracing::warn!("empty hostname, using default");
            self.hostname = Self::default().hostname;
        }
        self
    }
}
