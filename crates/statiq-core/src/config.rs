//! Export configuration.
//!
//! Loaded from a TOML file such as:
//!
//! ```toml
//! export_dir = "/home/coach/Documents/hudl"
//! share = false
//! quoting = "rfc4180"
//! ```
//!
//! Every key is optional; a missing file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::export::Quoting;

/// Directory name under the platform config dir
pub const APP_DIR: &str = "statiq";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Where exported sheets are written
    pub export_dir: PathBuf,
    /// Hand the written file to the system share handler
    pub share: bool,
    pub quoting: Quoting,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            share: true,
            quoting: Quoting::default(),
        }
    }
}

/// The user's documents directory, or the working directory when the
/// platform has none.
pub fn default_export_dir() -> PathBuf {
    dirs::document_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// `<config_dir>/statiq/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    export_dir: Option<PathBuf>,
    share: Option<bool>,
    quoting: Option<Quoting>,
}

impl ExportConfig {
    /// Create a new configuration builder
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path).map_err(Error::from) {
            Ok(content) => content,
            Err(e) if e.is_not_found() => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e),
        };
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;

        if file
            .export_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(Error::InvalidConfig("export_dir must not be empty".to_string()));
        }

        let builder = Self::builder();
        let builder = match file.export_dir {
            Some(dir) => builder.export_dir(dir),
            None => builder,
        };
        let builder = match file.share {
            Some(share) => builder.share(share),
            None => builder,
        };
        let builder = match file.quoting {
            Some(quoting) => builder.quoting(quoting),
            None => builder,
        };
        Ok(builder.build())
    }
}

/// Builder for ExportConfig
#[derive(Debug, Clone, Default)]
pub struct ExportConfigBuilder {
    export_dir: Option<PathBuf>,
    share: Option<bool>,
    quoting: Option<Quoting>,
}

impl ExportConfigBuilder {
    /// Set the export directory
    pub fn export_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.export_dir = Some(path.into());
        self
    }

    /// Enable or disable the share step
    pub fn share(mut self, enabled: bool) -> Self {
        self.share = Some(enabled);
        self
    }

    pub fn quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = Some(quoting);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ExportConfig {
        ExportConfig {
            export_dir: self.export_dir.unwrap_or_else(default_export_dir),
            share: self.share.unwrap_or(true),
            quoting: self.quoting.unwrap_or_default(),
        }
    }
}
