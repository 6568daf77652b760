//! Configuration file support.
//!
//! Settings are loaded from `namelist.toml` in the working directory, or
//! from the file given with `--config`:
//!
//! ```toml
//! [output]
//! dir = "namelist_output"
//!
//! [template]
//! path = "template.txt"
//!
//! [source]
//! timeout_secs = 30
//!
//! [layout]
//! skip_sheets = ["Tutorial"]
//! ```
//!
//! Command-line flags take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use namelist_core::{SheetLayout, DEFAULT_OUTPUT_DIR};
use namelist_data::DEFAULT_TIMEOUT;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "namelist.toml";

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub output: OutputSettings,
    pub template: TemplateSettings,
    pub source: SourceSettings,
    pub layout: LayoutSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load an explicit config file, else `namelist.toml` if present, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Output directory configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    pub dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Template configuration; no path means the built-in template
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TemplateSettings {
    pub path: Option<PathBuf>,
}

/// Remote source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceSettings {
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// Sheet handling configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutSettings {
    /// Sheets that never hold a list
    pub skip_sheets: Vec<String>,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            skip_sheets: SheetLayout::default().skip_sheets,
        }
    }
}
