/*!
 * Application configuration.
 *
 * Handles loading and validating the configuration settings.
 */

use anyhow::{Context, Result, anyhow};
use log::debug;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::substitution::{DEFAULT_FOLLOWING, DEFAULT_PRECEDING, SlotPattern};

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Delimiters of an empty target slot
    #[serde(default)]
    pub slot: SlotConfig,

    /// Name of the output file, placed in the program directory
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,

    /// Duplicate the template before patching
    #[serde(default)]
    pub backup_template: bool,

    /// Turn `\r\n` and `\r` into `\n` before inserting lines
    #[serde(default = "default_true")]
    pub normalize_line_endings: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Slot delimiter configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SlotConfig {
    // @field: Text right before the slot content
    #[serde(default = "default_preceding")]
    pub preceding: String,

    // @field: Text right after the slot content
    #[serde(default = "default_following")]
    pub following: String,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            preceding: default_preceding(),
            following: default_following(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_true() -> bool {
    true
}

fn default_output_file_name() -> String {
    "output.xliff".to_string()
}

fn default_preceding() -> String {
    DEFAULT_PRECEDING.to_string()
}

fn default_following() -> String {
    DEFAULT_FOLLOWING.to_string()
}

impl Config {
    /// Load the configuration file, or the defaults if there is none
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let file = File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.slot.preceding.is_empty() || self.slot.following.is_empty() {
            return Err(anyhow!("Slot delimiters must not be empty"));
        }

        let name = self.output_file_name.trim();
        if name.is_empty() {
            return Err(anyhow!("Output file name must not be empty"));
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(anyhow!(
                "Output file name must be a bare file name: {}",
                self.output_file_name
            ));
        }

        Ok(())
    }

    /// Slot pattern described by this configuration
    pub fn slot_pattern(&self) -> Result<SlotPattern> {
        Ok(SlotPattern::new(&self.slot.preceding, &self.slot.following)?)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            slot: SlotConfig::default(),
            output_file_name: default_output_file_name(),
            backup_template: false,
            normalize_line_endings: true,
            log_level: LogLevel::default(),
        }
    }
}
