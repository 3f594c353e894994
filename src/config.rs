//! Tool configuration.
//!
//! Stored as TOML. Every key is optional:
//!
//! ```toml
//! image_output_dir = "Output/Image"
//! audio_output_dir = "Output/Audio"
//! equal_samples = "substitute"   # or "skip"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::output::OutputDir;
use crate::stego::EqualSamplePolicy;

/// Default directory for image outputs.
pub const DEFAULT_IMAGE_OUTPUT_DIR: &str = "Output/Image";

/// Default directory for audio outputs.
pub const DEFAULT_AUDIO_OUTPUT_DIR: &str = "Output/Audio";

/// Errors that can occur when loading or saving the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// Configuration shared by all operations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StegoConfig {
    /// Where stego and extracted images are written.
    pub image_output_dir: PathBuf,

    /// Where stego audio is written.
    pub audio_output_dir: PathBuf,

    /// Treatment of cover samples that already equal the secret.
    pub equal_samples: EqualSamplePolicy,
}

impl Default for StegoConfig {
    fn default() -> Self {
        Self {
            image_output_dir: PathBuf::from(DEFAULT_IMAGE_OUTPUT_DIR),
            audio_output_dir: PathBuf::from(DEFAULT_AUDIO_OUTPUT_DIR),
            equal_samples: EqualSamplePolicy::default(),
        }
    }
}

impl StegoConfig {
    /// Loads the configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration as TOML, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Destination for image outputs.
    pub fn image_output(&self) -> OutputDir {
        OutputDir::new(&self.image_output_dir)
    }

    /// Destination for audio outputs.
    pub fn audio_output(&self) -> OutputDir {
        OutputDir::new(&self.audio_output_dir)
    }
}
