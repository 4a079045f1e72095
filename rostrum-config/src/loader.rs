// Description file loaders

use crate::{ApiDescription, ConfigError, Result};
use std::fs;
use std::path::Path;

/// Supported description file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Json,
    Toml,
    Yaml,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            "yaml" | "yml" => Some(FileFormat::Yaml),
            _ => None,
        }
    }

    /// Detect the format from a file path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                ConfigError::UnsupportedFormat(format!(
                    "no file extension on {}",
                    path.display()
                ))
            })?;

        Self::from_extension(ext).ok_or_else(|| ConfigError::UnsupportedFormat(ext.to_string()))
    }
}

/// Description file loader
pub struct DescriptionLoader {
    format: FileFormat,
}

impl DescriptionLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    /// Auto-detect format from file extension
    pub fn auto(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(FileFormat::from_path(path.as_ref())?))
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Load a description from file
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<ApiDescription> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        rostrum_log::debug!(
            target: "rostrum::config",
            "Loaded {} bytes from {}",
            content.len(),
            path.display()
        );

        self.parse(&content)
    }

    /// Parse a description from a string
    pub fn parse(&self, content: &str) -> Result<ApiDescription> {
        match self.format {
            FileFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e))),
            FileFormat::Toml => toml::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e))),
            FileFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("YAML parse error: {}", e))),
        }
    }
}
