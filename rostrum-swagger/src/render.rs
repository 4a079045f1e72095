//! Text encodings of a generated document

use crate::document::SwaggerDocument;
use crate::error::{Result, SwaggerError};

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Compact single-line JSON
    Json,
    /// Indented JSON
    #[default]
    JsonPretty,
    Yaml,
}

impl OutputFormat {
    /// Parse a format name (`json`, `json-pretty`/`pretty`, `yaml`/`yml`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "json" | "compact" => Some(OutputFormat::Json),
            "json-pretty" | "pretty" => Some(OutputFormat::JsonPretty),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }

    /// Pick a format from an output file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(OutputFormat::JsonPretty),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown output format '{}'", s))
    }
}

/// Render the document as compact JSON
pub fn to_json(doc: &SwaggerDocument) -> Result<String> {
    serde_json::to_string(doc)
        .map_err(|e| SwaggerError::Serialization(format!("Failed to serialize document: {}", e)))
}

/// Render the document as indented JSON
pub fn to_json_pretty(doc: &SwaggerDocument) -> Result<String> {
    serde_json::to_string_pretty(doc)
        .map_err(|e| SwaggerError::Serialization(format!("Failed to serialize document: {}", e)))
}

/// Render the document as YAML
pub fn to_yaml(doc: &SwaggerDocument) -> Result<String> {
    serde_yaml::to_string(doc)
        .map_err(|e| SwaggerError::Serialization(format!("Failed to serialize document: {}", e)))
}

/// Render the document in the requested format
pub fn render(doc: &SwaggerDocument, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(doc),
        OutputFormat::JsonPretty => to_json_pretty(doc),
        OutputFormat::Yaml => to_yaml(doc),
    }
}
