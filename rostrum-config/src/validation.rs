// Description validation

use crate::{ApiDescription, ConfigError, Result};
use std::collections::HashSet;

/// Trait for validating loaded configuration
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Validation rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a value is not empty
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    /// Validate that no value appears twice
    pub fn unique<'a, I>(values: I, field: &str) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        for value in values {
            if !seen.insert(value) {
                return Err(ConfigError::ValidationError(format!(
                    "{} '{}' is not unique",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

impl Validate for ApiDescription {
    fn validate(&self) -> Result<()> {
        ConfigValidator::not_empty(&self.info.title, "info.title")?;
        ConfigValidator::not_empty(&self.info.api_version, "info.api_version")?;

        for (path, operations) in &self.resources() {
            ConfigValidator::not_empty(path, "resource path")?;
            for operation in operations {
                ConfigValidator::not_empty(&operation.method, &format!("method in {}", path))?;
                ConfigValidator::not_empty(&operation.nickname, &format!("nickname in {}", path))?;
            }
            ConfigValidator::unique(
                operations.iter().map(|op| op.nickname.as_str()),
                &format!("nickname in {}", path),
            )?;
        }

        Ok(())
    }
}
