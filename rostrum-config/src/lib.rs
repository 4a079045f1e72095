// API description loading for Rostrum
//
// A description file holds the service info and the resources of an API in
// TOML, JSON or YAML. Host, base path and API version can be overridden from
// the environment (`ROSTRUM_HOST`, `ROSTRUM_BASE_PATH`, `ROSTRUM_API_VERSION`).

pub mod description;
pub mod env;
pub mod error;
pub mod loader;
pub mod validation;

pub use description::{ApiDescription, Overrides, ResourceSection};
pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{DescriptionLoader, FileFormat};
pub use validation::{ConfigValidator, Validate};

use std::path::{Path, PathBuf};

/// Load a description file, apply `ROSTRUM_*` overrides and validate it
pub fn load_description(path: impl AsRef<Path>) -> Result<ApiDescription> {
    DescriptionBuilder::new(path).load_env().build()
}

/// Builder for loading a description
pub struct DescriptionBuilder {
    path: PathBuf,
    format: Option<FileFormat>,
    env: Option<EnvLoader>,
    load_dotenv: bool,
    dotenv_path: Option<PathBuf>,
    overrides: Overrides,
    validate: bool,
}

impl DescriptionBuilder {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format: None,
            env: None,
            load_dotenv: false,
            dotenv_path: None,
            overrides: Overrides::default(),
            validate: true,
        }
    }

    /// Force a format instead of detecting it from the extension
    pub fn format(mut self, format: FileFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Apply overrides from `ROSTRUM_*` environment variables
    pub fn load_env(self) -> Self {
        self.with_env(EnvLoader::default())
    }

    /// Apply overrides using a custom environment loader
    pub fn with_env(mut self, env: EnvLoader) -> Self {
        self.env = Some(env);
        self
    }

    /// Load a .env file before reading the environment
    pub fn load_dotenv(mut self, path: Option<PathBuf>) -> Self {
        self.load_dotenv = true;
        self.dotenv_path = path;
        self
    }

    /// Explicit overrides, applied after the environment
    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn skip_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    /// Load, override and validate the description
    pub fn build(self) -> Result<ApiDescription> {
        if self.load_dotenv {
            match &self.dotenv_path {
                Some(path) => {
                    dotenvy::from_path(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
                }
                None => {
                    dotenvy::dotenv().ok(); // Ignore if .env doesn't exist
                }
            }
        }

        let loader = match self.format {
            Some(format) => DescriptionLoader::new(format),
            None => DescriptionLoader::auto(&self.path)?,
        };
        let mut description = loader.load_file(&self.path)?;

        if let Some(env) = &self.env {
            let overrides = env.overrides();
            if !overrides.is_empty() {
                rostrum_log::info!(
                    target: "rostrum::config",
                    "Applying environment overrides {:?}",
                    overrides
                );
            }
            description.apply_overrides(&overrides);
        }
        description.apply_overrides(&self.overrides);

        if self.validate {
            description.validate()?;
        }

        Ok(description)
    }
}
