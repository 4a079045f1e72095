//! CLI command implementations.

pub mod check;
pub mod generate;
pub mod paths;

use crate::error::CliResult;
use rostrum_config::{ApiDescription, DescriptionBuilder};
use std::path::{Path, PathBuf};

/// Load a description the way every command does: env overrides applied,
/// optional .env file read first.
pub fn load(path: &Path, env_file: Option<&Path>) -> CliResult<ApiDescription> {
    let mut builder = DescriptionBuilder::new(path).load_env();
    if let Some(env_file) = env_file {
        builder = builder.load_dotenv(Some(PathBuf::from(env_file)));
    }
    Ok(builder.build()?)
}
