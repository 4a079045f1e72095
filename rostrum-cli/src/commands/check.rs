//! Check command
//!
//! Loads a description, builds the document and reports what would be
//! generated without writing it.

use crate::error::CliResult;
use colored::Colorize;
use rostrum_config::ApiDescription;
use rostrum_swagger::{swagger_v1_2, SwaggerDocument};
use std::io::Write;
use std::path::Path;

pub fn execute(description: &Path, env_file: Option<&Path>) -> CliResult<()> {
    let description = super::load(description, env_file)?;
    let document = check(&description)?;

    let mut stdout = std::io::stdout().lock();
    print_summary(&document, description.operation_count(), &mut stdout)
}

/// Build the document for an already loaded description
pub fn check(description: &ApiDescription) -> CliResult<SwaggerDocument> {
    let (info, resources) = description.clone().into_parts();
    Ok(swagger_v1_2(&info, &resources)?)
}

pub fn print_summary<W: Write>(
    document: &SwaggerDocument,
    operations: usize,
    out: &mut W,
) -> CliResult<()> {
    writeln!(
        out,
        "{} {} {}",
        "OK".green().bold(),
        document.info.title,
        document.api_version
    )?;
    match &document.base_path {
        Some(base_path) => writeln!(out, "  basePath: {}", base_path)?,
        None => writeln!(out, "  basePath: {}", "omitted".yellow())?,
    }
    writeln!(
        out,
        "  {} paths, {} operations",
        document.apis.len(),
        operations
    )?;
    Ok(())
}
