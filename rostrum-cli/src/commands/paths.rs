//! Path listing command
//!
//! Lists every path of a description with its operations.

use crate::error::CliResult;
use colored::Colorize;
use rostrum_config::ApiDescription;
use std::io::Write;
use std::path::Path;

pub fn execute(description: &Path, env_file: Option<&Path>) -> CliResult<()> {
    let description = super::load(description, env_file)?;
    let mut stdout = std::io::stdout().lock();
    print_paths(&description, &mut stdout)
}

/// Write one line per path followed by its `METHOD nickname` lines
pub fn print_paths<W: Write>(description: &ApiDescription, out: &mut W) -> CliResult<()> {
    let resources = description.resources();

    for (path, operations) in &resources {
        writeln!(out, "{}", path.bold())?;
        for operation in operations {
            writeln!(
                out,
                "  {:7} {}",
                operation.method.to_uppercase().cyan(),
                operation.nickname
            )?;
        }
    }

    writeln!(
        out,
        "\n{} paths, {} operations",
        resources.len(),
        description.operation_count()
    )?;
    Ok(())
}
