//! Generate command
//!
//! Renders a description file as a Swagger 1.2 document.

use crate::error::{CliError, CliResult};
use rostrum_config::ApiDescription;
use rostrum_log::{debug, info};
use rostrum_swagger::{render, swagger_v1_2, OutputFormat};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions<'a> {
    pub description: &'a Path,
    pub env_file: Option<&'a Path>,
    /// Explicit output format; otherwise taken from the output extension
    pub format: Option<OutputFormat>,
    /// Output file; stdout when absent
    pub output: Option<&'a Path>,
}

/// Pick the output format: explicit flag, then output extension, then pretty JSON
pub fn resolve_format(format: Option<OutputFormat>, output: Option<&Path>) -> OutputFormat {
    format
        .or_else(|| {
            output
                .and_then(|p| p.extension())
                .and_then(|ext| ext.to_str())
                .and_then(OutputFormat::from_extension)
        })
        .unwrap_or_default()
}

/// Build and render the document for a description
pub fn render_description(description: ApiDescription, format: OutputFormat) -> CliResult<String> {
    let (info, resources) = description.into_parts();
    let document = swagger_v1_2(&info, &resources)?;
    Ok(render(&document, format)?)
}

pub fn execute(options: &GenerateOptions<'_>) -> CliResult<()> {
    let description = super::load(options.description, options.env_file)?;
    let format = resolve_format(options.format, options.output);
    debug!(
        target: "rostrum::cli",
        "Rendering {} operations as {:?}",
        description.operation_count(),
        format
    );

    let mut text = render_description(description, format)?;
    if !text.ends_with('\n') {
        text.push('\n');
    }

    match options.output {
        Some(path) => {
            fs::write(path, &text)?;
            info!(target: "rostrum::cli", "Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes()).map_err(CliError::Io)?;
        }
    }

    Ok(())
}
