//! Rostrum CLI - Swagger 1.2 documents from API description files.
//!
//! # Commands
//!
//! - `rostrum generate <description>` - Render the Swagger 1.2 document
//! - `rostrum paths <description>` - List paths and their operations
//! - `rostrum check <description>` - Validate a description without writing output

use clap::{Parser, Subcommand};
use colored::Colorize;
use rostrum_swagger::OutputFormat;
use std::path::PathBuf;

mod commands;
mod error;

use commands::{check, generate, paths};
use error::{CliError, CliResult};

/// Rostrum CLI - Swagger 1.2 document generator
#[derive(Parser)]
#[command(name = "rostrum")]
#[command(version)]
#[command(about = "Generate Swagger 1.2 documents from API description files")]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the Swagger 1.2 document for a description file
    #[command(visible_alias = "g")]
    Generate {
        /// Description file (.toml, .json, .yaml)
        description: PathBuf,

        /// Output format: json, json-pretty, yaml
        #[arg(short, long)]
        format: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// .env file read before applying ROSTRUM_* overrides
        #[arg(long)]
        env_file: Option<PathBuf>,
    },

    /// List the paths of a description and their operations
    Paths {
        /// Description file (.toml, .json, .yaml)
        description: PathBuf,

        /// .env file read before applying ROSTRUM_* overrides
        #[arg(long)]
        env_file: Option<PathBuf>,
    },

    /// Validate a description and build its document without writing it
    Check {
        /// Description file (.toml, .json, .yaml)
        description: PathBuf,

        /// .env file read before applying ROSTRUM_* overrides
        #[arg(long)]
        env_file: Option<PathBuf>,
    },
}

fn parse_format(name: Option<&str>) -> CliResult<Option<OutputFormat>> {
    name.map(|name| {
        OutputFormat::from_name(name).ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "unknown format '{}' (expected json, json-pretty or yaml)",
                name
            ))
        })
    })
    .transpose()
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Generate {
            description,
            format,
            output,
            env_file,
        } => {
            let options = generate::GenerateOptions {
                description: &description,
                env_file: env_file.as_deref(),
                format: parse_format(format.as_deref())?,
                output: output.as_deref(),
            };
            generate::execute(&options)
        }
        Commands::Paths {
            description,
            env_file,
        } => paths::execute(&description, env_file.as_deref()),
        Commands::Check {
            description,
            env_file,
        } => check::execute(&description, env_file.as_deref()),
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    rostrum_log::set_verbosity(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
