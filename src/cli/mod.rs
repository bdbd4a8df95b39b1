//! `metagen` command line
//!
//! - `generate <MODEL>` writes one metamodel source per entity
//! - `inspect <MODEL>` prints strategies and attributes, writing nothing
//!
//! Commands report failure as a [`CliError`]; [`run`] turns it into a message on stderr and a process exit.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// A command failure: rendered message plus the status to exit with.
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Failure with [`ExitCode::FAILURE`].
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Static metamodel generator for annotated persistent entities
#[derive(Parser, Debug)]
#[command(name = "metagen")]
#[command(version = VERSION)]
#[command(about = "Static metamodel generator for annotated persistent entities", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify entities and write metamodel sources
    Generate {
        /// Declaration model (JSON)
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "target/metamodel")]
        out: PathBuf,
        /// Fail when any warning is reported
        #[arg(long)]
        deny_warnings: bool,
        /// Omit the @Generated marker
        #[arg(long)]
        no_generated: bool,
    },

    /// Print each entity's access strategy and classified attributes
    Inspect {
        /// Declaration model (JSON)
        #[arg(value_name = "MODEL")]
        model: PathBuf,
    },
}

/// Parse arguments, run the command, and exit non-zero on failure.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Generate {
            model,
            out,
            deny_warnings,
            no_generated,
        } => commands::generate(&model, &out, deny_warnings, no_generated),
        Command::Inspect { model } => commands::inspect(&model),
    }
}
