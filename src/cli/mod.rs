//! CLI module for `apptypes`
//!
//! ## Commands
//!
//! - `list` - Print the canonical types in order
//! - `aliases` - Print the alias table
//! - `resolve <NAME>...` - Normalize names to their canonical spelling
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{CommandFactory, Parser, Subcommand};

use crate::render::RenderError;
use crate::version::APPTYPES_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// A user-supplied type name did not resolve.
    pub const UNKNOWN_TYPE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
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

impl From<RenderError> for CliError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::UnknownType(e) => CliError::new(
                format!("error: {e}\n  hint: {}", e.hint()),
                ExitCode::UNKNOWN_TYPE,
            ),
            other => CliError::failure(format!("error: {other}")),
        }
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Look up application types and normalize their aliases
#[derive(Parser, Debug)]
#[command(name = "apptypes")]
#[command(version = APPTYPES_VERSION)]
#[command(about = "Look up application types and normalize their aliases", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the canonical types in order
    List {
        /// Show the aliases of each type
        #[arg(short, long)]
        aliases: bool,
        /// Print JSON instead of one name per line
        #[arg(long)]
        json: bool,
    },

    /// Print every alias and the type it resolves to
    Aliases {
        /// Print JSON instead of one alias per line
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical spelling of each name
    Resolve {
        /// Canonical type names or aliases
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
        /// Print JSON instead of one name per line
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
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

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::List { aliases, json }) => commands::list_types(aliases, json),
        Some(Command::Aliases { json }) => commands::list_aliases(json),
        Some(Command::Resolve { names, json }) => commands::resolve_names(&names, json),
        None => {
            // No command - show help
            let help = Cli::command().render_help().to_string();
            Err(CliError::failure(help.trim_end()))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
