//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::{self, Write};

use crate::config::RenderConfig;
use crate::render::{self, RenderError};

use super::{CliError, CliResult, ExitCode};

/// Print the canonical type list.
#[tracing::instrument(skip_all, fields(aliases = aliases, json = json))]
pub fn list_types(aliases: bool, json: bool) -> CliResult<ExitCode> {
    let config = RenderConfig::new().with_aliases(aliases).with_json(json);
    emit(render::render_types(&config))
}

/// Print the alias table.
#[tracing::instrument(skip_all, fields(json = json))]
pub fn list_aliases(json: bool) -> CliResult<ExitCode> {
    let config = RenderConfig::new().with_json(json);
    emit(render::render_aliases(&config))
}

/// Resolve each name and print its canonical spelling.
///
/// Nothing is printed unless every name resolves.
#[tracing::instrument(skip_all, fields(name_count = names.len(), json = json))]
pub fn resolve_names(names: &[String], json: bool) -> CliResult<ExitCode> {
    let config = RenderConfig::new().with_json(json);
    let rendered = render::render_resolved(names, &config).inspect_err(|e| {
        if let RenderError::UnknownType(unknown) = e {
            tracing::debug!(name = unknown.name(), "unknown type");
        }
    });
    emit(rendered)
}

/// Write rendered output to stdout in one go.
fn emit(rendered: Result<String, RenderError>) -> CliResult<ExitCode> {
    let out = rendered?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(out.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| CliError::failure(format!("error: cannot write output: {e}")))?;
    Ok(ExitCode::SUCCESS)
}
