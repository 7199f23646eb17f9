//! Render registry queries as CLI output.
//!
//! Every function returns the complete stdout text (with a trailing newline) so commands can print it in one
//! write and tests can compare it directly.

use serde_json::{Value, json};
use thiserror::Error;

use apptypes_core::UnknownType;
use apptypes_core::types::{self, TYPES};

use crate::config::RenderConfig;

/// Errors produced while rendering command output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    UnknownType(#[from] UnknownType),

    #[error("failed to serialize JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the canonical type list.
pub fn render_types(config: &RenderConfig) -> Result<String, RenderError> {
    if config.is_json() {
        let items: Vec<Value> = TYPES
            .iter()
            .map(|t| {
                json!({
                    "name": t.canonical,
                    "family": t.family.as_str(),
                    "aliases": t.aliases,
                })
            })
            .collect();
        return to_json(&Value::Array(items));
    }

    let mut out = String::new();
    for t in TYPES {
        out.push_str(t.canonical);
        if config.show_aliases && !t.aliases.is_empty() {
            out.push_str(&format!("  (aliases: {})", t.aliases.join(", ")));
        }
        out.push('\n');
    }
    Ok(out)
}

/// Render the alias table.
pub fn render_aliases(config: &RenderConfig) -> Result<String, RenderError> {
    if config.is_json() {
        let items: Vec<Value> = types::aliases()
            .map(|(alias, id)| json!({ "alias": alias, "canonical": types::as_str(id) }))
            .collect();
        return to_json(&Value::Array(items));
    }

    let width = types::aliases().map(|(alias, _)| alias.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (alias, id) in types::aliases() {
        out.push_str(&format!("{alias:<width$} -> {}\n", types::as_str(id)));
    }
    Ok(out)
}

/// Resolve every name, then render the canonical spellings in argument order.
///
/// ## Errors
/// - [`RenderError::UnknownType`] for the first name that does not resolve; nothing is rendered in that case.
pub fn render_resolved<S: AsRef<str>>(names: &[S], config: &RenderConfig) -> Result<String, RenderError> {
    let mut resolved: Vec<(&str, &'static str)> = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        let canonical = types::resolve_alias(name)?;
        tracing::debug!(input = name, canonical, "resolved type");
        resolved.push((name, canonical));
    }

    if config.is_json() {
        let items: Vec<Value> = resolved
            .iter()
            .map(|(input, canonical)| json!({ "input": input, "canonical": canonical }))
            .collect();
        return to_json(&Value::Array(items));
    }

    let mut out = String::new();
    for (_, canonical) in &resolved {
        out.push_str(canonical);
        out.push('\n');
    }
    Ok(out)
}

fn to_json(value: &Value) -> Result<String, RenderError> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
