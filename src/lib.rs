#![forbid(unsafe_code)]
//! Command-line front end for the application type registry.
//!
//! The vocabulary itself lives in [`apptypes_core`]; this crate adds output rendering, render configuration,
//! and the `apptypes` CLI that normalizes user-supplied type strings.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod render;
pub mod version;

pub use apptypes_core::types;
pub use apptypes_core::{TypeFamily, TypeId, UnknownType};

pub use config::{OutputFormat, RenderConfig};
pub use render::RenderError;
