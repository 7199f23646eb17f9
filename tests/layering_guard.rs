//! Layering guardrails to keep the vocabulary crate dependency-light.
//!
//! `apptypes_core` may only depend on `thiserror`. This test scans its `Cargo.toml` and fails if anything else
//! appears in `[dependencies]`; CLI, logging and serialization crates belong to the root crate.

#[test]
fn core_depends_only_on_thiserror() {
    let manifest = include_str!("../crates/apptypes_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            // Any new section after `[dependencies]` ends the scan window.
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        let name = line_no_comment.split('=').next().unwrap_or("").trim();
        if name != "thiserror" {
            panic!("`apptypes_core` must not depend on `{name}`; add it to the root crate instead");
        }
    }
}
