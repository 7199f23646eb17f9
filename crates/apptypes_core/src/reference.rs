//! Render the type registry as a Markdown reference page.
//!
//! The output is consumed by the `generate_types_reference` binary, which writes it to
//! `docs/reference/types.md`. Do not edit that file by hand; update [`crate::types::TYPES`] instead.

use crate::types::{self, TYPES, TypeInfo};

/// Render the full reference document.
pub fn render_markdown() -> String {
    let mut out = String::new();
    out.push_str("# Application type reference\n\n");
    out.push_str("!!! warning \"Generated file\"\n");
    out.push_str("    Do not edit this page by hand.\n");
    out.push_str("    If it looks wrong/outdated, regenerate it from source and commit the result.\n");
    out.push('\n');
    out.push_str("    Regenerate with: `cargo run -p apptypes_core --bin generate_types_reference`\n\n");

    out.push_str("## Contents\n\n");
    out.push_str("- [Types](#types)\n");
    out.push_str("- [Aliases](#aliases)\n\n");

    render_types_section(&mut out);
    render_aliases_section(&mut out);

    trim_trailing_newlines_to_at_most_two(&mut out);
    if out.ends_with("\n\n") {
        out.pop();
    }
    out
}

fn render_types_section(out: &mut String) {
    start_section(out, "## Types");

    out.push_str("| Id | Canonical | Aliases | Family | Stability | Description |\n");
    out.push_str("|----|---|---|---|---|---|\n");

    for t in TYPES {
        out.push_str(&type_row(t));
    }
}

fn type_row(t: &TypeInfo) -> String {
    let aliases = t
        .aliases
        .iter()
        .map(|a| format!("`{a}`"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "| {:?} | `{}` | {} | {} | {} | {} |\n",
        t.id,
        t.canonical,
        aliases,
        t.family.as_str(),
        t.stability.as_str(),
        t.description
    )
}

fn render_aliases_section(out: &mut String) {
    start_section(out, "## Aliases");

    out.push_str("| Alias | Canonical |\n");
    out.push_str("|---|---|\n");

    for (alias, id) in types::aliases() {
        out.push_str(&format!("| `{}` | `{}` |\n", alias, types::as_str(id)));
    }
}

fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    let mut count = out.chars().rev().take_while(|&ch| ch == '\n').count();
    while count > 2 {
        out.pop();
        count -= 1;
    }
}

fn ensure_single_blank_line(out: &mut String) {
    trim_trailing_newlines_to_at_most_two(out);
    if out.is_empty() || out.ends_with("\n\n") {
        return;
    }
    if out.ends_with('\n') {
        out.push('\n');
    } else {
        out.push_str("\n\n");
    }
}

fn start_section(out: &mut String, heading: &str) {
    ensure_single_blank_line(out);
    out.push_str(heading);
    out.push_str("\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_a_row() {
        let doc = render_markdown();
        for name in types::list_types() {
            assert!(doc.contains(&format!("| `{name}` |")), "missing row for {name}");
        }
    }

    #[test]
    fn test_alias_rows() {
        let doc = render_markdown();
        assert!(doc.contains("| `snap_app` | `snappy_application` |"));
        assert!(doc.contains("| SnappyApplication | `snappy_application` | `snap_application`, `snap_app` |"));
    }

    #[test]
    fn test_current_entries_render_as_stable() {
        let doc = render_markdown();
        assert_eq!(doc.matches(" | stable | ").count(), TYPES.len());
        assert!(!doc.contains("deprecated"));
    }

    #[test]
    fn test_deprecated_entry_row() {
        use crate::registry::{RegistryItemInfo, Stability};
        use crate::types::{TypeFamily, TypeId};

        let retired = RegistryItemInfo {
            id: TypeId::Scope,
            canonical: "scope",
            aliases: &["sc"],
            description: "Retired.",
            family: TypeFamily::Classic,
            stability: Stability::Deprecated,
        };
        assert_eq!(type_row(&retired), "| Scope | `scope` | `sc` | classic | deprecated | Retired. |\n");
    }

    #[test]
    fn test_ends_with_single_newline() {
        let doc = render_markdown();
        assert!(doc.ends_with("|\n"));
    }

    #[test]
    fn test_sections_separated_by_blank_line() {
        let doc = render_markdown();
        assert!(doc.contains(" |\n\n## Aliases\n\n| Alias |"));
    }
}
