//! Generate the Markdown type reference from the `apptypes_core` registry.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p apptypes_core --bin generate_types_reference
//! ```
//!
//! ## Panics
//! - If the workspace root cannot be resolved.
//! - If the output file cannot be written.

use std::fs;
use std::path::PathBuf;

use apptypes_core::reference;

fn main() {
    let root = workspace_root();

    let out_dir = root.join("docs/reference");
    fs::create_dir_all(&out_dir).expect("create docs/reference/");

    let path = out_dir.join("types.md");
    fs::write(&path, reference::render_markdown()).expect("write types.md");
    println!("wrote {}", path.display());
}

fn workspace_root() -> PathBuf {
    // crates/apptypes_core -> workspace root
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(PathBuf::from)
        .expect("resolve workspace root")
}
