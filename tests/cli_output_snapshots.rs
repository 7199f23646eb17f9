//! Golden snapshot tests for rendered CLI output
//!
//! Review changes: `cargo insta review`

use apptypes::render;
use apptypes::{OutputFormat, RenderConfig};

#[test]
fn test_list_plain() {
    let out = render::render_types(&RenderConfig::default()).expect("render failed");
    insta::assert_snapshot!(out, @r"
    all_types
    application
    webapp
    scope
    snappy
    snappy_application
    snappy_framework
    snappy_oem
    snappy_os
    snappy_kernel
    snappy_gadget
    ");
}

#[test]
fn test_list_with_aliases() {
    let config = RenderConfig::new().with_aliases(true);
    let out = render::render_types(&config).expect("render failed");
    insta::assert_snapshot!(out, @r"
    all_types  (aliases: all)
    application  (aliases: app)
    webapp
    scope
    snappy  (aliases: snap)
    snappy_application  (aliases: snap_application, snap_app)
    snappy_framework  (aliases: snap_framework)
    snappy_oem  (aliases: snap_oem)
    snappy_os  (aliases: snap_os)
    snappy_kernel  (aliases: snap_kernel)
    snappy_gadget  (aliases: snap_gadget)
    ");
}

#[test]
fn test_aliases_table() {
    let out = render::render_aliases(&RenderConfig::default()).expect("render failed");
    insta::assert_snapshot!(out, @r"
    all              -> all_types
    app              -> application
    snap             -> snappy
    snap_application -> snappy_application
    snap_app         -> snappy_application
    snap_framework   -> snappy_framework
    snap_oem         -> snappy_oem
    snap_os          -> snappy_os
    snap_kernel      -> snappy_kernel
    snap_gadget      -> snappy_gadget
    ");
}

#[test]
fn test_resolve_json() {
    let config = RenderConfig::new().with_format(OutputFormat::Json);
    let out = render::render_resolved(&["app", "snap_kernel"], &config).expect("render failed");
    insta::assert_snapshot!(out, @r#"
    [
      {
        "canonical": "application",
        "input": "app"
      },
      {
        "canonical": "snappy_kernel",
        "input": "snap_kernel"
      }
    ]
    "#);
}
