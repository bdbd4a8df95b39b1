//! Layering guardrails for the vocabulary crate.
//!
//! `metagen_core` must stay dependency-free so any front end or tool can share its tables. This test scans its
//! `Cargo.toml` and fails if a `[dependencies]` table appears or lists anything.

#[test]
fn core_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/metagen_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        panic!("`metagen_core` must not have dependencies, found: {}", line);
    }
}

#[test]
fn generator_depends_on_core_by_path() {
    let manifest = include_str!("../Cargo.toml");
    assert!(
        manifest
            .lines()
            .any(|line| line.trim_start().starts_with("metagen_core = { path = \"crates/metagen_core\" }")),
        "the generator must use the in-tree vocabulary crate"
    );
}
