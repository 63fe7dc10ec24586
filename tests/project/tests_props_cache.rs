//! Props cache over a temporary workspace.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use propsift::ExtractOptions;
use propsift::project::{ProjectError, PropsCache, collect_component_paths, load_settings};

use crate::helpers::component_fixtures::*;

fn write_workspace(root: &Path) {
    fs::create_dir_all(root.join("src/lib/components")).unwrap();
    fs::create_dir_all(root.join("node_modules/ui")).unwrap();
    fs::write(root.join("src/lib/components/Button.svelte"), BUTTON).unwrap();
    fs::write(root.join("src/lib/components/Dialog.svelte"), DIALOG).unwrap();
    fs::write(root.join("src/lib/List.svelte"), UNTYPED).unwrap();
    fs::write(root.join("src/routes.ts"), "export {}").unwrap();
    fs::write(root.join("node_modules/ui/Vendor.svelte"), BUTTON).unwrap();
}

#[test]
fn test_workspace_discovery() {
    let dir = tempfile::tempdir().unwrap();
    write_workspace(dir.path());

    let paths = collect_component_paths(dir.path());
    let names: Vec<_> = paths
        .iter()
        .filter_map(|p| p.file_name()?.to_str())
        .collect();
    // Sorted by path: `List.svelte` sorts before the `components` directory
    assert_eq!(names, vec!["List.svelte", "Button.svelte", "Dialog.svelte"]);
}

#[test]
fn test_warm_then_serve_from_cache() {
    let dir = tempfile::tempdir().unwrap();
    write_workspace(dir.path());

    let cache = PropsCache::new(ExtractOptions::default());
    assert!(cache.warm_dir(dir.path()).is_empty());
    assert_eq!(cache.len(), 3);

    let button_path = dir.path().join("src/lib/components/Button.svelte");
    let cached = cache.cached(&button_path).unwrap();
    let fetched = cache.get_or_extract(&button_path).unwrap();
    assert!(Arc::ptr_eq(&cached, &fetched));
    assert_eq!(fetched.inherits, vec!["HTMLButtonAttributes"]);
}

#[test]
fn test_cache_uses_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    write_workspace(dir.path());
    let settings = dir.path().join("propsift.json");
    fs::write(
        &settings,
        r#"{ "normalizeComment": true, "fallbackTypes": { "items": "string[]" } }"#,
    )
    .unwrap();

    let cache = PropsCache::new(load_settings(&settings).unwrap());
    let list = cache
        .get_or_extract(&dir.path().join("src/lib/List.svelte"))
        .unwrap();
    assert_eq!(list.get("items").unwrap().type_text, "string[]");

    let button = cache
        .get_or_extract(&dir.path().join("src/lib/components/Button.svelte"))
        .unwrap();
    assert_eq!(
        button.get("loading").unwrap().comment.as_deref(),
        Some("Show a spinner and disable the button.")
    );
}

#[test]
fn test_errors_carry_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let cache = PropsCache::default();

    let missing = dir.path().join("Missing.svelte");
    let err = cache.get_or_extract(&missing).unwrap_err();
    assert!(matches!(err, ProjectError::Io { ref path, .. } if path == &missing));

    let err = cache.get_or_extract(Path::new("notes.md")).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported file extension: notes.md");
}
