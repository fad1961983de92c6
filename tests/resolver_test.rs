//! Tests for locating the installed react-native cli module

mod common;

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use common::{install_cli_module, FakeRunner};
use rnboot::infrastructure::traits::{ModuleResolver, NodeModuleResolver, Resolution};

fn resolver() -> NodeModuleResolver {
    NodeModuleResolver::new(
        "node",
        "node_modules/react-native/cli",
        Arc::new(FakeRunner::new()),
    )
}

#[test]
fn given_empty_directory_when_resolving_then_absent() {
    let temp = TempDir::new().unwrap();

    let resolution = resolver().resolve(temp.path());

    assert!(matches!(resolution, Resolution::Absent));
}

#[test]
fn given_cli_js_when_resolving_then_present_with_entry() {
    let temp = TempDir::new().unwrap();
    let entry = install_cli_module(temp.path());

    match resolver().resolve(temp.path()) {
        Resolution::Present(module) => assert_eq!(module.entry(), entry.as_path()),
        Resolution::Absent => panic!("expected cli module"),
    }
}

#[test]
fn given_both_file_and_directory_module_when_resolving_then_prefers_file() {
    let temp = TempDir::new().unwrap();
    let entry = install_cli_module(temp.path());
    let dir = temp.path().join("node_modules/react-native/cli");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.js"), "").unwrap();

    match resolver().resolve(temp.path()) {
        Resolution::Present(module) => assert_eq!(module.entry(), entry.as_path()),
        Resolution::Absent => panic!("expected cli module"),
    }
}

#[test]
fn given_package_without_cli_when_resolving_then_absent() {
    let temp = TempDir::new().unwrap();
    let pkg = temp.path().join("node_modules/react-native");
    fs::create_dir_all(pkg.join("cli.js")).unwrap();
    fs::write(pkg.join("package.json"), "{}").unwrap();

    let resolution = resolver().resolve(temp.path());

    assert!(!resolution.is_present(), "a directory named cli.js is not a module file");
}

#[test]
fn given_candidates_when_listed_then_follow_node_resolution_order() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("node_modules/react-native");

    let candidates = resolver().candidates(temp.path());

    assert_eq!(
        candidates,
        vec![base.join("cli.js"), base.join("cli").join("index.js")]
    );
}
