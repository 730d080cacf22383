//! Parameterised repository detection tests for `cikit-detector`.
//!
//! Each `#[case]` gets an isolated `TempDir`.

use std::fs;
use std::path::PathBuf;

use cikit_core::config::{DockerfileConfig, FrontendConfig, RepositoriesConfig};
use cikit_detector::{
    detect_dockerfile, detect_frontend_package, target_repos, DetectError, FrontendPackage,
};
use rstest::rstest;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helper
// ---------------------------------------------------------------------------

fn make_dir() -> TempDir {
    TempDir::new().expect("tempdir")
}

fn write(dir: &TempDir, rel: &str, content: &str) {
    let path = dir.path().join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(path, content).expect("write fixture");
}

// ---------------------------------------------------------------------------
// Dockerfile
// ---------------------------------------------------------------------------

#[rstest]
#[case(&["Dockerfile"], "Dockerfile")]
#[case(&["docker/Dockerfile"], "docker/Dockerfile")]
#[case(&["build/Dockerfile"], "build/Dockerfile")]
#[case(&["build/Dockerfile", "docker/Dockerfile"], "docker/Dockerfile")]
#[case(&["build/Dockerfile", "Dockerfile"], "Dockerfile")]
fn dockerfile_candidate_order(#[case] present: &[&str], #[case] expected: &str) {
    let dir = make_dir();
    for file in present {
        write(&dir, file, "FROM scratch\n");
    }
    let found = detect_dockerfile(dir.path(), &DockerfileConfig::default(), None);
    assert_eq!(found.path, expected);
    assert!(found.should_build);
}

#[test]
fn dockerfile_override_wins_when_present() {
    let dir = make_dir();
    write(&dir, "Dockerfile", "FROM scratch\n");
    write(&dir, "deploy/Dockerfile.prod", "FROM scratch\n");

    let found = detect_dockerfile(
        dir.path(),
        &DockerfileConfig::default(),
        Some(" deploy/Dockerfile.prod "),
    );
    assert_eq!(found.path, "deploy/Dockerfile.prod");
    assert!(found.should_build);
}

#[test]
fn dockerfile_custom_candidates() {
    let dir = make_dir();
    write(&dir, "ops/Containerfile", "FROM scratch\n");
    let config = DockerfileConfig {
        candidates: vec![PathBuf::from("ops/Containerfile")],
        fallback: PathBuf::from("Containerfile"),
    };
    assert_eq!(detect_dockerfile(dir.path(), &config, None).path, "ops/Containerfile");

    let empty = make_dir();
    let found = detect_dockerfile(empty.path(), &config, None);
    assert_eq!(found.path, "Containerfile");
    assert!(!found.should_build);
}

// ---------------------------------------------------------------------------
// Frontend package
// ---------------------------------------------------------------------------

#[rstest]
#[case::pnpm("pnpm-lock.yaml", "pnpm")]
#[case::yarn("yarn.lock", "yarn")]
#[case::npm("package-lock.json", "npm")]
fn frontend_lock_file_picks_manager(#[case] lock: &str, #[case] manager: &str) {
    let dir = make_dir();
    write(&dir, "package.json", r#"{"name": "app", "version": "1.0.0"}"#);
    write(&dir, lock, "");
    let pkg = detect_frontend_package(dir.path(), &FrontendConfig::default()).expect("detect");
    assert_eq!(pkg.manager, manager);
}

#[test]
fn frontend_pnpm_beats_npm_lock() {
    let dir = make_dir();
    write(&dir, "package.json", r#"{"name": "app"}"#);
    write(&dir, "package-lock.json", "");
    write(&dir, "pnpm-lock.yaml", "");
    let pkg = detect_frontend_package(dir.path(), &FrontendConfig::default()).expect("detect");
    assert_eq!(pkg.manager, "pnpm");
}

#[test]
fn frontend_root_package() {
    let dir = make_dir();
    write(&dir, "package.json", r#"{"name": "site", "version": "2.3.4"}"#);
    write(&dir, "web/package.json", r#"{"name": "web", "version": "0.1.0"}"#);
    let pkg = detect_frontend_package(dir.path(), &FrontendConfig::default()).expect("detect");
    assert_eq!(
        pkg,
        FrontendPackage {
            has_package: true,
            dir: ".".to_string(),
            name: "site".to_string(),
            version: "2.3.4".to_string(),
            manager: "npm".to_string(),
        }
    );
}

#[test]
fn frontend_nested_packages_sorted_and_unnamed_skipped() {
    let dir = make_dir();
    write(&dir, "package.json", r#"{"private": true}"#);
    write(&dir, "a-broken/package.json", "{ not json");
    write(&dir, "b-unnamed/package.json", r#"{"name": ""}"#);
    write(&dir, "d-later/package.json", r#"{"name": "later"}"#);
    write(&dir, "c-web/package.json", r#"{"name": "web"}"#);
    write(&dir, "c-web/yarn.lock", "");

    let pkg = detect_frontend_package(dir.path(), &FrontendConfig::default()).expect("detect");
    assert!(pkg.has_package);
    assert_eq!(pkg.dir, "c-web");
    assert_eq!(pkg.name, "web");
    assert_eq!(pkg.version, "");
    assert_eq!(pkg.manager, "yarn");
}

#[test]
fn frontend_absent() {
    let dir = make_dir();
    write(&dir, "src/main.rs", "fn main() {}\n");
    let pkg = detect_frontend_package(dir.path(), &FrontendConfig::default()).expect("detect");
    assert!(!pkg.has_package);
    assert_eq!(pkg.dir, ".");
    assert_eq!(pkg.name, "");
    assert_eq!(pkg.version, "");
    assert_eq!(pkg.manager, "npm");
}

// ---------------------------------------------------------------------------
// Target repositories
// ---------------------------------------------------------------------------

#[test]
fn target_repos_from_default_path() {
    let dir = make_dir();
    write(&dir, ".github/repositories.txt", "acme/api\n# acme/legacy\n\nacme/web\n");
    let repos = target_repos(dir.path(), &RepositoriesConfig::default()).expect("repos");
    assert_eq!(repos, vec!["api", "web"]);
}

#[test]
fn target_repos_missing_file() {
    let dir = make_dir();
    let err = target_repos(dir.path(), &RepositoriesConfig::default()).unwrap_err();
    assert!(matches!(err, DetectError::RepositoriesNotFound { .. }), "got: {err}");
    assert!(err.to_string().contains(".github/repositories.txt"));
}
