//! Frontend package metadata.
//!
//! The manifest at the root wins; otherwise manifests one directory down are
//! tried in directory-name order. A manifest counts only if it parses and has
//! a non-empty `name`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use cikit_core::config::FrontendConfig;

use crate::{io_err, DetectError};

/// Detected package, or the "no package" defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendPackage {
    pub has_package: bool,
    /// `.` for the root, otherwise the subdirectory name.
    pub dir: String,
    pub name: String,
    pub version: String,
    pub manager: String,
}

impl FrontendPackage {
    fn absent(config: &FrontendConfig) -> Self {
        Self {
            has_package: false,
            dir: ".".to_string(),
            name: String::new(),
            version: String::new(),
            manager: config.default_manager.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    name: Value,
    #[serde(default)]
    version: Value,
}

pub fn detect_frontend_package(
    root: &Path,
    config: &FrontendConfig,
) -> Result<FrontendPackage, DetectError> {
    for (dir, manifest_path) in candidates(root, &config.manifest)? {
        let Some(manifest) = read_manifest(&manifest_path) else {
            continue;
        };
        let Some(name) = text(&manifest.name) else {
            tracing::debug!("{} has no name; skipping", manifest_path.display());
            continue;
        };
        let package_dir = match &dir {
            Some(dir) => root.join(dir),
            None => root.to_path_buf(),
        };
        return Ok(FrontendPackage {
            has_package: true,
            dir: dir.unwrap_or_else(|| ".".to_string()),
            name,
            version: text(&manifest.version).unwrap_or_default(),
            manager: package_manager(&package_dir, config),
        });
    }
    Ok(FrontendPackage::absent(config))
}

/// Root manifest first, then `*/<manifest>` sorted by directory name.
fn candidates(root: &Path, manifest: &str) -> Result<Vec<(Option<String>, PathBuf)>, DetectError> {
    let mut found = vec![(None, root.join(manifest))];

    let mut nested = Vec::new();
    for entry in std::fs::read_dir(root).map_err(|e| io_err(root, e))? {
        let entry = entry.map_err(|e| io_err(root, e))?;
        if !entry.path().is_dir() {
            continue;
        }
        let path = entry.path().join(manifest);
        if path.is_file() {
            nested.push((entry.file_name().to_string_lossy().into_owned(), path));
        }
    }
    nested.sort_by(|a, b| a.0.cmp(&b.0));

    found.extend(nested.into_iter().map(|(dir, path)| (Some(dir), path)));
    Ok(found)
}

fn read_manifest(path: &Path) -> Option<Manifest> {
    let content = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            tracing::debug!("skipping {}: {e}", path.display());
            None
        }
    }
}

fn package_manager(dir: &Path, config: &FrontendConfig) -> String {
    config
        .lock_files
        .iter()
        .find(|lock| dir.join(&lock.file).exists())
        .map(|lock| lock.manager.clone())
        .unwrap_or_else(|| config.default_manager.clone())
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_accepts_strings_and_numbers_only() {
        assert_eq!(text(&json!("web")), Some("web".to_string()));
        assert_eq!(text(&json!(2)), Some("2".to_string()));
        assert_eq!(text(&json!("")), None);
        assert_eq!(text(&json!(null)), None);
        assert_eq!(text(&json!(["a"])), None);
    }
}
