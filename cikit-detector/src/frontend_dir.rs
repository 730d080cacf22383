//! Frontend working directory from the repository config blob.

use serde_json::Value;

/// Working directory plus the lock-file path used as a cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendDir {
    pub dir: String,
    pub cache_path: String,
}

impl FrontendDir {
    fn new(dir: String) -> Self {
        let cache_path = if dir == "." {
            "package-lock.json".to_string()
        } else {
            format!("{dir}/package-lock.json")
        };
        Self { dir, cache_path }
    }
}

/// Resolve `working_directories.frontend` from a JSON config string.
///
/// A missing or blank config is `{}`. Invalid JSON is logged and treated as
/// `{}`. Anything but a non-empty string at that key yields `.`.
pub fn frontend_working_dir(raw: Option<&str>) -> FrontendDir {
    let config = match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => Value::Null,
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!("REPOSITORY_CONFIG is not valid JSON ({e}); using defaults");
            Value::Null
        }),
    };

    let dir = config
        .get("working_directories")
        .and_then(|dirs| dirs.get("frontend"))
        .and_then(Value::as_str)
        .filter(|dir| !dir.is_empty())
        .unwrap_or(".");

    FrontendDir::new(dir.to_string())
}
