//! Helper configuration.
//!
//! # Storage layout
//!
//! ```text
//! <work tree>/
//!   .github/
//!     cikit.yaml   (optional, every section and field has a default)
//! ```
//!
//! Candidate lists that the helpers probe live here rather than in the
//! detectors, so callers and tests can pass their own.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Location of the config file, relative to the working tree.
pub const CONFIG_PATH: &str = ".github/cikit.yaml";

/// Root of `.github/cikit.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CikitConfig {
    pub docs: DocsConfig,
    pub dockerfile: DockerfileConfig,
    pub frontend: FrontendConfig,
    pub compose: ComposeConfig,
    pub repositories: RepositoriesConfig,
    pub protobuf: ProtobufConfig,
}

/// Documentation-update applier settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Input directory used when `apply-docs` gets no argument.
    pub input_dir: PathBuf,
    /// Descriptor file extension, with or without the leading dot.
    pub extension: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(".github/doc-updates"),
            extension: "json".to_string(),
        }
    }
}

impl DocsConfig {
    /// File-name suffix a descriptor must end with, e.g. `.json`.
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }
}

/// Container build file candidates, probed in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockerfileConfig {
    pub candidates: Vec<PathBuf>,
    /// Reported path when no candidate exists.
    pub fallback: PathBuf,
}

impl Default for DockerfileConfig {
    fn default() -> Self {
        Self {
            candidates: vec![
                PathBuf::from("Dockerfile"),
                PathBuf::from("docker/Dockerfile"),
                PathBuf::from("build/Dockerfile"),
            ],
            fallback: PathBuf::from("Dockerfile"),
        }
    }
}

/// A lock file and the package manager it implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockFile {
    pub file: String,
    pub manager: String,
}

impl LockFile {
    fn new(file: &str, manager: &str) -> Self {
        Self {
            file: file.to_string(),
            manager: manager.to_string(),
        }
    }
}

/// Frontend package detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Manifest name, looked up at the root and one directory level down.
    pub manifest: String,
    /// First lock file present next to the manifest picks the manager.
    pub lock_files: Vec<LockFile>,
    pub default_manager: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            manifest: "package.json".to_string(),
            lock_files: vec![
                LockFile::new("pnpm-lock.yaml", "pnpm"),
                LockFile::new("yarn.lock", "yarn"),
                LockFile::new("package-lock.json", "npm"),
            ],
            default_manager: "npm".to_string(),
        }
    }
}

/// Container-composition validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    pub files: Vec<PathBuf>,
    /// Validator executable; invoked as `<program> -f <file> config`.
    pub program: String,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            files: vec![
                PathBuf::from("docker-compose.yml"),
                PathBuf::from("docker-compose.yaml"),
                PathBuf::from("docker-stack.yml"),
                PathBuf::from("docker-stack-jf.yml"),
            ],
            program: "docker-compose".to_string(),
        }
    }
}

/// Sync target list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoriesConfig {
    pub path: PathBuf,
}

impl Default for RepositoriesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".github/repositories.txt"),
        }
    }
}

/// Code generation: `buf generate` and the Python plugins it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtobufConfig {
    pub buf_config: PathBuf,
    pub buf_program: String,
    pub python: String,
    pub python_plugins: Vec<String>,
}

impl Default for ProtobufConfig {
    fn default() -> Self {
        Self {
            buf_config: PathBuf::from("buf.gen.yaml"),
            buf_program: "buf".to_string(),
            python: "python3".to_string(),
            python_plugins: vec!["grpc_tools.protoc".to_string(), "mypy_protobuf".to_string()],
        }
    }
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// `<root>/.github/cikit.yaml`: pure, no I/O.
pub fn config_path_at(root: &Path) -> PathBuf {
    root.join(CONFIG_PATH)
}

/// Load the config for the working tree at `root`.
///
/// Returns defaults if the file is absent, `ConfigError::Parse` (with path +
/// line context) if it is malformed.
pub fn load_at(root: &Path) -> Result<CikitConfig, ConfigError> {
    let path = config_path_at(root);
    if !path.exists() {
        tracing::debug!("no config at {}; using defaults", path.display());
        return Ok(CikitConfig::default());
    }
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    if contents.trim().is_empty() {
        return Ok(CikitConfig::default());
    }
    let config: CikitConfig = serde_yaml::from_str(&contents).map_err(|source| {
        ConfigError::Parse {
            path: path.clone(),
            source,
        }
    })?;
    validate(&path, &config)?;
    Ok(config)
}

fn validate(path: &Path, config: &CikitConfig) -> Result<(), ConfigError> {
    let invalid = |message: &str| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: message.to_string(),
    };
    if config.docs.extension.trim_start_matches('.').is_empty() {
        return Err(invalid("docs.extension must not be empty"));
    }
    if config.docs.extension.contains(['/', '\\']) {
        return Err(invalid("docs.extension must not contain path separators"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
