//! Sync target repository list.

use std::path::Path;

use cikit_core::config::RepositoriesConfig;

use crate::{io_err, DetectError};

/// Read the repository list under `root` and return bare repository names.
pub fn target_repos(root: &Path, config: &RepositoriesConfig) -> Result<Vec<String>, DetectError> {
    let path = root.join(&config.path);
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DetectError::RepositoriesNotFound {
                path: config.path.clone(),
            })
        }
        Err(e) => return Err(io_err(path, e)),
    };
    Ok(parse_repository_list(&text))
}

/// One repository per line; blank lines and `#` comments are skipped and
/// `owner/name` is reduced to `name`.
pub fn parse_repository_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.rsplit('/').next())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
