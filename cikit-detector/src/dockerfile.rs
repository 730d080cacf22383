//! Container build file lookup.

use std::path::Path;

use cikit_core::config::DockerfileConfig;

/// Which build file to use and whether a build should run at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerfileDetection {
    /// Path as written in the candidate list, relative to the root.
    pub path: String,
    pub should_build: bool,
}

/// Pick the first existing build file under `root`.
///
/// A non-blank `override_path` is tried before the configured candidates.
/// When nothing exists the configured fallback is reported with
/// `should_build = false`.
pub fn detect_dockerfile(
    root: &Path,
    config: &DockerfileConfig,
    override_path: Option<&str>,
) -> DockerfileDetection {
    let override_path = override_path.map(str::trim).filter(|p| !p.is_empty());

    let candidates = override_path
        .map(str::to_string)
        .into_iter()
        .chain(config.candidates.iter().map(|c| c.to_string_lossy().into_owned()));

    for candidate in candidates {
        if root.join(&candidate).exists() {
            tracing::debug!("build file found: {candidate}");
            return DockerfileDetection {
                path: candidate,
                should_build: true,
            };
        }
    }

    DockerfileDetection {
        path: config.fallback.to_string_lossy().into_owned(),
        should_build: false,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn nothing_present_falls_back() {
        let tmp = TempDir::new().unwrap();
        let found = detect_dockerfile(tmp.path(), &DockerfileConfig::default(), None);
        assert_eq!(
            found,
            DockerfileDetection {
                path: "Dockerfile".to_string(),
                should_build: false
            }
        );
    }

    #[test]
    fn blank_override_is_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("docker")).unwrap();
        fs::write(tmp.path().join("docker/Dockerfile"), "FROM scratch\n").unwrap();

        let found = detect_dockerfile(tmp.path(), &DockerfileConfig::default(), Some("   "));
        assert_eq!(found.path, "docker/Dockerfile");
        assert!(found.should_build);
    }

    #[test]
    fn missing_override_falls_through_to_candidates() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Dockerfile"), "FROM scratch\n").unwrap();

        let found = detect_dockerfile(
            tmp.path(),
            &DockerfileConfig::default(),
            Some("deploy/Dockerfile.prod"),
        );
        assert_eq!(found.path, "Dockerfile");
    }
}
