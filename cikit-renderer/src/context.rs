//! Security summary context: serializable rendering payload.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Status value that marks a scan as failed.
pub const FAILURE: &str = "failure";

/// Status used when a scan result is not supplied.
pub const SKIPPED: &str = "skipped";

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub label: String,
    /// Job result as reported by the pipeline (`success`, `failure`, `skipped`, ...).
    pub status: String,
}

impl ScanResult {
    pub fn new(label: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status: status.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status == FAILURE
    }
}

/// Results of the security scan jobs, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySummary {
    pub scans: Vec<ScanResult>,
    pub has_failures: bool,
}

impl SecuritySummary {
    pub fn new(scans: Vec<ScanResult>) -> Self {
        let has_failures = scans.iter().any(ScanResult::is_failure);
        Self {
            scans,
            has_failures,
        }
    }

    /// The four standard scans; a missing status reads as `skipped`.
    pub fn from_statuses(
        codeql: Option<&str>,
        dependency_review: Option<&str>,
        security_audit: Option<&str>,
        trivy: Option<&str>,
    ) -> Self {
        let row = |label: &str, status: Option<&str>| ScanResult::new(label, status.unwrap_or(SKIPPED));
        Self::new(vec![
            row("CodeQL Analysis", codeql),
            row("Dependency Review", dependency_review),
            row("Security Audit", security_audit),
            row("Trivy Scan", trivy),
        ])
    }

    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
