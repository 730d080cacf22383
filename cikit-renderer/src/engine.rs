//! Tera rendering engine: [`SummaryRenderer`].

use tera::Tera;

use crate::context::SecuritySummary;
use crate::error::RenderError;

/// Name of the security summary template.
pub const SECURITY_SUMMARY: &str = "security_summary.md";

// Baked into the binary at compile time.
const SECURITY_SUMMARY_SRC: &str = include_str!("templates/security_summary.md.tera");

/// Renders pipeline step summaries.
///
/// Create once with [`SummaryRenderer::new`] and reuse.
pub struct SummaryRenderer {
    tera: Tera,
}

impl SummaryRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(SECURITY_SUMMARY, SECURITY_SUMMARY_SRC)?;
        Ok(SummaryRenderer { tera })
    }

    /// Render the security scan summary as Markdown.
    ///
    /// Output uses LF line endings and ends with exactly one newline.
    pub fn render_security(&self, summary: &SecuritySummary) -> Result<String, RenderError> {
        let ctx = summary.to_tera_context()?;
        let rendered = self.tera.render(SECURITY_SUMMARY, &ctx)?;
        tracing::debug!("rendered {} scan row(s)", summary.scans.len());
        let mut out = rendered.replace("\r\n", "\n").trim_end().to_string();
        out.push('\n');
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_template_parses() {
        let renderer = SummaryRenderer::new().expect("embedded template must parse");
        assert_eq!(
            renderer.tera.get_template_names().collect::<Vec<_>>(),
            vec![SECURITY_SUMMARY]
        );
    }

    #[test]
    fn ends_with_single_newline() {
        let renderer = SummaryRenderer::new().unwrap();
        let out = renderer
            .render_security(&SecuritySummary::from_statuses(None, None, None, None))
            .unwrap();
        assert!(out.ends_with("passed.**\n"));
        assert!(!out.ends_with("\n\n"));
        assert!(!out.contains('\r'));
    }
}
