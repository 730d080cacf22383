//! # cikit-renderer
//!
//! Tera-based rendering of pipeline step summaries.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cikit_renderer::{SecuritySummary, SummaryRenderer};
//!
//! fn summary() -> Option<String> {
//!     let renderer = SummaryRenderer::new().ok()?;
//!     let results = SecuritySummary::from_statuses(Some("success"), None, None, Some("failure"));
//!     renderer.render_security(&results).ok()
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::{ScanResult, SecuritySummary};
pub use engine::SummaryRenderer;
pub use error::RenderError;
