//! Application layer - use cases and orchestration.
//!
//! This layer contains the main pipeline for decoding, rendering, and
//! extracting session data.

pub mod decoder;
pub mod extractor;
pub mod formatter;
pub mod renderer;

pub use decoder::{parse_session, unquote};
pub use extractor::run_extraction;
pub use formatter::{format_reports_table, format_stats};
pub use renderer::render_text;
