//! Line-oriented text rendering of a session.

use std::fmt::Write as _;

use crate::domain::Session;

/// Flattens a [`Session`] into the plain-text artifact format.
///
/// Each tab group contributes one `<URL> | <Title>` line per tab in save
/// order, followed by a single blank line terminating the group. Empty
/// groups still contribute their blank line, and the final group separator
/// is not suppressed.
#[must_use]
pub fn render_text(session: &Session) -> String {
    let mut out = String::new();
    for group in &session.tab_groups {
        for tab in &group.tabs_meta {
            let _ = writeln!(out, "{} | {}", tab.url, tab.title);
        }
        out.push('\n');
    }
    out
}
