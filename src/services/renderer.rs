//! Digest message rendering.
//!
//! Produces the plain-text body of a digest: a greeting, one line per
//! article in the order given, and a signature. The greeting and signature
//! are template content, not a frozen wire format; the per-article line
//! format `<title> (<url>) at <publishedAt>` is what tests pin down.

use crate::domain::Article;

const GREETING: &str = "Hello!\nHere are your cool space news!";
const SIGNATURE: &str = "Sincerly,\n\nyour Mailman!";

/// Renders the message body for an already-ordered article sequence.
///
/// An empty sequence still renders the greeting and signature with no
/// article lines between them.
pub fn render(articles: &[Article]) -> String {
    let lines = articles
        .iter()
        .map(|a| format!("{} ({}) at {}", a.title, a.url, a.published_at.to_rfc3339()))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{GREETING}\n\n{lines}\n\n{SIGNATURE}\n")
}
