//! Frontmatter blocks at the top of recipe files.
//!
//! A recipe may start with a YAML block fenced by `---`:
//!
//! ```text
//! ---
//! title: Pasta Carbonara
//! tags: [italian, dinner]
//! ---
//! # Carbonara
//! ...
//! ```
//!
//! Only `title` and `tags` are read; any other key is ignored. Splitting is
//! done on the literal `---` anywhere in the file, not on whole lines, so a
//! `---` inside the YAML ends the block early.

use serde::Deserialize;

const DELIMITER: &str = "---";

/// Fields recognised inside a frontmatter block.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Split raw file content into `(frontmatter, body)`.
///
/// Returns `None` for the frontmatter when the content does not start with
/// `---` or does not split into exactly three segments; the body is then the
/// whole content.
pub fn split(content: &str) -> (Option<&str>, &str) {
    if !content.starts_with(DELIMITER) {
        return (None, content);
    }
    let mut parts = content.splitn(3, DELIMITER);
    // The first segment is the empty string before the opening fence.
    let _ = parts.next();
    match (parts.next(), parts.next()) {
        (Some(block), Some(body)) => (Some(block), body),
        _ => (None, content),
    }
}

/// Parse a frontmatter block.
///
/// A blank block, or one holding only comments, yields an empty
/// [`Frontmatter`].
pub fn parse(block: &str) -> Result<Frontmatter, serde_yaml_ng::Error> {
    if block.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    let parsed: Option<Frontmatter> = serde_yaml_ng::from_str(block)?;
    Ok(parsed.unwrap_or_default())
}
