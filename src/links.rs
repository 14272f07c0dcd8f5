//! Cross-recipe link rewriting.
//!
//! After a recipe's markdown is rendered, any HTML element whose entire text
//! is another recipe's title becomes a link to that recipe:
//!
//! ```text
//! <li>Garlic Bread</li>  →  <li><a href="garlic_bread.html">Garlic Bread</a></li>
//! ```
//!
//! Matching is a literal substring search for `>` + title + `<`: case,
//! whitespace and surrounding markup must match exactly, and partial mentions
//! inside longer text are never linked.
//!
//! ## Ordering
//!
//! Titles are applied longest first, ties broken by slug, so the outcome does
//! not depend on map iteration order when one title contains another.
//!
//! ## Re-running
//!
//! A match that is already the text of a link (directly followed by `</a>`)
//! is left as is. Rewriting an already rewritten body is a no-op.

use std::collections::BTreeMap;

/// Link every exact title mention in `html` to its recipe page.
///
/// `titles` maps slug → title, as [`crate::types::Site::titles`] returns.
pub fn link_titles(html: &str, titles: &BTreeMap<String, String>) -> String {
    let mut content = html.to_string();
    for (slug, title) in link_order(titles) {
        content = link_title(&content, slug, title);
    }
    content
}

/// (slug, title) pairs, longest title first, then by slug. Empty titles are
/// dropped: `"><"` would match between every pair of adjacent tags.
fn link_order(titles: &BTreeMap<String, String>) -> Vec<(&str, &str)> {
    let mut pairs: Vec<(&str, &str)> = titles
        .iter()
        .filter(|(_, title)| !title.is_empty())
        .map(|(slug, title)| (slug.as_str(), title.as_str()))
        .collect();
    pairs.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(b.0)));
    pairs
}

fn link_title(html: &str, slug: &str, title: &str) -> String {
    let needle = format!(">{title}<");
    if !html.contains(&needle) {
        return html.to_string();
    }

    let mut out = String::with_capacity(html.len() + 32);
    let mut rest = html;
    while let Some(pos) = rest.find(&needle) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + needle.len()..];
        if after.starts_with("/a>") {
            out.push_str(&needle);
        } else {
            out.push_str(&format!("><a href=\"{slug}.html\">{title}</a><"));
        }
        rest = after;
    }
    out.push_str(rest);
    out
}
