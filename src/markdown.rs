//! Markdown to HTML conversion.
//!
//! Uses [pulldown-cmark](https://docs.rs/pulldown-cmark) with tables,
//! strikethrough, definition lists and `{#id}` heading attributes. Headings
//! without an explicit id get one derived from their text, so every section
//! of a recipe can be linked to (`pasta.html#ingredients`).

use crate::naming;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use std::collections::HashMap;

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_DEFINITION_LIST
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Render markdown to an HTML fragment.
pub fn to_html(markdown: &str) -> String {
    let mut events: Vec<Event> = Parser::new_ext(markdown, options()).collect();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for i in 0..events.len() {
        let Event::Start(Tag::Heading { id: None, .. }) = &events[i] else {
            continue;
        };
        let anchor = naming::anchor_id(&heading_text(&events[i + 1..]));
        if anchor.is_empty() {
            continue;
        }
        let anchor = unique_anchor(anchor, &mut seen);
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
            *id = Some(CowStr::from(anchor));
        }
    }

    let mut body = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut body, events.into_iter());
    body
}

/// Plain text of a heading, from the events following its start tag.
fn heading_text(events: &[Event]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}

/// Suffix repeated anchors with `-1`, `-2`, ... in document order.
fn unique_anchor(anchor: String, seen: &mut HashMap<String, usize>) -> String {
    let count = seen.entry(anchor.clone()).or_insert(0);
    *count += 1;
    match *count {
        1 => anchor,
        n => format!("{anchor}-{}", n - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_inline_markup() {
        let html = to_html("This is **bold** and *italic*.");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn headings_get_anchor_ids() {
        let html = to_html("# Pasta\n\n## Ingredients\n");
        assert!(html.contains(r#"<h1 id="pasta">Pasta</h1>"#));
        assert!(html.contains(r#"<h2 id="ingredients">Ingredients</h2>"#));
    }

    #[test]
    fn anchor_from_formatted_heading() {
        let html = to_html("## Step 2: *Bake* the `loaf`\n");
        assert!(html.contains(r#"id="step-2-bake-the-loaf""#));
    }

    #[test]
    fn duplicate_headings_get_suffixes() {
        let html = to_html("## Notes\n\n## Notes\n\n## Notes\n");
        assert!(html.contains(r#"id="notes""#));
        assert!(html.contains(r#"id="notes-1""#));
        assert!(html.contains(r#"id="notes-2""#));
    }

    #[test]
    fn explicit_heading_id_kept() {
        let html = to_html("## Sauce {#the-sauce}\n");
        assert!(html.contains(r#"id="the-sauce""#));
        assert!(!html.contains(r#"id="sauce""#));
    }

    #[test]
    fn punctuation_only_heading_has_no_id() {
        let html = to_html("## ???\n");
        assert!(html.contains("<h2>???</h2>"));
    }

    #[test]
    fn tables_enabled() {
        let html = to_html("| Item | Amount |\n|---|---|\n| Flour | 500g |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>Flour</td>"));
    }

    #[test]
    fn strikethrough_enabled() {
        let html = to_html("~~raisins~~");
        assert!(html.contains("<del>raisins</del>"));
    }

    #[test]
    fn list_items_are_plain_text_elements() {
        // Cross-linking relies on tight list items rendering as `<li>Title</li>`.
        let html = to_html("- Garlic Bread\n- Salad\n");
        assert!(html.contains("<li>Garlic Bread</li>"));
        assert!(html.contains("<li>Salad</li>"));
    }
}
