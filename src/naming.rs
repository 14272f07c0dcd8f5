//! Filename and heading conventions shared by the loader and renderer.
//!
//! Every recipe is identified by its filename: the stem becomes the slug
//! (`garlic_bread.md` → `garlic_bread`) and the slug doubles as the page
//! name (`garlic_bread.html`).
//!
//! ## Display Titles
//!
//! Underscores in the slug are converted to spaces for the default title:
//! - `garlic_bread.md` → "garlic bread"
//! - `pasta.md` → "pasta"
//! - `mom's-lasagna.md` → "mom's-lasagna" (dashes are kept)
//!
//! A `# Heading` line in the file, or a frontmatter `title`, replaces this
//! default; see [`crate::scan`] for the precedence.

/// Extension a file must carry to be loaded as a recipe.
pub const RECIPE_EXTENSION: &str = ".md";

/// File that lives next to the recipes but is never one.
pub const README: &str = "README.md";

/// Returns the slug for a recipe filename, or `None` when the file is not a
/// recipe (wrong extension, or the README).
///
/// - `"pasta.md"` → `Some("pasta")`
/// - `"garlic_bread.md"` → `Some("garlic_bread")`
/// - `"README.md"` → `None`
/// - `"notes.txt"` → `None`
/// - `"Pasta.MD"` → `None` (the extension check is case-sensitive)
pub fn recipe_slug(file_name: &str) -> Option<&str> {
    if file_name == README {
        return None;
    }
    file_name.strip_suffix(RECIPE_EXTENSION)
}

/// Default display title: the slug with underscores turned into spaces.
pub fn default_title(slug: &str) -> String {
    slug.replace('_', " ")
}

/// Text of the first line starting with `"# "`, prefix stripped.
///
/// The remainder is returned verbatim, trailing whitespace included.
pub fn first_heading(content: &str) -> Option<&str> {
    content.lines().find_map(|line| line.strip_prefix("# "))
}

/// Anchor id for a heading: letters and digits lowercased, every run of other
/// characters collapsed into a single `-`, never leading or trailing.
///
/// - `"Garlic Bread"` → `"garlic-bread"`
/// - `"Step 2: Bake!"` → `"step-2-bake"`
/// - `"  Crème brûlée "` → `"crème-brûlée"`
pub fn anchor_id(text: &str) -> String {
    let mut anchor = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !anchor.is_empty() {
                anchor.push('-');
            }
            pending_dash = false;
            anchor.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    anchor
}
