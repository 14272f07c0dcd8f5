//! Shared types passed from the loader to the renderer and CLI output.
//!
//! A [`Site`] is assembled once by the loader through a [`SiteBuilder`] and is
//! read-only afterwards: rendering and link rewriting only ever borrow it.

use std::collections::BTreeMap;

/// One markdown recipe file.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    /// Filename stem; also the page name (`{slug}.html`).
    pub slug: String,
    /// Frontmatter title, else first `# heading`, else slug with `_` → space.
    pub title: String,
    /// Frontmatter tags in file order; empty when absent.
    pub tags: Vec<String>,
    /// Markdown body with any frontmatter block stripped.
    pub content: String,
}

impl Recipe {
    /// Name of the file this recipe was read from.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.slug)
    }

    /// Name of the page generated for this recipe.
    pub fn page_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// A non-fatal problem found while loading a recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadWarning {
    pub file_name: String,
    pub message: String,
}

/// Every recipe of one generation run.
#[derive(Debug, Clone, Default)]
pub struct Site {
    recipes: Vec<Recipe>,
    titles: BTreeMap<String, String>,
    warnings: Vec<LoadWarning>,
}

impl Site {
    /// Recipes in file-listing order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Slug → title lookup used for cross-linking.
    ///
    /// When two files map to the same slug the last one loaded wins here,
    /// while [`recipes`](Self::recipes) keeps both records.
    pub fn titles(&self) -> &BTreeMap<String, String> {
        &self.titles
    }

    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    pub fn find(&self, slug: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Accumulates recipes while the loader walks the directory.
#[derive(Debug, Default)]
pub struct SiteBuilder {
    site: Site,
}

impl SiteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recipe and register its title under its slug.
    pub fn push(&mut self, recipe: Recipe) -> &mut Self {
        self.site
            .titles
            .insert(recipe.slug.clone(), recipe.title.clone());
        self.site.recipes.push(recipe);
        self
    }

    pub fn warn(&mut self, file_name: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.site.warnings.push(LoadWarning {
            file_name: file_name.into(),
            message: message.into(),
        });
        self
    }

    pub fn build(self) -> Site {
        self.site
    }
}
