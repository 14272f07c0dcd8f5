//! HTML site generation.
//!
//! Stage 2 of the build. Takes the [`Site`] from the scan stage and writes
//! the final static HTML.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): every recipe in site order with its tags
//! - **Recipe pages** (`/{slug}.html`): title, tags, and the rendered body
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── garlic_bread.html
//! ├── pasta.html
//! └── salad.html
//! ```
//!
//! Nothing else is written. Existing files with the same names are
//! overwritten; anything else already in the output directory is left alone.
//!
//! ## Recipe Bodies
//!
//! Each body goes through [`markdown::to_html`] and then
//! [`links::link_titles`] with the site's slug → title table, and is
//! inserted into the page unescaped.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Titles and tags are escaped; there is no runtime template to fail.

use crate::config::{self, SiteConfig};
use crate::links;
use crate::markdown;
use crate::scan::{self, ScanError};
use crate::types::{Recipe, Site};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("cannot create output directory {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

const CSS_BASE: &str = include_str!("../static/base.css");
const CSS_RECIPE: &str = include_str!("../static/recipe.css");
const CSS_INDEX: &str = include_str!("../static/index.css");

pub const INDEX_PAGE: &str = "index.html";

/// Create the output directory, scan the recipes, and write the site.
pub fn build(
    recipes_dir: &Path,
    output_dir: &Path,
    config: &SiteConfig,
) -> Result<Site, GenerateError> {
    create_output_dir(output_dir)?;
    let site = scan::scan(recipes_dir)?;
    generate(&site, output_dir, config)?;
    Ok(site)
}

/// Write `index.html` and one page per recipe into `output_dir`.
pub fn generate(site: &Site, output_dir: &Path, config: &SiteConfig) -> Result<(), GenerateError> {
    create_output_dir(output_dir)?;

    let color_css = config::generate_color_css(&config.colors);

    for recipe in site.recipes() {
        let body = render_body(recipe, site);
        let css = format!("{color_css}\n\n{CSS_BASE}\n{CSS_RECIPE}");
        let page = render_recipe_page(recipe, &body, &config.title, &css);
        write_page(output_dir, &recipe.page_name(), page)?;
    }

    let css = format!("{color_css}\n\n{CSS_BASE}\n{CSS_INDEX}");
    let index = render_index(site, &config.title, &css);
    write_page(output_dir, INDEX_PAGE, index)?;

    Ok(())
}

fn create_output_dir(output_dir: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(output_dir).map_err(|source| GenerateError::CreateOutput {
        path: output_dir.to_path_buf(),
        source,
    })
}

fn write_page(output_dir: &Path, name: &str, page: Markup) -> Result<(), GenerateError> {
    let path = output_dir.join(name);
    fs::write(&path, page.into_string()).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}

/// Markdown body rendered to HTML with cross-recipe links applied.
pub fn render_body(recipe: &Recipe, site: &Site) -> String {
    links::link_titles(&markdown::to_html(&recipe.content), site.titles())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn tag_list(tags: &[String]) -> Markup {
    html! {
        @for tag in tags {
            span.tag { (tag) }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders a single recipe page. `body_html` is inserted verbatim.
fn render_recipe_page(recipe: &Recipe, body_html: &str, site_title: &str, css: &str) -> Markup {
    let page_title = format!("{} - {}", site_title, recipe.title);

    let content = html! {
        nav {
            a href=(INDEX_PAGE) { "← All Recipes" }
        }
        h1 { (recipe.title) }
        div.recipe-meta {
            (tag_list(&recipe.tags))
        }
        (PreEscaped(body_html))
    };

    base_document(&page_title, css, content)
}

/// Renders the index page listing every recipe.
fn render_index(site: &Site, site_title: &str, css: &str) -> Markup {
    let content = html! {
        h1 { (site_title) }
        ul.recipe-list {
            @for recipe in site.recipes() {
                li.recipe-item {
                    a href=(recipe.page_name()) { (recipe.title) }
                    div.tags {
                        (tag_list(&recipe.tags))
                    }
                }
            }
        }
    };

    base_document(site_title, css, content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::types::SiteBuilder;
    use tempfile::TempDir;

    fn recipe(slug: &str, title: &str, tags: &[&str], content: &str) -> Recipe {
        Recipe {
            slug: slug.to_string(),
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            content: content.to_string(),
        }
    }

    fn site_of(recipes: Vec<Recipe>) -> Site {
        let mut builder = SiteBuilder::new();
        for r in recipes {
            builder.push(r);
        }
        builder.build()
    }

    #[test]
    fn base_document_includes_doctype() {
        let content = html! { p { "test" } };
        let doc = base_document("Test", "body {}", content).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Test</title>"));
    }

    #[test]
    fn base_document_css_not_escaped() {
        let doc = base_document("T", "nav > a { color: red; }", html! {}).into_string();
        assert!(doc.contains("nav > a { color: red; }"));
    }

    #[test]
    fn recipe_page_structure() {
        let r = recipe("pasta", "Pasta", &["italian", "dinner"], "# Pasta\n");
        let html = render_recipe_page(&r, "<p>body</p>", "Recipes", "").into_string();

        assert!(html.contains("<title>Recipes - Pasta</title>"));
        assert!(html.contains("<h1>Pasta</h1>"));
        assert!(html.contains(r#"<span class="tag">italian</span>"#));
        assert!(html.contains(r#"<span class="tag">dinner</span>"#));
        assert!(html.contains(r#"<a href="index.html">"#));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn recipe_page_without_tags_has_empty_meta() {
        let r = recipe("salad", "salad", &[], "");
        let html = render_recipe_page(&r, "", "Recipes", "").into_string();
        assert!(html.contains(r#"<div class="recipe-meta"></div>"#));
        assert!(!html.contains(r#"class="tag""#));
    }

    #[test]
    fn recipe_title_and_tags_escaped() {
        let r = recipe("x", "<script>alert('xss')</script>", &["<b>"], "");
        let html = render_recipe_page(&r, "", "Recipes", "").into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn index_lists_recipes_in_site_order() {
        let site = site_of(vec![
            recipe("soup", "Soup", &["winter"], ""),
            recipe("bread", "Bread", &[], ""),
        ]);
        let html = render_index(&site, "Family Recipes", "").into_string();

        assert!(html.contains("<title>Family Recipes</title>"));
        assert!(html.contains("<h1>Family Recipes</h1>"));
        let soup = html.find(r#"href="soup.html""#).unwrap();
        let bread = html.find(r#"href="bread.html""#).unwrap();
        assert!(soup < bread);
        assert!(html.contains(r#"<span class="tag">winter</span>"#));
        assert_eq!(html.matches(r#"class="recipe-item""#).count(), 2);
    }

    #[test]
    fn body_is_rendered_and_cross_linked() {
        let site = site_of(vec![
            recipe("pasta", "Pasta", &[], "# Pasta\n\n- Salad\n- salad dressing\n"),
            recipe("salad", "Salad", &[], ""),
        ]);
        let body = render_body(site.find("pasta").unwrap(), &site);

        assert!(body.contains(r#"<li><a href="salad.html">Salad</a></li>"#));
        assert!(body.contains("<li>salad dressing</li>"));
        assert!(body.contains(r#"<h1 id="pasta"><a href="pasta.html">Pasta</a></h1>"#));
    }

    // =========================================================================
    // Writing the site
    // =========================================================================

    #[test]
    fn generate_pasta_and_salad() {
        let recipes = TempDir::new().unwrap();
        write_recipe(
            recipes.path(),
            "pasta.md",
            "---\ntags: [italian, dinner]\n---\n# Pasta\n\nBoil.\n",
        );
        write_recipe(recipes.path(), "salad.md", "Toss the greens.\n");
        let out = TempDir::new().unwrap();
        let dist = out.path().join("dist");

        let site = build(recipes.path(), &dist, &SiteConfig::default()).unwrap();
        assert_eq!(site.len(), 2);

        let pasta = read_output(&dist, "pasta.html");
        assert!(pasta.contains("<h1>Pasta</h1>"));
        assert_eq!(pasta.matches(r#"<span class="tag">"#).count(), 2);

        let salad = read_output(&dist, "salad.html");
        assert!(salad.contains("<h1>salad</h1>"));
        assert!(salad.contains("<title>Recipes - salad</title>"));

        let index = read_output(&dist, "index.html");
        assert!(index.contains(r#"href="pasta.html""#));
        assert!(index.contains(r#"href="salad.html""#));

        let mut files: Vec<String> = fs::read_dir(&dist)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        files.sort();
        assert_eq!(files, vec!["index.html", "pasta.html", "salad.html"]);
    }

    #[test]
    fn generate_twice_overwrites() {
        let recipes = TempDir::new().unwrap();
        write_recipe(recipes.path(), "soup.md", "# Soup\n");
        let out = TempDir::new().unwrap();
        let config = SiteConfig::default();

        build(recipes.path(), out.path(), &config).unwrap();
        write_recipe(recipes.path(), "soup.md", "# Better Soup\n");
        build(recipes.path(), out.path(), &config).unwrap();

        let soup = read_output(out.path(), "soup.html");
        assert!(soup.contains("<h1>Better Soup</h1>"));
        assert!(!soup.contains("<h1>Soup</h1>"));
    }

    #[test]
    fn generate_uses_configured_title() {
        let recipes = TempDir::new().unwrap();
        write_recipe(recipes.path(), "soup.md", "# Soup\n");
        let out = TempDir::new().unwrap();
        let config = SiteConfig {
            title: "Family Cookbook".to_string(),
            ..SiteConfig::default()
        };

        build(recipes.path(), out.path(), &config).unwrap();
        assert!(read_output(out.path(), "index.html").contains("<h1>Family Cookbook</h1>"));
        assert!(read_output(out.path(), "soup.html").contains("<title>Family Cookbook - Soup</title>"));
    }

    #[test]
    fn generate_fixture_cross_links() {
        let tmp = setup_fixtures();
        let out = TempDir::new().unwrap();

        build(tmp.path(), out.path(), &SiteConfig::default()).unwrap();

        let bread = read_output(out.path(), "bread.html");
        assert!(bread.contains(r#"<a href="garlic_bread.html">Garlic Bread</a>"#));
        assert!(bread.contains(r#"<a href="tomato_soup.html">Tomato Soup</a>"#));

        let garlic = read_output(out.path(), "garlic_bread.html");
        assert!(garlic.contains(r#"<li><a href="bread.html">Bread</a></li>"#));

        let chili = read_output(out.path(), "broken_frontmatter.html");
        assert!(chili.contains("<h1>Weeknight Chili</h1>"));
    }

    #[test]
    fn build_missing_recipes_dir_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = build(
            &tmp.path().join("missing"),
            &tmp.path().join("dist"),
            &SiteConfig::default(),
        );
        assert!(matches!(result, Err(GenerateError::Scan(_))));
    }

    #[test]
    fn output_dir_blocked_by_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("dist");
        fs::write(&blocker, "not a directory").unwrap();

        let result = generate(&Site::default(), &blocker, &SiteConfig::default());
        assert!(matches!(result, Err(GenerateError::CreateOutput { .. })));
    }
}
