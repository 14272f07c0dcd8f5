//! Recipe directory scanning.
//!
//! Stage 1 of the build. Reads every recipe file in a flat directory and
//! produces the [`Site`] the later stages render.
//!
//! ## Directory Structure
//!
//! ```text
//! recipes/
//! ├── README.md              # Ignored
//! ├── config.toml            # Site config (optional, not a recipe)
//! ├── garlic_bread.md        # → garlic_bread.html, title "garlic bread" by default
//! ├── pasta.md               # → pasta.html
//! └── photos/                # Subdirectories are ignored
//! ```
//!
//! ## Title Resolution
//!
//! Applied in this order, each step overwriting the previous one:
//!
//! 1. Slug with underscores replaced by spaces
//! 2. First line of the file starting with `# ` (searched in the raw file,
//!    frontmatter included)
//! 3. `title` from the frontmatter block, if it parses and sets one
//!
//! ## Errors
//!
//! An unreadable directory or recipe file aborts the scan. Frontmatter that
//! fails to parse does not: the recipe keeps its heading/slug title, gets no
//! tags, and a warning is logged and kept on the [`Site`].

use crate::frontmatter;
use crate::naming;
use crate::types::{Recipe, Site, SiteBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read recipe directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read recipe {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub fn scan(root: &Path) -> Result<Site, ScanError> {
    let mut builder = SiteBuilder::new();

    for path in recipe_files(root)? {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let Some(slug) = naming::recipe_slug(&file_name) else {
            continue;
        };
        let content = fs::read_to_string(&path).map_err(|source| ScanError::ReadFile {
            path: path.clone(),
            source,
        })?;

        let recipe = parse_recipe(slug, &content, &file_name, &mut builder);
        tracing::debug!(slug = %recipe.slug, title = %recipe.title, "loaded recipe");
        builder.push(recipe);
    }

    Ok(builder.build())
}

/// List candidate recipe files, sorted by file name.
fn recipe_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let read_dir_error = |source| ScanError::ReadDir {
        path: root.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(root).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Build a recipe from raw file content.
///
/// Frontmatter failures are reported through `builder` and otherwise ignored.
fn parse_recipe(slug: &str, content: &str, file_name: &str, builder: &mut SiteBuilder) -> Recipe {
    let mut title = naming::default_title(slug);
    if let Some(heading) = naming::first_heading(content) {
        title = heading.to_string();
    }

    let mut tags = Vec::new();
    let (block, body) = frontmatter::split(content);
    if let Some(block) = block {
        match frontmatter::parse(block) {
            Ok(fm) => {
                if let Some(t) = fm.title {
                    title = t;
                }
                if let Some(t) = fm.tags {
                    tags = t;
                }
            }
            Err(e) => {
                tracing::warn!("failed to parse frontmatter for {file_name}: {e}");
                builder.warn(file_name, format!("frontmatter ignored: {e}"));
            }
        }
    }

    Recipe {
        slug: slug.to_string(),
        title,
        tags,
        content: body.to_string(),
    }
}
