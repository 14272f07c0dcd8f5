//! Shared test utilities for the recipe-site test suite.
//!
//! Fixture setup plus lookup helpers that panic with the list of available
//! entries on a miss, so failing assertions say what was actually loaded.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let site = scan(tmp.path()).unwrap();
//!
//! let pasta = find_recipe(&site, "pasta");
//! assert_eq!(pasta.tags, vec!["italian", "dinner"]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::types::{Recipe, Site};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/recipes/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/recipes");
    for entry in fs::read_dir(&fixtures).unwrap() {
        let path = entry.unwrap().path();
        if path.is_file() {
            fs::copy(&path, tmp.path().join(path.file_name().unwrap())).unwrap();
        }
    }
    tmp
}

/// Write a file into `dir`, creating parent directories as needed.
pub fn write_recipe(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

// =========================================================================
// Site lookups
// =========================================================================

/// Find a recipe by slug. Panics if not found.
pub fn find_recipe<'a>(site: &'a Site, slug: &str) -> &'a Recipe {
    site.find(slug).unwrap_or_else(|| {
        let slugs = recipe_slugs(site);
        panic!("recipe '{slug}' not found. Available: {slugs:?}")
    })
}

/// All recipe slugs in site order.
pub fn recipe_slugs(site: &Site) -> Vec<&str> {
    site.recipes().iter().map(|r| r.slug.as_str()).collect()
}

/// Read a generated file. Panics with the directory listing on a miss.
pub fn read_output(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap_or_else(|e| {
        let listing: Vec<String> = fs::read_dir(dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().to_string())
                    .collect()
            })
            .unwrap_or_default();
        panic!("cannot read {name}: {e}. Available: {listing:?}")
    })
}
