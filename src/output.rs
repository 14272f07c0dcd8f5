//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Every recipe is shown by its positional index and title, with the source
//! file as an indented `Source:` line. The output reads as an inventory of
//! the cookbook while still pointing back at the files.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Recipes
//! 001 Basic Loaf
//!     Source: bread.md
//!     Tags: baking, basics
//! 002 salad
//!     Source: salad.md
//!
//! Warnings
//!     broken_frontmatter.md: frontmatter ignored: ...
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! 001 Basic Loaf → bread.html
//! 002 salad → salad.html
//!
//! Generated 2 recipe pages
//! ```
//!
//! ## Publish
//!
//! ```text
//! Uploaded bread.html
//! Uploaded index.html
//! Failed salad.html: ...
//!
//! Uploaded 2 files, 1 failed
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure —
//! no I/O, no side effects.

use crate::generate::INDEX_PAGE;
use crate::publish::PublishReport;
use crate::types::{Recipe, Site};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn recipe_header(index: usize, recipe: &Recipe) -> String {
    format!("{} {}", format_index(index), recipe.title)
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format the loaded recipes and any load warnings.
pub fn format_scan_output(site: &Site) -> Vec<String> {
    let mut lines = vec!["Recipes".to_string()];

    if site.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, recipe) in site.recipes().iter().enumerate() {
        lines.push(recipe_header(i + 1, recipe));
        lines.push(format!("    Source: {}", recipe.file_name()));
        if !recipe.tags.is_empty() {
            lines.push(format!("    Tags: {}", recipe.tags.join(", ")));
        }
    }

    if !site.warnings().is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for warning in site.warnings() {
            lines.push(format!("    {}: {}", warning.file_name, warning.message));
        }
    }

    lines
}

pub fn print_scan_output(site: &Site) {
    for line in format_scan_output(site) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format the pages written by the generate stage.
pub fn format_generate_output(site: &Site) -> Vec<String> {
    let mut lines = vec![format!("Home → {}", INDEX_PAGE)];
    for (i, recipe) in site.recipes().iter().enumerate() {
        lines.push(format!(
            "{} → {}",
            recipe_header(i + 1, recipe),
            recipe.page_name()
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated {}",
        plural(site.len(), "recipe page", "recipe pages")
    ));
    lines
}

pub fn print_generate_output(site: &Site) {
    for line in format_generate_output(site) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 3: Publish output
// ============================================================================

/// Format the result of a publish run.
pub fn format_publish_report(report: &PublishReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .uploaded
        .iter()
        .map(|key| format!("Uploaded {}", key))
        .collect();
    for failure in &report.failed {
        lines.push(format!("Failed {}: {}", failure.key, failure.error));
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    let summary = format!("Uploaded {}", plural(report.uploaded.len(), "file", "files"));
    if report.failed.is_empty() {
        lines.push(summary);
    } else {
        lines.push(format!("{}, {} failed", summary, report.failed.len()));
    }
    lines
}

pub fn print_publish_report(report: &PublishReport) {
    for line in format_publish_report(report) {
        println!("{}", line);
    }
}
