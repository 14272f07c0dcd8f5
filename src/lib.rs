//! # Recipe Site
//!
//! A static site generator for a folder of markdown recipes. Every `.md` file
//! becomes a page, an index lists them all, and any element whose whole text
//! is another recipe's title becomes a link to it. The finished site can be
//! uploaded to an S3-compatible bucket.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Scan      recipes/  →  Site             (files → titles, tags, bodies)
//! 2. Generate  Site      →  dist/            (final HTML site)
//! 3. Publish   dist/     →  bucket           (only with --bucket)
//! ```
//!
//! The [`types::Site`] is built once by the scan stage and only borrowed by
//! the others.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — reads the recipe directory into a [`types::Site`] |
//! | [`generate`] | Stage 2 — renders the index and recipe pages with Maud |
//! | [`publish`] | Stage 3 — uploads the output directory through a worker pool |
//! | [`frontmatter`] | `---` block splitting and YAML parsing |
//! | [`markdown`] | Markdown → HTML with heading anchors |
//! | [`links`] | Cross-recipe link rewriting on rendered HTML |
//! | [`config`] | Optional `config.toml`: site title, colors, publish settings |
//! | [`types`] | `Recipe`, `Site` and its builder |
//! | [`naming`] | Slug, default title, and anchor id rules |
//! | [`output`] | CLI output formatting for each stage |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Titles and tags are escaped automatically; recipe bodies are
//! rendered markdown and are inserted as is.
//!
//! ## Links On Rendered HTML
//!
//! Cross-linking runs after markdown rendering and only matches an element's
//! complete text (`>Title<`). A passing mention inside a sentence is never
//! turned into a link, and the rewrite can safely be applied twice.

pub mod config;
pub mod frontmatter;
pub mod generate;
pub mod links;
pub mod logging;
pub mod markdown;
pub mod naming;
pub mod output;
pub mod publish;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
