//! Per-object HTTP metadata.
//!
//! Pages must always be revalidated so a re-publish shows up immediately;
//! everything else is served with a one-year cache lifetime.

use std::path::Path;

pub const CACHE_HTML: &str = "no-cache, no-store, must-revalidate";
pub const CACHE_ASSET: &str = "public, max-age=31536000";

/// Content type and cache control sent with one uploaded object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectHeaders {
    pub content_type: &'static str,
    pub cache_control: &'static str,
}

pub fn headers_for(path: &Path) -> ObjectHeaders {
    let is_html = path.extension().and_then(|e| e.to_str()) == Some("html");
    ObjectHeaders {
        content_type: content_type(path),
        cache_control: if is_html { CACHE_HTML } else { CACHE_ASSET },
    }
}

/// Content type from the file extension. Matching is case-sensitive.
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        // Web content
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",

        // Images
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",
        Some("md") => "text/markdown; charset=utf-8",

        _ => "application/octet-stream",
    }
}
