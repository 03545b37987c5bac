//! Link normalization.
//!
//! Relative hrefs in the TOC are relative to the book root; pages deeper in
//! the tree prepend their path-to-root so the same tree works everywhere.

use regex::Regex;
use std::sync::LazyLock;

use super::page::PageContext;
use super::tree::RenderedTree;

/// `scheme://` or protocol-relative `//`
static EXTERNAL_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-z+]+:)?//").expect("valid link pattern"));

/// Same-site relative path (not absolute, not fragment-only)
pub fn is_relative_href(href: &str) -> bool {
    !href.starts_with('#') && !EXTERNAL_URL.is_match(href)
}

/// Prefix `href` with the path to root when it is relative; otherwise unchanged.
pub fn rewrite_href(path_to_root: &str, href: &str) -> String {
    if is_relative_href(href) {
        format!("{path_to_root}{href}")
    } else {
        href.to_string()
    }
}

/// Rewrite every link in place and resolve it against the document base.
pub fn normalize_links(tree: &mut RenderedTree, page: &PageContext) {
    for entry in tree.entries_mut() {
        let Some(href) = entry.href.as_deref() else {
            continue;
        };
        let href = rewrite_href(page.path_to_root(), href);
        entry.resolved = match page.base().join(&href) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                tracing::warn!("Unresolvable TOC link {:?}: {}", href, e);
                None
            }
        };
        entry.href = Some(href);
    }
}
