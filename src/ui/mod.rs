//! Preview pages rendered server-side.
//!
//! Serves an HTML page for any path in the book with the sidebar rendered
//! for that path, so active/expanded resolution can be checked without a
//! wasm build. Book content itself is not served.

use axum::{
    extract::State,
    http::{header::HOST, HeaderMap, Uri},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use dioxus::prelude::*;
use std::sync::Arc;

use crate::app::components::SidebarScrollbox;
use crate::sidebar::{Sidebar, SidebarState};
use crate::toc::{NavigationNode, PageContext};

/// Shared state for the preview handlers
#[derive(Clone)]
pub struct PreviewState {
    sidebar: Arc<Sidebar>,
}

impl PreviewState {
    pub fn new(sidebar: Sidebar) -> Self {
        Self {
            sidebar: Arc::new(sidebar),
        }
    }
}

pub fn router(state: PreviewState) -> Router {
    Router::new()
        .route("/toc.json", get(toc_handler))
        .fallback(preview_page)
        .with_state(state)
}

/// GET /toc.json - the loaded table of contents
pub async fn toc_handler(State(state): State<PreviewState>) -> Json<Vec<NavigationNode>> {
    Json(state.sidebar.toc().to_vec())
}

/// GET /<path> - preview page with the sidebar resolved for `<path>`
pub async fn preview_page(
    State(state): State<PreviewState>,
    headers: HeaderMap,
    uri: Uri,
) -> impl IntoResponse {
    let host = headers
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    let prefix = path_to_root(uri.path());
    let location = format!("http://{}{}", host, uri.path());

    let page = match PageContext::new(&location, prefix.clone()) {
        Ok(page) => page,
        Err(e) => {
            tracing::warn!("Cannot preview {}: {}", location, e);
            return Html(page_html("Invalid location", "", &prefix));
        }
    };

    let rendered = state.sidebar.render(&page);
    let title = rendered
        .active()
        .and_then(|id| rendered.tree().get(id))
        .map(|e| e.label.clone())
        .unwrap_or_else(|| "Not in table of contents".to_string());

    let sidebar_html = render_sidebar_html(&rendered);
    Html(page_html(&title, &sidebar_html, &prefix))
}

/// `../` once per directory level below the book root.
pub fn path_to_root(path: &str) -> String {
    let depth = path.trim_start_matches('/').matches('/').count();
    "../".repeat(depth)
}

/// Server-side render of the sidebar component.
pub fn render_sidebar_html(rendered: &SidebarState) -> String {
    let rendered = rendered.clone();
    dioxus::ssr::render_element(rsx! {
        SidebarScrollbox { rendered }
    })
}

fn page_html(title: &str, sidebar: &str, path_to_root: &str) -> String {
    let title = escape_html(title);
    let version = env!("TOC_SIDEBAR_VERSION");
    let git_sha = env!("TOC_SIDEBAR_GIT_SHA");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - TOC Sidebar Preview</title>
    <script>var path_to_root = "{path_to_root}";</script>
    <style>
        .sidebar-scrollbox {{ position: fixed; top: 0; bottom: 0; width: 300px; overflow-y: auto; }}
        ol.chapter, ol.section {{ list-style: none; padding-left: 1rem; }}
        li.chapter-item:not(.expanded) + li > ol.section {{ display: none; }}
        a.active {{ font-weight: bold; }}
        a.toggle {{ cursor: pointer; display: inline-block; margin-left: 0.5rem; }}
        li.chapter-item.expanded > a.toggle div {{ transform: rotate(90deg); }}
        li.part-title {{ font-weight: bold; margin-top: 1rem; }}
        main {{ margin-left: 320px; }}
    </style>
</head>
<body>
    <nav id="sidebar-nav">{sidebar}</nav>
    <main>
        <h1>{title}</h1>
        <small>toc-sidebar v{version} ({git_sha})</small>
    </main>
</body>
</html>"#
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_to_root_depth() {
        assert_eq!(path_to_root("/"), "");
        assert_eq!(path_to_root("/index.html"), "");
        assert_eq!(path_to_root("/src/a.html"), "../");
        assert_eq!(path_to_root("/src/"), "../");
        assert_eq!(path_to_root("/src/offchain/uma/index.html"), "../../../");
    }

    #[test]
    fn test_title_is_escaped() {
        let html = page_html("<Roles & constants>", "", "");
        assert!(html.contains("<h1>&lt;Roles &amp; constants&gt;</h1>"));
    }
}
