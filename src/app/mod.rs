//! Dioxus application entry point.
//!
//! The root component reads the page inputs (location, document base,
//! `path_to_root`) and the TOC embedded at build time, then mounts the
//! sidebar scrollbox.

use dioxus::prelude::*;

pub mod components;
#[cfg(target_arch = "wasm32")]
mod dom;

use crate::config::SidebarConfig;
use crate::sidebar::Sidebar;
use crate::toc::{parse_toc, NavigationNode, PageContext};
use components::SidebarScrollbox;

/// TOC emitted by the book build, embedded at compile time
const EMBEDDED_TOC: &str = include_str!("../../assets/toc.json");

/// Location used outside a browser (desktop shells, tests)
#[cfg(not(target_arch = "wasm32"))]
const FALLBACK_LOCATION: &str = "http://localhost/index.html";

/// Root app component
#[component]
pub fn App() -> Element {
    let rendered = use_hook(|| {
        let page = page_context()?;
        Some(Sidebar::new(embedded_toc(), SidebarConfig::default()).render(&page))
    });

    let Some(rendered) = rendered else {
        return rsx! {};
    };

    rsx! {
        SidebarScrollbox { rendered }
    }
}

/// The embedded TOC; a malformed document renders an empty sidebar.
pub fn embedded_toc() -> Vec<NavigationNode> {
    parse_toc(EMBEDDED_TOC).unwrap_or_else(|e| {
        tracing::warn!("Embedded TOC is malformed, rendering empty sidebar: {}", e);
        Vec::new()
    })
}

#[cfg(target_arch = "wasm32")]
fn page_context() -> Option<PageContext> {
    dom::page_context()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_context() -> Option<PageContext> {
    PageContext::new(FALLBACK_LOCATION, "").ok()
}

/// Current offset of the scroll container (0 outside a browser)
#[cfg(target_arch = "wasm32")]
pub(crate) fn container_scroll_top(container_id: &str) -> i32 {
    dom::scroll_top(container_id)
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn container_scroll_top(_container_id: &str) -> i32 {
    0
}
