//! Browser glue for the mount phase (wasm32 only).

use wasm_bindgen::JsValue;
use web_sys::{ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::session::ScrollRestore;
use crate::toc::PageContext;

/// Read location, document base URI and the page's `path_to_root` global.
pub fn page_context() -> Option<PageContext> {
    let window = web_sys::window()?;
    let location = window.location().href().ok()?;

    // Set by the hosting page before the widget loads
    let path_to_root = js_sys::Reflect::get(&window, &JsValue::from_str("path_to_root"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();

    let page = match PageContext::new(&location, path_to_root) {
        Ok(page) => page,
        Err(e) => {
            tracing::warn!("Sidebar disabled: {}", e);
            return None;
        }
    };

    let base = window.document().and_then(|d| d.base_uri().ok().flatten());
    match base {
        Some(base) => match page.clone().with_base_uri(&base) {
            Ok(page) => Some(page),
            Err(e) => {
                tracing::warn!("Ignoring document base: {}", e);
                Some(page)
            }
        },
        None => Some(page),
    }
}

pub fn scroll_top(container_id: &str) -> i32 {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
        .map(|el| el.scroll_top())
        .unwrap_or(0)
}

/// Position the scroll container as planned at mount.
pub fn apply_scroll(container_id: &str, restore: ScrollRestore) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(container) = document.get_element_by_id(container_id) else {
        return;
    };

    match restore {
        ScrollRestore::Offset(offset) => container.set_scroll_top(offset),
        ScrollRestore::CenterOn(id) => {
            let selector = format!("[data-entry=\"{}\"]", id);
            if let Ok(Some(entry)) = container.query_selector(&selector) {
                let options = ScrollIntoViewOptions::new();
                options.set_block(ScrollLogicalPosition::Center);
                entry.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
        ScrollRestore::Stay => {}
    }
}
