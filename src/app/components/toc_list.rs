//! Nested chapter list.
//!
//! Markup follows the mdBook sidebar conventions (`ol.chapter`,
//! `li.chapter-item.expanded`, `a.active`, `a.toggle`) so book stylesheets
//! apply unchanged. Collapsed sections stay in the markup; CSS hides them.

use dioxus::prelude::*;

use crate::app::container_scroll_top;
use crate::session::open_session_store;
use crate::sidebar::{SidebarEvent, SidebarState};
use crate::toc::EntryId;

#[derive(Props, Clone, PartialEq)]
pub struct TocListProps {
    pub ids: Vec<EntryId>,
    /// `chapter` for the top level, `section` below
    pub class: &'static str,
    pub state: Signal<SidebarState>,
}

#[component]
pub fn TocList(props: TocListProps) -> Element {
    let state = props.state;

    rsx! {
        ol { class: props.class,
            for id in props.ids.iter().copied() {
                TocItem { key: "{id}", id, state }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TocItemProps {
    pub id: EntryId,
    pub state: Signal<SidebarState>,
}

/// One entry, followed by its nested list when it is a section.
#[component]
pub fn TocItem(props: TocItemProps) -> Element {
    let id = props.id;
    let mut state = props.state;

    let (entry, glyph, container_id) = {
        let current = state.read();
        (
            current.tree().get(id).cloned(),
            current.config().toggle_glyph.clone(),
            current.config().container_id.clone(),
        )
    };
    let Some(entry) = entry else {
        return rsx! {};
    };

    let label = entry.label.clone();
    if !entry.is_link() && !entry.is_section() {
        return rsx! {
            li { class: "part-title", "{label}" }
        };
    }

    let is_link = entry.is_link();
    let is_section = entry.is_section();
    let href = entry.href.clone().unwrap_or_default();
    let item_class = if entry.is_expanded {
        "chapter-item expanded"
    } else {
        "chapter-item"
    };
    let link_class = if entry.is_active { "active" } else { "" };
    let children = entry.children.clone();

    rsx! {
        li { class: item_class,
            if is_link {
                a {
                    href: "{href}",
                    class: link_class,
                    "data-entry": "{id}",
                    // Navigation proceeds; only the offset is recorded
                    onclick: move |_| {
                        let scroll_top = container_scroll_top(&container_id);
                        let mut store = open_session_store();
                        state
                            .write()
                            .dispatch(SidebarEvent::FollowLink { entry: id, scroll_top }, store.as_mut());
                    },
                    "{label}"
                }
            } else {
                div { "{label}" }
            }
            if is_section {
                a {
                    class: "toggle",
                    onclick: move |_| {
                        state.write().handle(SidebarEvent::ToggleSection(id));
                    },
                    div { "{glyph}" }
                }
            }
        }
        if is_section {
            li {
                TocList { ids: children, class: "section", state }
            }
        }
    }
}
