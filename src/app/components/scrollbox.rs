//! Scrollable sidebar container.

use dioxus::prelude::*;

use super::toc_list::TocList;
use crate::sidebar::SidebarState;

#[derive(Props, Clone, PartialEq)]
pub struct SidebarScrollboxProps {
    /// Sidebar rendered for the current page
    pub rendered: SidebarState,
}

/// Renders the whole table of contents with the current page marked.
///
/// The stored scroll offset is consumed in the mount effect, which only
/// runs in the browser.
#[component]
pub fn SidebarScrollbox(props: SidebarScrollboxProps) -> Element {
    let state = use_signal(|| props.rendered.clone());

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            let mut store = crate::session::open_session_store();
            let current = state.peek();
            let restore = current.restore_scroll(store.as_mut());
            crate::app::dom::apply_scroll(&current.config().container_id, restore);
        });
    }

    let roots = state.read().tree().roots().to_vec();
    let container_id = props.rendered.config().container_id.clone();

    rsx! {
        div { id: "{container_id}", class: "sidebar-scrollbox",
            TocList { ids: roots, class: "chapter", state }
        }
    }
}
