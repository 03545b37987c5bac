//! Sidebar lifecycle.
//!
//! [`Sidebar::new`] only captures the static tree. [`Sidebar::render`] builds
//! the rendered tree for one page (normalize links, resolve the active path)
//! and [`Sidebar::mount`] additionally consumes the stored scroll offset.
//! After mounting, the widget reacts to [`SidebarEvent`]s one at a time.

pub mod events;

pub use events::{SidebarEffect, SidebarEvent};

use crate::config::SidebarConfig;
use crate::session::scroll::{plan_restore, save_scroll, ScrollRestore};
use crate::session::SessionStore;
use crate::toc::{normalize_links, resolve_active, EntryId, NavigationNode, PageContext, RenderedTree};

/// The widget before it is attached to a page
#[derive(Debug, Clone, PartialEq)]
pub struct Sidebar {
    toc: Vec<NavigationNode>,
    config: SidebarConfig,
}

impl Sidebar {
    pub fn new(toc: Vec<NavigationNode>, config: SidebarConfig) -> Self {
        Self { toc, config }
    }

    pub fn toc(&self) -> &[NavigationNode] {
        &self.toc
    }

    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    /// Render → normalize links → resolve the active path. No external effects.
    pub fn render(&self, page: &PageContext) -> SidebarState {
        let mut tree = RenderedTree::build(&self.toc);
        normalize_links(&mut tree, page);
        let active = resolve_active(&mut tree, page, &self.config.index_document);

        SidebarState {
            tree,
            active,
            config: self.config.clone(),
        }
    }

    /// Render, then take the scroll offset left by the previous page.
    pub fn mount(
        &self,
        page: &PageContext,
        store: &mut dyn SessionStore,
    ) -> (SidebarState, ScrollRestore) {
        let state = self.render(page);
        let restore = state.restore_scroll(store);
        (state, restore)
    }
}

/// Rendered sidebar for the current page load
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarState {
    tree: RenderedTree,
    active: Option<EntryId>,
    config: SidebarConfig,
}

impl SidebarState {
    pub fn tree(&self) -> &RenderedTree {
        &self.tree
    }

    pub fn active(&self) -> Option<EntryId> {
        self.active
    }

    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    /// Consume the stored offset (read once, then cleared).
    pub fn restore_scroll(&self, store: &mut dyn SessionStore) -> ScrollRestore {
        plan_restore(store, &self.config.scroll_key, self.active)
    }

    /// Apply an event to the UI state. Pure: effects on the outside world are
    /// returned, not performed.
    pub fn handle(&mut self, event: SidebarEvent) -> Option<SidebarEffect> {
        match event {
            SidebarEvent::ToggleSection(id) => {
                let expanded = self.tree.toggle(id)?;
                tracing::debug!("Section {} {}", id, if expanded { "expanded" } else { "collapsed" });
                Some(SidebarEffect::Redraw)
            }
            SidebarEvent::FollowLink { entry, scroll_top } => {
                // Only real links navigate away
                let is_link = self.tree.get(entry).is_some_and(|e| e.is_link());
                is_link.then_some(SidebarEffect::PersistScroll(scroll_top))
            }
        }
    }

    /// [`handle`](Self::handle) plus performing any storage effect. Returns
    /// whether the tree needs to be redrawn.
    pub fn dispatch(&mut self, event: SidebarEvent, store: &mut dyn SessionStore) -> bool {
        match self.handle(event) {
            Some(SidebarEffect::Redraw) => true,
            Some(SidebarEffect::PersistScroll(offset)) => {
                save_scroll(store, &self.config.scroll_key, offset);
                false
            }
            None => false,
        }
    }
}
