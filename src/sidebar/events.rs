//! Messages the mounted sidebar reacts to.

use crate::toc::EntryId;

/// A click inside the sidebar, identified by its target entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    /// The toggle control of a section was clicked
    ToggleSection(EntryId),
    /// A link was clicked; the page is about to navigate away
    FollowLink { entry: EntryId, scroll_top: i32 },
}

/// Outside-world consequence of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEffect {
    /// Expanded/collapsed state changed
    Redraw,
    /// Store the scroll offset for the next page load
    PersistScroll(i32),
}
