//! Sidebar scroll offset carried across one navigation.
//!
//! A click on a sidebar link stores the container's offset; the next page
//! load takes it (read, then delete) and restores it. Without a stored offset
//! the active entry is centered instead.

use super::SessionStore;
use crate::toc::EntryId;

/// What the mount phase should do with the scroll container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRestore {
    /// Restore the offset saved by the previous page
    Offset(i32),
    /// Scroll the entry into the vertical center
    CenterOn(EntryId),
    /// Nothing stored and nothing active
    Stay,
}

pub fn save_scroll(store: &mut dyn SessionStore, key: &str, offset: i32) {
    if let Err(e) = store.set_item(key, &offset.to_string()) {
        tracing::debug!("Could not save sidebar scroll offset: {}", e);
    }
}

/// Read the stored offset and clear the slot. The slot is cleared even when
/// it was empty or unparseable.
pub fn take_scroll(store: &mut dyn SessionStore, key: &str) -> Option<i32> {
    let stored = match store.get_item(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Session storage unreadable: {}", e);
            None
        }
    };
    if let Err(e) = store.remove_item(key) {
        tracing::debug!("Could not clear sidebar scroll offset: {}", e);
    }

    let value = stored?;
    let offset = parse_offset(&value);
    if offset.is_none() {
        tracing::warn!("Discarding unparseable sidebar scroll offset {:?}", value);
    }
    offset
}

/// Decide how to position the sidebar on a fresh page load.
pub fn plan_restore(
    store: &mut dyn SessionStore,
    key: &str,
    active: Option<EntryId>,
) -> ScrollRestore {
    match (take_scroll(store, key), active) {
        (Some(offset), _) => ScrollRestore::Offset(offset),
        (None, Some(id)) => ScrollRestore::CenterOn(id),
        (None, None) => ScrollRestore::Stay,
    }
}

// Browsers may report fractional offsets on high-DPI displays
fn parse_offset(value: &str) -> Option<i32> {
    let value = value.trim();
    value.parse::<i32>().ok().or_else(|| {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v.round() as i32)
    })
}
