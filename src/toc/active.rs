//! Active-path resolution.
//!
//! Finds the entry for the page being shown, marks it active and expands
//! every section on the way up so it is visible.

use super::page::PageContext;
use super::tree::{EntryId, RenderedTree};

/// Mark the entry matching the current page and its ancestors.
///
/// Marks left by a previous resolution are cleared first, including
/// expansion. Links must already be normalized. Matching is exact string equality on
/// resolved URLs; the first match in document order wins. Returns `None`
/// (nothing marked) when the page is not in the tree.
pub fn resolve_active(
    tree: &mut RenderedTree,
    page: &PageContext,
    index_document: &str,
) -> Option<EntryId> {
    for entry in tree.entries_mut() {
        entry.is_active = false;
        entry.is_expanded = false;
    }

    let current = page.current_page(index_document);
    let active = tree
        .iter()
        .find(|(_, e)| e.resolved.as_deref() == Some(current.as_str()))
        .map(|(id, _)| id)
        .or_else(|| root_alias(tree, page, &current, index_document));

    match active {
        Some(id) => {
            mark_active_path(tree, id);
            tracing::debug!(
                "Active TOC entry for {}: {:?}",
                current,
                tree.get(id).map(|e| e.label.as_str())
            );
        }
        None => tracing::debug!("No TOC entry matches {}", current),
    }
    active
}

/// The book's root index page aliases the first chapter.
fn root_alias(
    tree: &RenderedTree,
    page: &PageContext,
    current: &str,
    index_document: &str,
) -> Option<EntryId> {
    if !page.path_to_root().is_empty() {
        return None;
    }
    if !current.ends_with(&format!("/{index_document}")) {
        return None;
    }
    // Pure headers carry no link, so the first linked entry stands in for the root
    tree.iter().find(|(_, e)| e.is_link()).map(|(id, _)| id)
}

fn mark_active_path(tree: &mut RenderedTree, id: EntryId) {
    let ancestors: Vec<EntryId> = tree.ancestors(id).collect();

    if let Some(entry) = tree.get_mut(id) {
        entry.is_active = true;
        // An active chapter that has sub-chapters shows them
        if entry.is_section() {
            entry.is_expanded = true;
        }
    }

    for ancestor in ancestors {
        if let Some(section) = tree.get_mut(ancestor) {
            section.is_expanded = true;
        }
    }
}
