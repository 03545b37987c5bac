//! Arena of rendered entries for one page load.
//!
//! Entries are stored in document (preorder) order and addressed by
//! [`EntryId`]. Each entry keeps the index of its parent so the active-path
//! walk is O(depth) without back-references.

use std::fmt;

use super::node::NavigationNode;

/// Index of an entry inside a [`RenderedTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Live counterpart of a [`NavigationNode`] for the current page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub label: String,
    /// Link as it appears in the markup (after prefix rewriting)
    pub href: Option<String>,
    /// Absolute URL the link points at, resolved against the document base
    pub resolved: Option<String>,
    pub parent: Option<EntryId>,
    pub children: Vec<EntryId>,
    pub depth: usize,
    pub is_active: bool,
    pub is_expanded: bool,
}

impl RenderedEntry {
    /// Sections carry a toggle control; leaves never do.
    pub fn is_section(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_link(&self) -> bool {
        self.href.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedTree {
    entries: Vec<RenderedEntry>,
    roots: Vec<EntryId>,
}

impl RenderedTree {
    /// Materialize the static tree. Ordering and nesting mirror the input exactly.
    pub fn build(nodes: &[NavigationNode]) -> Self {
        let mut tree = Self::default();
        for node in nodes {
            let id = tree.push(node, None, 0);
            tree.roots.push(id);
        }
        tree
    }

    fn push(&mut self, node: &NavigationNode, parent: Option<EntryId>, depth: usize) -> EntryId {
        let id = EntryId(self.entries.len());
        self.entries.push(RenderedEntry {
            label: node.label.clone(),
            href: node.href.clone(),
            resolved: None,
            parent,
            children: Vec::with_capacity(node.children.len()),
            depth,
            is_active: false,
            is_expanded: false,
        });

        for child in &node.children {
            let child_id = self.push(child, Some(id), depth + 1);
            self.entries[id.0].children.push(child_id);
        }
        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&RenderedEntry> {
        self.entries.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: EntryId) -> Option<&mut RenderedEntry> {
        self.entries.get_mut(id.0)
    }

    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = &mut RenderedEntry> {
        self.entries.iter_mut()
    }

    /// Top-level entries in document order
    pub fn roots(&self) -> &[EntryId] {
        &self.roots
    }

    pub fn children(&self, id: EntryId) -> &[EntryId] {
        self.get(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    /// All entries in document order
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &RenderedEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (EntryId(i), e))
    }

    /// Walk from the parent of `id` up to the tree root.
    pub fn ancestors(&self, id: EntryId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(id).and_then(|e| e.parent),
        }
    }

    pub fn active(&self) -> Option<EntryId> {
        self.iter().find(|(_, e)| e.is_active).map(|(id, _)| id)
    }

    /// Look up the first entry with the given label (document order).
    pub fn find_by_label(&self, label: &str) -> Option<EntryId> {
        self.iter().find(|(_, e)| e.label == label).map(|(id, _)| id)
    }

    /// Flip a section's expanded flag. Returns the new state, or `None` if
    /// `id` is not a section.
    pub fn toggle(&mut self, id: EntryId) -> Option<bool> {
        let entry = self.get_mut(id)?;
        if !entry.is_section() {
            return None;
        }
        entry.is_expanded = !entry.is_expanded;
        Some(entry.is_expanded)
    }
}

pub struct Ancestors<'a> {
    tree: &'a RenderedTree,
    next: Option<EntryId>,
}

impl Iterator for Ancestors<'_> {
    type Item = EntryId;

    fn next(&mut self) -> Option<EntryId> {
        let current = self.next?;
        self.next = self.tree.get(current).and_then(|e| e.parent);
        Some(current)
    }
}
