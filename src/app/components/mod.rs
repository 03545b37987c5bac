//! Sidebar UI components.

pub mod scrollbox;
pub mod toc_list;

pub use scrollbox::SidebarScrollbox;
pub use toc_list::{TocItem, TocList};
