//! TOC Sidebar
//!
//! Client-side table-of-contents widget for generated documentation books.
//!
//! This library provides:
//! - The rendered navigation tree (arena of entries with parent links)
//! - Link normalization against the page's path to the book root
//! - Active-path resolution (current page plus expanded ancestor sections)
//! - Session-scoped scroll offset carried across sidebar navigations
//! - Dioxus components for the browser, and a server-side preview host

pub mod app;
pub mod config;
pub mod session;
pub mod sidebar;
pub mod toc;
#[cfg(feature = "server")]
pub mod ui;
