//! Table of contents model: the static tree, its rendered arena, link
//! normalization and active-path resolution.

pub mod active;
pub mod links;
pub mod node;
pub mod page;
pub mod tree;

pub use active::resolve_active;
pub use links::{is_relative_href, normalize_links, rewrite_href};
pub use node::{parse_toc, NavigationNode};
pub use page::PageContext;
pub use tree::{EntryId, RenderedEntry, RenderedTree};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TocError {
    #[error("invalid table of contents: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid page url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
