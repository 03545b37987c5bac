//! Static navigation tree as produced by the book build step.

use serde::{Deserialize, Serialize};

use super::TocError;

/// One entry of the table of contents: a page, or a section header.
///
/// A node without `href` exists purely for visual grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationNode {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationNode>,
}

impl NavigationNode {
    /// A page entry with no sub-chapters
    pub fn page(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            children: Vec::new(),
        }
    }

    /// A grouping header with no page of its own
    pub fn section(label: impl Into<String>, children: Vec<NavigationNode>) -> Self {
        Self {
            label: label.into(),
            href: None,
            children,
        }
    }

    pub fn with_children(mut self, children: Vec<NavigationNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_section(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Parse the embedded TOC document (a JSON array of top-level nodes).
pub fn parse_toc(json: &str) -> Result<Vec<NavigationNode>, TocError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_toc() {
        let json = r#"[
            {"label": "Home", "href": "index.html"},
            {"label": "src", "children": [
                {"label": "A", "href": "src/a.html"}
            ]}
        ]"#;

        let toc = parse_toc(json).unwrap();
        assert_eq!(
            toc,
            vec![
                NavigationNode::page("Home", "index.html"),
                NavigationNode::section("src", vec![NavigationNode::page("A", "src/a.html")]),
            ]
        );
        assert!(!toc[0].is_section());
        assert!(toc[1].is_section());
    }

    #[test]
    fn test_null_href_is_header() {
        let toc = parse_toc(r#"[{"label": "Part I", "href": null}]"#).unwrap();
        assert_eq!(toc[0].href, None);
        assert!(toc[0].children.is_empty());
    }

    #[test]
    fn test_malformed_toc_is_an_error() {
        let err = parse_toc(r#"{"label": "not a list"}"#).unwrap_err();
        assert!(matches!(err, TocError::Parse(_)));
    }
}
