//! Inputs the hosting page supplies for one load.

use url::Url;

use super::TocError;

/// Where the widget is being shown from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    location: Url,
    base: Url,
    path_to_root: String,
}

impl PageContext {
    /// The document base defaults to the location, as in a page without `<base>`.
    pub fn new(location: &str, path_to_root: impl Into<String>) -> Result<Self, TocError> {
        let location = parse_url(location)?;
        Ok(Self {
            base: location.clone(),
            location,
            path_to_root: path_to_root.into(),
        })
    }

    pub fn with_base_uri(mut self, base: &str) -> Result<Self, TocError> {
        self.base = parse_url(base)?;
        Ok(self)
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn path_to_root(&self) -> &str {
        &self.path_to_root
    }

    /// Location without fragment; a directory URL points at its index document.
    pub fn current_page(&self, index_document: &str) -> String {
        let mut url = self.location.clone();
        url.set_fragment(None);
        let mut page = url.to_string();
        if page.ends_with('/') {
            page.push_str(index_document);
        }
        page
    }
}

fn parse_url(url: &str) -> Result<Url, TocError> {
    Url::parse(url).map_err(|source| TocError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_page_strips_fragment() {
        let page = PageContext::new("https://book.example/src/a.html#usage", "../").unwrap();
        assert_eq!(page.current_page("index.html"), "https://book.example/src/a.html");
    }

    #[test]
    fn test_directory_url_points_at_index() {
        let page = PageContext::new("https://book.example/src/#top", "../").unwrap();
        assert_eq!(
            page.current_page("index.html"),
            "https://book.example/src/index.html"
        );

        let root = PageContext::new("https://book.example", "").unwrap();
        assert_eq!(root.current_page("index.html"), "https://book.example/index.html");
    }

    #[test]
    fn test_query_is_kept() {
        let page = PageContext::new("https://book.example/a.html?search=x#h", "").unwrap();
        assert_eq!(
            page.current_page("index.html"),
            "https://book.example/a.html?search=x"
        );
    }

    #[test]
    fn test_base_defaults_to_location() {
        let page = PageContext::new("https://book.example/src/a.html", "../").unwrap();
        assert_eq!(page.base(), page.location());

        let page = page.with_base_uri("https://book.example/").unwrap();
        assert_eq!(page.base().as_str(), "https://book.example/");
        assert_eq!(page.path_to_root(), "../");
    }

    #[test]
    fn test_invalid_location() {
        let err = PageContext::new("not a url", "").unwrap_err();
        assert!(matches!(err, TocError::InvalidUrl { .. }));
    }
}
