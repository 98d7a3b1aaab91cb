//! Outgoing request description.

use std::collections::HashMap;

/// A GET request being assembled. The storefront only ever reads from the
/// backend.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    /// The fully resolved URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_headers() {
        let req = RequestBuilder::new("http://shop.test/api/products")
            .accept("application/json")
            .header("X-Client", "storefront");

        assert_eq!(req.url(), "http://shop.test/api/products");
        assert_eq!(req.headers.get("Accept").map(String::as_str), Some("application/json"));
        assert_eq!(req.headers.len(), 2);
    }

    #[test]
    fn test_later_header_replaces_earlier() {
        let req = RequestBuilder::new("http://shop.test")
            .accept("text/html")
            .accept("application/json");
        assert_eq!(req.headers.get("Accept").map(String::as_str), Some("application/json"));
    }
}
