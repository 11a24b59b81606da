//
//  foxnose-sdk
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common helpers shared by the Management and Flux clients.
//!
//! - [`Listing`] and [`Page`] for list responses (see [`pagination`])
//! - [`segment`] and [`PathBuilder`] for building request paths from
//!   caller-supplied identifiers

mod pagination;

pub use pagination::*;

/// Percent-encodes one path segment.
///
/// Identifiers are inserted into paths verbatim by the API, so characters
/// such as `/`, `?` or spaces must not leak into the path structure.
///
/// ```rust
/// use foxnose_sdk::api::common::segment;
///
/// assert_eq!(segment("blog-posts"), "blog-posts");
/// assert_eq!(segment("a/b c"), "a%2Fb%20c");
/// ```
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Builds a slash-separated path with encoded segments and a trailing slash.
///
/// ```rust
/// use foxnose_sdk::api::common::PathBuilder;
///
/// let path = PathBuilder::new("/v1/env")
///     .literal("folders")
///     .id("blog posts")
///     .literal("resources")
///     .build();
/// assert_eq!(path, "/v1/env/folders/blog%20posts/resources/");
/// ```
#[derive(Debug, Clone)]
pub struct PathBuilder {
    path: String,
}

impl PathBuilder {
    /// Starts from an already-encoded prefix such as `/v1/<env>`.
    pub fn new(prefix: &str) -> Self {
        Self {
            path: prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Appends a fixed segment as-is.
    pub fn literal(mut self, segment: &str) -> Self {
        self.path.push('/');
        self.path.push_str(segment.trim_matches('/'));
        self
    }

    /// Appends an identifier, percent-encoded.
    pub fn id(mut self, value: &str) -> Self {
        self.path.push('/');
        self.path.push_str(&segment(value));
        self
    }

    /// Appends a slash-separated path such as `blog/posts`, encoding each
    /// component and dropping empty ones.
    pub fn nested(mut self, value: &str) -> Self {
        for part in value.split('/').filter(|p| !p.is_empty()) {
            self = self.id(part);
        }
        self
    }

    /// Finishes the path with a trailing slash.
    pub fn build(mut self) -> String {
        self.path.push('/');
        self.path
    }

    /// Finishes the path without a trailing slash.
    pub fn build_bare(self) -> String {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_encodes_reserved_characters() {
        assert_eq!(segment("key_1.v2~x"), "key_1.v2~x");
        assert_eq!(segment("a?b#c"), "a%3Fb%23c");
    }

    #[test]
    fn test_path_builder() {
        let path = PathBuilder::new("/v1/env/")
            .literal("components")
            .id("c1")
            .literal("model/versions")
            .build();
        assert_eq!(path, "/v1/env/components/c1/model/versions/");

        let bare = PathBuilder::new("/v1").literal("articles").id("1/2").build_bare();
        assert_eq!(bare, "/v1/articles/1%2F2");

        let nested = PathBuilder::new("/v1").nested("/blog//posts/").literal("_search").build_bare();
        assert_eq!(nested, "/v1/blog/posts/_search");
    }
}
