//! Endpoint resolution for the message board REST API.

use url::Url;

use super::error::BoardError;

/// Collection path holding board comments.
const COMMENTS_PATH: &str = "comments";

/// Sort parameters baked into every list request (newest first).
const LIST_QUERY: [(&str, &str); 2] = [("_sort", "createdAt"), ("_order", "desc")];

/// Root of a message board API, validated once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEndpoint {
    base: Url,
}

impl BoardEndpoint {
    /// Parses and validates an API base URL.
    ///
    /// Only `http` and `https` URLs with a host are accepted. Query strings
    /// and fragments on the base are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidUrl`] when the input is not an absolute
    /// HTTP(S) URL.
    pub fn parse(input: &str) -> Result<Self, BoardError> {
        let mut base =
            Url::parse(input.trim()).map_err(|error| BoardError::InvalidUrl(error.to_string()))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(BoardError::InvalidUrl(format!(
                "unsupported scheme '{}' (expected http or https)",
                base.scheme()
            )));
        }
        if base.host_str().is_none() {
            return Err(BoardError::InvalidUrl("missing host".to_owned()));
        }

        base.set_query(None);
        base.set_fragment(None);
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }

        Ok(Self { base })
    }

    /// Returns the normalised base URL (always ending in `/`).
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// URL of the comments collection, used for creating messages.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidUrl`] if the path cannot be joined.
    pub fn comments_url(&self) -> Result<Url, BoardError> {
        self.base
            .join(COMMENTS_PATH)
            .map_err(|error| BoardError::InvalidUrl(error.to_string()))
    }

    /// URL listing comments newest first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidUrl`] if the path cannot be joined.
    pub fn list_url(&self) -> Result<Url, BoardError> {
        let mut url = self.comments_url()?;
        url.query_pairs_mut().extend_pairs(LIST_QUERY);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::BoardEndpoint;
    use crate::api::error::BoardError;

    #[rstest]
    #[case::bare_host(
        "https://student-json-api.lidemy.me",
        "https://student-json-api.lidemy.me/comments?_sort=createdAt&_order=desc"
    )]
    #[case::trailing_slash(
        "https://student-json-api.lidemy.me/",
        "https://student-json-api.lidemy.me/comments?_sort=createdAt&_order=desc"
    )]
    #[case::nested_path(
        "http://127.0.0.1:8080/api/v1",
        "http://127.0.0.1:8080/api/v1/comments?_sort=createdAt&_order=desc"
    )]
    #[case::query_is_dropped(
        "http://localhost:3000/?debug=1",
        "http://localhost:3000/comments?_sort=createdAt&_order=desc"
    )]
    fn list_url_appends_sort_parameters(#[case] base: &str, #[case] expected: &str) {
        let endpoint = BoardEndpoint::parse(base).expect("base URL should parse");
        let url = endpoint.list_url().expect("list URL should build");

        assert_eq!(url.as_str(), expected);
    }

    #[test]
    fn comments_url_has_no_query() {
        let endpoint =
            BoardEndpoint::parse("https://student-json-api.lidemy.me").expect("should parse");
        let url = endpoint.comments_url().expect("comments URL should build");

        assert_eq!(url.as_str(), "https://student-json-api.lidemy.me/comments");
        assert!(url.query().is_none());
    }

    #[rstest]
    #[case::not_a_url("not a url")]
    #[case::ftp_scheme("ftp://example.com/board")]
    #[case::empty("")]
    fn parse_rejects_invalid_bases(#[case] input: &str) {
        let result = BoardEndpoint::parse(input);

        assert!(
            matches!(result, Err(BoardError::InvalidUrl(_))),
            "expected InvalidUrl for {input:?}, got {result:?}"
        );
    }
}
