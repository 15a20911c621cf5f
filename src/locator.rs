//! Share URLs.
//!
//! A share URL (or _locator_) contains a single token in the `book` query
//! parameter. The position of the query depends on how the web application
//! routes its pages:
//!
//! * [`RoutingMode::Path`]: `{base}/read?book={token}`
//! * [`RoutingMode::Fragment`]: `{base}/#/read?book={token}`

use std::fmt;
use std::str::FromStr;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::{token, Book};

/// Name of the query parameter with the token.
pub const BOOK_PARAM: &str = "book";

/// Route of the reader page.
const READ_ROUTE: &str = "read";

/// Where the reader route lives in the URL.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RoutingMode {
    /// The route is the URL path, like `https://example.com/read?book=...`.
    Path,

    /// The route is in the URL fragment, like
    /// `https://example.com/#/read?book=...`.
    #[default]
    Fragment,
}

/// Error from parsing a [`RoutingMode`].
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
#[error("Invalid routing mode: {0:?}. Expected `path` or `hash`.")]
pub struct ParseRoutingModeError(String);

impl FromStr for RoutingMode {
    type Err = ParseRoutingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "path" | "history" => Ok(RoutingMode::Path),
            "hash" | "fragment" => Ok(RoutingMode::Fragment),
            _ => Err(ParseRoutingModeError(s.to_owned())),
        }
    }
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoutingMode::Path => "path",
            RoutingMode::Fragment => "hash",
        })
    }
}

/// Build a share URL for `book`.
///
/// `base_url` is used as is. It should not end with `/`.
pub fn build(book: &Book, base_url: &str, mode: RoutingMode) -> String {
    let token = token::encode(book);

    match mode {
        RoutingMode::Path => format!("{base_url}/{READ_ROUTE}?{BOOK_PARAM}={token}"),
        RoutingMode::Fragment => format!("{base_url}/#/{READ_ROUTE}?{BOOK_PARAM}={token}"),
    }
}

/// Extract the token from a share URL.
///
/// Returns `None` if the URL can't be parsed, or if it does not contain a
/// non-empty `book` parameter. If the parameter appears multiple times, the
/// first one is used.
///
/// The token is returned as it appears in the URL. Percent-escapes are
/// reversed by [`token::decode`].
pub fn extract_token(url: &str, mode: RoutingMode) -> Option<String> {
    let url = match Url::parse(url) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid share URL");
            return None;
        }
    };

    let query = match mode {
        RoutingMode::Path => url.query()?,
        RoutingMode::Fragment => url.fragment()?.split_once('?')?.1,
    };

    find_param(query, BOOK_PARAM)
}

/// Find the first `name` parameter in a query string.
fn find_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| percent_decode_str(key).decode_utf8_lossy() == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Share URLs for a single deployment of the web application.
///
/// ```
/// use booklink::{Book, Locator, RoutingMode};
///
/// let locator = Locator::new("https://books.example").with_routing(RoutingMode::Path);
///
/// let book = Book::new("Title", "Someone", "Content");
/// let url = locator.share_url(&book);
/// assert!(url.starts_with("https://books.example/read?book="));
///
/// assert_eq!(locator.read(&url), Ok(Some(book)));
/// assert_eq!(locator.read("https://books.example/read"), Ok(None));
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Locator {
    base_url: String,

    routing: RoutingMode,
}

impl Locator {
    /// Creates a new instance, with the default routing mode.
    pub fn new(base_url: impl Into<String>) -> Locator {
        Locator {
            base_url: base_url.into(),
            routing: RoutingMode::default(),
        }
    }

    /// Set the routing mode used by the web application.
    pub fn with_routing(mut self, routing: RoutingMode) -> Locator {
        self.routing = routing;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn routing(&self) -> RoutingMode {
        self.routing
    }

    /// Build a share URL for `book`. See [`build`].
    pub fn share_url(&self, book: &Book) -> String {
        build(book, &self.base_url, self.routing)
    }

    /// Extract the token from `url`. See [`extract_token`].
    pub fn token_from(&self, url: &str) -> Option<String> {
        extract_token(url, self.routing)
    }

    /// Load the book from a share URL.
    ///
    /// Returns `Ok(None)` if the URL does not contain a token, and an error
    /// if the token is invalid.
    pub fn read(&self, url: &str) -> Result<Option<Book>, token::Error> {
        self.token_from(url).map(|t| token::decode(&t)).transpose()
    }
}
