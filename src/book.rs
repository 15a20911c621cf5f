//! Module with the `Book` type.

use std::str::FromStr;

use serde::Serialize;

use crate::token;

/// A short document that can be shared through a URL.
///
/// # Creating a New Book
///
/// ```
/// let book = booklink::Book::new("Title", "Someone", "Once upon a time…")
///     .with_theme("dark");
///
/// assert!(book.is_valid());
/// assert_eq!(book.theme(), Some("dark"));
/// ```
///
/// # Loading a Book
///
/// A book is loaded from a token, usually extracted from a share URL with
/// [`Locator::token_from`](crate::Locator::token_from):
///
/// ```
/// let book = booklink::Book::new("Title", "Someone", "Content");
/// let loaded: booklink::Book = book.to_token().parse().unwrap();
/// assert_eq!(loaded, book);
/// ```
///
/// The order of the fields is part of the wire format.
#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct Book {
    pub(crate) title: String,

    pub(crate) author: String,

    pub(crate) content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) font: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) theme: Option<String>,
}

impl Book {
    /// Creates a new book without font or theme.
    ///
    /// Empty strings are accepted here, but such a book will not be loaded
    /// back by [`decode`](crate::token::decode).
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Book {
        Book {
            title: title.into(),
            author: author.into(),
            content: content.into(),
            font: None,
            theme: None,
        }
    }

    /// Set the font used to render the book.
    pub fn with_font(mut self, font: impl Into<String>) -> Book {
        self.font = Some(font.into());
        self
    }

    /// Set the theme used to render the book.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Book {
        self.theme = Some(theme.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Return `true` if the title, the author, and the content are not empty.
    ///
    /// Only valid books can be decoded from a token.
    pub fn is_valid(&self) -> bool {
        !(self.title.is_empty() || self.author.is_empty() || self.content.is_empty())
    }

    /// Encode this book as a URL-safe token.
    ///
    /// See [`token::encode`].
    pub fn to_token(&self) -> String {
        token::encode(self)
    }

    /// Load a book from a token generated by [`to_token`](Self::to_token).
    pub fn from_token(token: &str) -> Result<Book, token::Error> {
        token::decode(token)
    }
}

impl FromStr for Book {
    type Err = token::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        token::decode(s)
    }
}
