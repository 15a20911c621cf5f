//! Booklink.
//!
//! Share short books through URLs. The whole book is stored in the URL, so
//! no server-side storage is needed.
//!
//! A [`Book`] is encoded as a URL-safe token (see [`token`] for the format),
//! and the token is placed in a share URL by a [`Locator`].
//!
//! ```
//! use booklink::{Book, Locator};
//!
//! let locator = Locator::new("https://books.example");
//!
//! let book = Book::new("A Title", "An Author", "Some content.").with_font("serif");
//! let url = locator.share_url(&book);
//!
//! assert_eq!(locator.read(&url).unwrap(), Some(book));
//! ```

mod book;

pub mod locator;
pub mod token;

pub use book::Book;
pub use locator::{Locator, RoutingMode};
pub use token::Error as TokenError;
