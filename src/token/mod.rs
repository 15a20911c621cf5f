//! _Tokens_ are the URL-safe representation of a [`Book`].
//!
//! # Token Format
//!
//! The format is stable. Links shared with previous versions must be loaded
//! by newer ones.
//!
//! * The book is serialized as a compact JSON object, with the keys `title`,
//!   `author`, `content`, `font`, and `theme`, in that order. `font` and
//!   `theme` are omitted when they are not set.
//! * The UTF-8 bytes of the JSON text are encoded with the standard base64
//!   alphabet, with `=` padding.
//! * Every character of the base64 text outside `A-Za-z0-9-_.~` is
//!   percent-encoded (`+`, `/`, and `=`).
//!
//! Then, a token always matches `[A-Za-z0-9\-_.~%]*`.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;

use crate::Book;

mod escape;


/// Errors from [`decode`].
///
/// The token can be corrupted or incomplete, or it can contain a book without
/// the required fields. In both cases the same variant is returned, and the
/// message describes the problem.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum Error {
    #[error("Invalid book data: {0}.")]
    InvalidBook(String),
}

/// Book fields as found in the JSON payload, before validation.
///
/// Unknown keys are ignored. It is only read from a JSON object, never from a
/// JSON array.
#[derive(Deserialize)]
struct Payload {
    title: Option<String>,
    author: Option<String>,
    content: Option<String>,
    font: Option<String>,
    theme: Option<String>,
}

/// Encode a book as a token.
///
/// Any book can be encoded, even if it is not [valid](Book::is_valid).
pub fn encode(book: &Book) -> String {
    // `Book` only contains strings, so the serializer never fails.
    let json = match serde_json::to_string(book) {
        Ok(json) => json,
        Err(_) => unreachable!("strings are always serializable"),
    };

    escape::escape(&BASE64.encode(json))
}

/// Decode a book from a token generated by [`encode`].
///
/// The returned book is always [valid](Book::is_valid).
pub fn decode(token: &str) -> Result<Book, Error> {
    let base64_text = escape::unescape(token).map_err(|e| reject("invalid escape sequence", e))?;

    let json = BASE64
        .decode(base64_text.as_bytes())
        .map_err(|e| reject("invalid base64 data", e))?;

    // The payload must be a JSON object. If a key is repeated, the last value
    // is used.
    let fields: serde_json::Map<String, serde_json::Value> =
        serde_json::from_slice(&json).map_err(|e| reject("malformed book structure", e))?;

    let payload: Payload = serde_json::from_value(serde_json::Value::Object(fields))
        .map_err(|e| reject("malformed book structure", e))?;

    payload.into_book()
}

impl Payload {
    fn into_book(self) -> Result<Book, Error> {
        macro_rules! required {
            ($field:ident) => {
                match self.$field {
                    Some(s) if !s.is_empty() => s,
                    _ => {
                        return Err(reject(
                            concat!("missing ", stringify!($field)),
                            concat!("`", stringify!($field), "` is absent or empty"),
                        ))
                    }
                }
            };
        }

        Ok(Book {
            title: required!(title),
            author: required!(author),
            content: required!(content),
            font: self.font,
            theme: self.theme,
        })
    }
}

/// Log the cause of a decoding failure, and build the error for the caller.
fn reject(reason: &str, cause: impl fmt::Display) -> Error {
    tracing::warn!(error = %cause, reason, "Failed to decode book token");
    Error::InvalidBook(reason.to_owned())
}
