//! Percent-encoding for the base64 text in a token.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters that are escaped in a token.
///
/// This is the same set used by `encodeURIComponent` in browsers, except
/// for `!'()*`. Those characters never appear in base64 text.
const TOKEN_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(thiserror::Error, Debug)]
pub(super) enum UnescapeError {
    #[error("Incomplete escape sequence at byte {0}")]
    Incomplete(usize),

    #[error("Invalid UTF-8 sequence: {0}")]
    Unicode(#[from] std::str::Utf8Error),
}

pub(super) fn escape(text: &str) -> String {
    utf8_percent_encode(text, TOKEN_ESCAPE).to_string()
}

/// Reverse [`escape`].
///
/// Every `%` must be followed by two hexadecimal digits.
pub(super) fn unescape(text: &str) -> Result<Cow<'_, str>, UnescapeError> {
    let bytes = text.as_bytes();
    for (pos, _) in text.match_indices('%') {
        let valid = bytes
            .get(pos + 1..pos + 3)
            .map_or(false, |hex| hex.iter().all(u8::is_ascii_hexdigit));

        if !valid {
            return Err(UnescapeError::Incomplete(pos));
        }
    }

    Ok(percent_decode_str(text).decode_utf8()?)
}

#[cfg(test)]
mod tests {
    use super::{escape, unescape, UnescapeError};

    #[test]
    fn escape_base64_symbols() {
        assert_eq!(escape("ab+/cd=="), "ab%2B%2Fcd%3D%3D");
        assert_eq!(escape("A-Z_a.z~09"), "A-Z_a.z~09");
    }

    #[test]
    fn unescape_sequences() {
        assert_eq!(unescape("ab%2B%2fcd%3D%3D").unwrap(), "ab+/cd==");
        assert_eq!(unescape("plain").unwrap(), "plain");
    }

    #[test]
    fn reject_incomplete_sequences() {
        assert!(matches!(unescape("abc%"), Err(UnescapeError::Incomplete(3))));
        assert!(matches!(unescape("%2"), Err(UnescapeError::Incomplete(0))));
        assert!(matches!(unescape("x%zz"), Err(UnescapeError::Incomplete(1))));
        assert!(matches!(unescape("%FF"), Err(UnescapeError::Unicode(_))));
    }
}
