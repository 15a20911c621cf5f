use booklink::locator::{self, RoutingMode};
use booklink::{token, Book, Locator, TokenError};

use proptest::prelude::*;

fn is_url_safe(token: &str) -> bool {
    token
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b"-_.~%".contains(&b))
}

fn non_empty() -> impl Strategy<Value = String> {
    any::<String>().prop_filter("required fields are not empty", |s| !s.is_empty())
}

prop_compose! {
    fn valid_book()(
        title in non_empty(),
        author in non_empty(),
        content in non_empty(),
        font in proptest::option::of(any::<String>()),
        theme in proptest::option::of(any::<String>()),
    ) -> Book {
        let mut book = Book::new(title, author, content);
        if let Some(font) = font {
            book = book.with_font(font);
        }
        if let Some(theme) = theme {
            book = book.with_theme(theme);
        }
        book
    }
}

proptest! {
    #[test]
    fn round_trip(book in valid_book()) {
        prop_assert_eq!(token::decode(&token::encode(&book)), Ok(book));
    }

    #[test]
    fn tokens_are_url_safe(title in ".*", author in ".*", content in "\\PC*") {
        let token = token::encode(&Book::new(title, author, content));
        prop_assert!(is_url_safe(&token), "{}", token);
    }

    #[test]
    fn locators_round_trip(book in valid_book()) {
        for mode in [RoutingMode::Path, RoutingMode::Fragment] {
            let url = locator::build(&book, "https://x", mode);
            prop_assert_eq!(locator::extract_token(&url, mode), Some(token::encode(&book)));
        }
    }

    #[test]
    fn garbage_never_panics(input in "\\PC*") {
        let _ = token::decode(&input);
        let _ = locator::extract_token(&input, RoutingMode::Path);
        let _ = locator::extract_token(&input, RoutingMode::Fragment);
    }
}

#[test]
fn special_characters_in_share_url() {
    let book = Book::new(
        "Test Book",
        "Test Author",
        "This is @ test book that conta!ns $pecial characters.",
    );

    for mode in [RoutingMode::Path, RoutingMode::Fragment] {
        let locator = Locator::new("https://x").with_routing(mode);
        let url = locator.share_url(&book);

        let token = locator.token_from(&url).unwrap();
        assert!(is_url_safe(&token));
        assert_eq!(token, book.to_token());
        assert_eq!(Book::from_token(&token).unwrap(), book);
    }
}

#[test]
fn absent_token_is_not_an_error() {
    assert_eq!(locator::extract_token("https://x/read", RoutingMode::Path), None);

    let locator = Locator::new("https://x").with_routing(RoutingMode::Path);
    assert_eq!(locator.read("https://x/read"), Ok(None));
    assert_eq!(locator.read("not a url"), Ok(None));
}

#[test]
fn corrupted_token_in_url() {
    let locator = Locator::new("https://x");
    assert_eq!(locator.routing(), RoutingMode::Fragment);

    let result = locator.read("https://x/#/read?book=invalid_d@ta");
    assert!(matches!(result, Err(TokenError::InvalidBook(_))));

    let result = "invalid_d@ta".parse::<Book>();
    assert!(matches!(result, Err(TokenError::InvalidBook(_))));
}

#[test]
fn error_message() {
    let err = token::decode("invalid_d@ta").unwrap_err();
    assert_eq!(err.to_string(), "Invalid book data: invalid base64 data.");
}
