//! Property-based tests for the validated value types.
//!
//! These tests verify that every string a generator deems valid parses
//! successfully, that parsing is idempotent, and that the documented
//! rejection rules hold for arbitrary out-of-range inputs.

use proptest::prelude::*;

use tagmark::types::bookmark::{
    BookmarkTag, BookmarkTitle, BookmarkUrl, TAG_MAX_LENGTH, TITLE_MAX_LENGTH,
};

/// Strategy for generating valid URL strings.
/// Produces URLs with http/https scheme, alphanumeric host, and optional path.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

/// Strategy for generating titles that are within the length limit and
/// carry no surrounding whitespace.
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,47}[a-zA-Z0-9]"
}

/// Strategy for generating valid tag strings.
fn arb_tag() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,19}"
}

proptest! {
    #[test]
    fn valid_urls_parse_and_preserve_the_raw_string(url in arb_url()) {
        let parsed = BookmarkUrl::parse(&url);
        prop_assert!(parsed.is_ok(), "should accept {:?}", url);
        let parsed = parsed.unwrap();
        prop_assert_eq!(parsed.as_str(), url.as_str());
    }

    #[test]
    fn non_http_schemes_are_rejected(
        scheme in prop_oneof![Just("ftp"), Just("file"), Just("ws"), Just("gopher")],
        host in "[a-z]{3,10}",
    ) {
        let raw = format!("{}://{}.com", scheme, host);
        let result = BookmarkUrl::parse(&raw);
        prop_assert!(result.is_err(), "should reject {:?}", raw);
        let err = result.unwrap_err();
        prop_assert_eq!(err.issues()[0].field.as_str(), "url");
    }

    #[test]
    fn valid_titles_parse_unchanged(title in arb_title()) {
        let parsed = BookmarkTitle::parse(&title);
        prop_assert!(parsed.is_ok(), "should accept {:?}", title);
        let parsed = parsed.unwrap();
        prop_assert_eq!(parsed.as_str(), title.as_str());
    }

    #[test]
    fn padded_titles_parse_to_their_trimmed_form(
        title in arb_title(),
        pad in "[ \t]{1,4}",
    ) {
        let raw = format!("{}{}{}", pad, title, pad);
        let parsed = BookmarkTitle::parse(&raw).unwrap();
        prop_assert_eq!(parsed.as_str(), title.as_str());
    }

    #[test]
    fn over_length_titles_are_rejected(extra in 1usize..30) {
        let raw = "a".repeat(TITLE_MAX_LENGTH + extra);
        let result = BookmarkTitle::parse(&raw);
        prop_assert!(result.is_err());
        let err = result.unwrap_err();
        prop_assert_eq!(err.issues()[0].field.as_str(), "title");
    }

    #[test]
    fn whitespace_only_titles_are_rejected(raw in "[ \t]{0,10}") {
        prop_assert!(BookmarkTitle::parse(&raw).is_err());
    }

    #[test]
    fn valid_tags_parse_unchanged(tag in arb_tag()) {
        let parsed = BookmarkTag::parse(&tag);
        prop_assert!(parsed.is_ok(), "should accept {:?}", tag);
        let parsed = parsed.unwrap();
        prop_assert_eq!(parsed.as_str(), tag.as_str());
    }

    #[test]
    fn over_length_tags_are_rejected(extra in 1usize..30) {
        let raw = "t".repeat(TAG_MAX_LENGTH + extra);
        prop_assert!(BookmarkTag::parse(&raw).is_err());
    }

    #[test]
    fn parsing_is_idempotent(title in arb_title(), tag in arb_tag(), url in arb_url()) {
        let title = BookmarkTitle::parse(&title).unwrap();
        prop_assert_eq!(&BookmarkTitle::parse(title.as_str()).unwrap(), &title);

        let tag = BookmarkTag::parse(&tag).unwrap();
        prop_assert_eq!(&BookmarkTag::parse(tag.as_str()).unwrap(), &tag);

        let url = BookmarkUrl::parse(&url).unwrap();
        prop_assert_eq!(&BookmarkUrl::parse(url.as_str()).unwrap(), &url);
    }
}
