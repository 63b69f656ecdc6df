//! Property-based tests for persisting bookmark collections.
//!
//! These tests verify that inserting arbitrary valid bookmarks and reading
//! the collection back preserves every field and the insertion order.

use proptest::prelude::*;
use tokio::runtime::Runtime;

use tagmark::repository::{BookmarkRepository, JsonBookmarkRepository};
use tagmark::types::bookmark::{Bookmark, BookmarkTag, BookmarkTitle, BookmarkUrl};

/// Strategy for generating valid URL strings.
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

/// Strategy for a raw (title, url, tags) triple that passes validation.
fn arb_bookmark_fields() -> impl Strategy<Value = (String, String, Vec<String>)> {
    (
        "[a-zA-Z][a-zA-Z0-9 ]{0,30}[a-zA-Z0-9]",
        arb_url(),
        proptest::collection::vec("[a-z][a-z0-9-]{0,10}", 0..4),
    )
}

fn build(fields: &(String, String, Vec<String>)) -> Bookmark {
    let (title, url, tags) = fields;
    let tags = tags
        .iter()
        .map(|t| BookmarkTag::parse(t).unwrap())
        .collect();
    Bookmark::create(
        BookmarkTitle::parse(title).unwrap(),
        BookmarkUrl::parse(url).unwrap(),
        tags,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn insert_then_find_all_round_trips(fields in proptest::collection::vec(arb_bookmark_fields(), 0..5)) {
        let rt = Runtime::new().expect("tokio runtime");
        rt.block_on(async {
            let dir = tempfile::tempdir().expect("tempdir");
            let repo = JsonBookmarkRepository::new(dir.path().join("data.json"));

            let bookmarks: Vec<Bookmark> = fields.iter().map(build).collect();
            for bookmark in &bookmarks {
                repo.insert(bookmark).await.expect("insert valid bookmark");
            }

            let loaded = if bookmarks.is_empty() {
                // An empty run never touches the file, so there is nothing
                // to read back.
                Vec::new()
            } else {
                repo.find_all().await.expect("read collection back")
            };

            assert_eq!(loaded.len(), bookmarks.len());
            for (loaded, original) in loaded.iter().zip(&bookmarks) {
                assert_eq!(loaded.id(), original.id());
                assert_eq!(loaded.title(), original.title());
                assert_eq!(loaded.url(), original.url());
                assert_eq!(loaded.tags(), original.tags());
                // Timestamps are persisted at microsecond precision
                assert_eq!(
                    loaded.created_at().timestamp_micros(),
                    original.created_at().timestamp_micros()
                );
                assert_eq!(
                    loaded.updated_at().timestamp_micros(),
                    original.updated_at().timestamp_micros()
                );
            }
        });
    }

    #[test]
    fn delete_removes_exactly_the_targeted_record(fields in proptest::collection::vec(arb_bookmark_fields(), 1..5), pick in 0usize..4) {
        let rt = Runtime::new().expect("tokio runtime");
        rt.block_on(async {
            let dir = tempfile::tempdir().expect("tempdir");
            let repo = JsonBookmarkRepository::new(dir.path().join("data.json"));

            let bookmarks: Vec<Bookmark> = fields.iter().map(build).collect();
            for bookmark in &bookmarks {
                repo.insert(bookmark).await.expect("insert valid bookmark");
            }

            let target = &bookmarks[pick % bookmarks.len()];
            repo.delete(target.id()).await.expect("delete");

            let remaining = repo.find_all().await.expect("read collection back");
            assert_eq!(remaining.len(), bookmarks.len() - 1);
            assert!(remaining.iter().all(|b| b.id() != target.id()));

            // Relative order of the survivors is unchanged
            let expected: Vec<_> = bookmarks
                .iter()
                .filter(|b| b.id() != target.id())
                .map(|b| b.id().clone())
                .collect();
            let actual: Vec<_> = remaining.iter().map(|b| b.id().clone()).collect();
            assert_eq!(actual, expected);
        });
    }
}
