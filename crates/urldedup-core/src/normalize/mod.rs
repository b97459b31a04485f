//! URL normalization and de-duplication.
//!
//! Pasted text is split on whitespace, each token is parsed as an absolute
//! URL, its query is cleared and one trailing slash is stripped. The
//! resulting strings are de-duplicated keeping the position of the first
//! occurrence. Tokens that are not URLs are dropped without an error.

mod split;
mod token;

use std::collections::HashSet;

use crate::item::UrlItem;

pub use split::split_tokens;
pub use token::normalize_token;

/// Outcome of a normalization pass with the dropped input accounted for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Unique normalized URLs in first-seen order, all unused.
    pub items: Vec<UrlItem>,
    /// Tokens that did not parse as absolute URLs, in input order.
    pub skipped: Vec<String>,
    /// Number of valid tokens that collapsed onto an earlier entry.
    pub duplicates: usize,
}

/// Normalizes and de-duplicates every URL found in `text`.
///
/// Never fails: invalid tokens are silently excluded. Identical input always
/// yields the same list in the same order.
pub fn normalize(text: &str) -> Vec<UrlItem> {
    normalize_with_report(text).items
}

/// Like [`normalize`], but also returns the tokens that were dropped and how
/// many duplicates were collapsed.
pub fn normalize_with_report(text: &str) -> NormalizeReport {
    let mut seen: HashSet<String> = HashSet::new();
    let mut report = NormalizeReport::default();

    for token in split_tokens(text) {
        let Some(url) = normalize_token(token) else {
            tracing::trace!(token, "dropping token that is not an absolute URL");
            report.skipped.push(token.to_string());
            continue;
        };
        if seen.insert(url.clone()) {
            report.items.push(UrlItem::new(url));
        } else {
            report.duplicates += 1;
        }
    }

    tracing::debug!(
        unique = report.items.len(),
        skipped = report.skipped.len(),
        duplicates = report.duplicates,
        "normalized input"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(items: &[UrlItem]) -> Vec<&str> {
        items.iter().map(|i| i.url.as_str()).collect()
    }

    #[test]
    fn query_variants_collapse() {
        let items = normalize("https://a.com/x?p=1\nhttps://a.com/x?p=2");
        assert_eq!(items, vec![UrlItem::new("https://a.com/x")]);
    }

    #[test]
    fn trailing_slash_invalid_token_and_duplicate() {
        let items = normalize("https://a.com/\nnot a url\nhttps://a.com");
        assert_eq!(urls(&items), vec!["https://a.com"]);
        assert!(!items[0].is_used);
    }

    #[test]
    fn query_variants_with_fragments_collapse() {
        let items = normalize(
            "https://a.com/x?p=1#top\nhttps://a.com/x?p=2#bottom\nhttps://a.com/docs/?utm=1#s",
        );
        assert_eq!(urls(&items), vec!["https://a.com/x", "https://a.com/docs"]);
    }

    #[test]
    fn first_seen_order_is_preserved() {
        let items = normalize("https://b.com https://a.com");
        assert_eq!(urls(&items), vec!["https://b.com", "https://a.com"]);
    }

    #[test]
    fn later_duplicate_does_not_move_entry() {
        let items = normalize("https://a.com/1 https://a.com/2 https://a.com/1?x https://a.com/3");
        assert_eq!(
            urls(&items),
            vec!["https://a.com/1", "https://a.com/2", "https://a.com/3"]
        );
    }

    #[test]
    fn whitespace_only_or_url_free_input_is_empty() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n\t\n  ").is_empty());
        assert!(normalize("hello world, nothing here").is_empty());
    }

    #[test]
    fn report_counts_skipped_and_duplicates() {
        let report = normalize_with_report("https://a.com junk https://a.com/ more-junk https://b.com");
        assert_eq!(urls(&report.items), vec!["https://a.com", "https://b.com"]);
        assert_eq!(report.skipped, vec!["junk", "more-junk"]);
        assert_eq!(report.duplicates, 1);
    }

    #[test]
    fn case_sensitive_paths_stay_distinct() {
        let items = normalize("https://a.com/Page https://a.com/page");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn deterministic_for_identical_input() {
        let text = "https://c.com\nhttps://a.com/?q\nhttps://b.com/x\nhttps://a.com";
        assert_eq!(normalize(text), normalize(text));
    }
}
