//! Single-token URL normalization.

use url::Url;

/// Normalizes one token into a de-duplication key.
///
/// Returns `None` when the token is not an absolute URL. Otherwise
/// everything from the first `?` on is cleared: the query and any fragment
/// after it, or the tail of a fragment that itself contains `?`. The URL is
/// then re-serialized and one trailing `/` is stripped.
///
/// # Examples
///
/// - `normalize_token("https://a.com/x?p=1")` → `Some("https://a.com/x")`
/// - `normalize_token("https://example.com/")` → `Some("https://example.com")`
/// - `normalize_token("not-a-url")` → `None`
pub fn normalize_token(token: &str) -> Option<String> {
    let mut url = Url::parse(token).ok()?;
    if url.query().is_some() {
        url.set_query(None);
        url.set_fragment(None);
    } else if let Some((kept, _)) = url.fragment().and_then(|f| f.split_once('?')) {
        let kept = kept.to_string();
        url.set_fragment(Some(&kept));
    }

    let mut serialized = String::from(url);
    if serialized.ends_with('/') {
        serialized.pop();
    }
    Some(serialized)
}
