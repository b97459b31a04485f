//! Tokenizing pasted text.

/// Splits `text` on every maximal run of whitespace (spaces, tabs, newlines).
///
/// Consecutive separators collapse, so no empty tokens are produced.
pub fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_mixed_separators() {
        let tokens: Vec<_> = split_tokens("a \n\n b\t\tc\r\nd").collect();
        assert_eq!(tokens, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn whitespace_only_yields_nothing() {
        assert_eq!(split_tokens(" \n\t \r\n ").count(), 0);
        assert_eq!(split_tokens("").count(), 0);
    }
}
