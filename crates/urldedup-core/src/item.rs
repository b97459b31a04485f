//! Normalized URL items and the list that owns them.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// One unique normalized URL plus the user's "used" mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlItem {
    pub url: String,
    #[serde(rename = "isUsed")]
    pub is_used: bool,
}

impl UrlItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            is_used: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("no item at index {index} (list has {len} items)")]
    OutOfRange { index: usize, len: usize },
}

/// Result list of one normalization call.
///
/// The whole list is replaced by each new normalization; in between, only
/// the `is_used` flags change, one item at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlList {
    items: Vec<UrlItem>,
}

impl UrlList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            items: normalize(text),
        }
    }

    /// Discards the current list (and every used flag) and normalizes `text`.
    pub fn replace_from_text(&mut self, text: &str) {
        self.items = normalize(text);
    }

    /// Flips the flag at `index` (0-based) and returns its new value.
    pub fn toggle(&mut self, index: usize) -> Result<bool, ListError> {
        let item = self.item_mut(index)?;
        item.is_used = !item.is_used;
        Ok(item.is_used)
    }

    pub fn set_used(&mut self, index: usize, used: bool) -> Result<(), ListError> {
        self.item_mut(index)?.is_used = used;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&UrlItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn used_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_used).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UrlItem> {
        self.items.iter()
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.url.as_str())
    }

    pub fn as_slice(&self) -> &[UrlItem] {
        &self.items
    }

    fn item_mut(&mut self, index: usize) -> Result<&mut UrlItem, ListError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(ListError::OutOfRange { index, len })
    }
}

impl From<Vec<UrlItem>> for UrlList {
    fn from(items: Vec<UrlItem>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a UrlList {
    type Item = &'a UrlItem;
    type IntoIter = std::slice::Iter<'a, UrlItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_only_target() {
        let mut list = UrlList::from_text("https://a.com https://b.com https://c.com");
        let before = list.clone();

        assert_eq!(list.toggle(1), Ok(true));
        for (i, (now, was)) in list.iter().zip(before.iter()).enumerate() {
            assert_eq!(now.url, was.url);
            if i != 1 {
                assert_eq!(now.is_used, was.is_used);
            }
        }
        assert!(list.get(1).unwrap().is_used);

        assert_eq!(list.toggle(1), Ok(false));
        assert_eq!(list, before);
    }

    #[test]
    fn toggle_out_of_range() {
        let mut list = UrlList::from_text("https://a.com");
        assert_eq!(
            list.toggle(3),
            Err(ListError::OutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn replace_resets_flags() {
        let mut list = UrlList::from_text("https://a.com https://b.com");
        list.set_used(0, true).unwrap();
        assert_eq!(list.used_count(), 1);

        list.replace_from_text("https://a.com https://b.com");
        assert_eq!(list.used_count(), 0);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn item_json_uses_is_used_key() {
        let mut item = UrlItem::new("https://a.com");
        item.is_used = true;
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"url":"https://a.com","isUsed":true}"#);
    }
}
