//! Table and plain-text views of a URL list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::item::UrlItem;

/// Which view the list is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Text,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Text => "text",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(ViewMode::Table),
            "text" => Ok(ViewMode::Text),
            other => Err(format!("unknown view mode '{other}' (expected table or text)")),
        }
    }
}

/// Separator placed between URLs in the text serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSeparator {
    #[default]
    Single,
    Double,
}

impl LineSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineSeparator::Single => "\n",
            LineSeparator::Double => "\n\n",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextOptions {
    pub separator: LineSeparator,
    /// Prefix each line with `[x] ` or `[ ] `.
    pub markers: bool,
}

/// Serializes items one URL per line. This is also what gets copied.
///
/// No separator follows the last URL; an empty list gives an empty string.
pub fn render_text(items: &[UrlItem], opts: &TextOptions) -> String {
    items
        .iter()
        .map(|item| {
            if opts.markers {
                let mark = if item.is_used { 'x' } else { ' ' };
                format!("[{mark}] {}", item.url)
            } else {
                item.url.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(opts.separator.as_str())
}

/// Renders a table with 1-based row numbers, a used column and the URL.
pub fn render_table(items: &[UrlItem]) -> String {
    let mut out = format!("{:<5} {:<5} {}\n", "#", "USED", "URL");
    for (i, item) in items.iter().enumerate() {
        let used = if item.is_used { "yes" } else { "no" };
        out.push_str(&format!("{:<5} {:<5} {}\n", i + 1, used, item.url));
    }
    out
}

pub fn render(items: &[UrlItem], mode: ViewMode, opts: &TextOptions) -> String {
    match mode {
        ViewMode::Table => render_table(items),
        ViewMode::Text => render_text(items, opts),
    }
}

/// JSON array of `{"url": .., "isUsed": ..}` objects.
pub fn render_json(items: &[UrlItem]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(items)
}
