pub mod config;
pub mod logging;

pub mod item;
pub mod normalize;
pub mod render;
pub mod session;

pub use item::{ListError, UrlItem, UrlList};
pub use normalize::{normalize, normalize_token, normalize_with_report, NormalizeReport};
pub use render::{LineSeparator, TextOptions, ViewMode};
