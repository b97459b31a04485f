//! System clipboard access. Failures are logged and swallowed here so they
//! never reach normalization.

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::{debug, warn};

pub struct Clipboard {
    /// `None` when no system clipboard could be opened.
    provider: Option<Box<dyn ClipboardProvider>>,
}

impl Clipboard {
    /// Connects to the system clipboard, or falls back to a no-op one.
    pub fn new() -> Self {
        match ClipboardContext::new() {
            Ok(ctx) => Self::with_provider(Box::new(ctx)),
            Err(err) => {
                warn!("system clipboard unavailable: {}", err);
                Self::unavailable()
            }
        }
    }

    pub fn unavailable() -> Self {
        Self { provider: None }
    }

    pub fn with_provider(provider: Box<dyn ClipboardProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn store(&mut self, text: impl Into<String>) {
        let Some(provider) = self.provider.as_mut() else {
            debug!("no clipboard, dropping copy");
            return;
        };
        let text = text.into();
        let len = text.len();
        match provider.set_contents(text) {
            Ok(()) => debug!(bytes = len, "stored text in clipboard"),
            Err(err) => warn!("unable to store text in clipboard: {}", err),
        }
    }

    /// Clipboard text, or an empty string when it cannot be read.
    pub fn load(&mut self) -> String {
        let Some(provider) = self.provider.as_mut() else {
            debug!("no clipboard, nothing to paste");
            return String::new();
        };
        match provider.get_contents() {
            Ok(text) => text,
            Err(err) => {
                warn!("unable to load text from clipboard: {}", err);
                String::new()
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MemoryClipboard;
    use super::*;

    #[test]
    fn store_then_load() {
        let mem = MemoryClipboard::default();
        let mut clipboard = Clipboard::with_provider(Box::new(mem.clone()));
        clipboard.store("https://a.com");
        assert_eq!(clipboard.load(), "https://a.com");
        assert_eq!(*mem.0.lock().unwrap(), "https://a.com");
    }

    #[test]
    fn unavailable_clipboard_loads_empty() {
        let mut clipboard = Clipboard::unavailable();
        clipboard.store("ignored");
        assert_eq!(clipboard.load(), "");
    }
}
