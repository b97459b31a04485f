//! Interactive session state: pasted input, the current list, the view and
//! whether a submit is in flight.

mod command;

pub use command::{Command, HELP};

use crate::config::UrlDedupConfig;
use crate::item::{ListError, UrlList};
use crate::render::{self, TextOptions, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingState {
    #[default]
    Idle,
    Processing,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("a submit is already in progress")]
    Busy,
    #[error("bad command: {0}")]
    BadCommand(String),
    #[error(transparent)]
    List(#[from] ListError),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    input: String,
    items: UrlList,
    view_mode: ViewMode,
    processing: ProcessingState,
    text_options: TextOptions,
}

impl Session {
    pub fn new(cfg: &UrlDedupConfig) -> Self {
        Self {
            view_mode: cfg.default_view,
            text_options: cfg.text_options(),
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn items(&self) -> &UrlList {
        &self.items
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn processing(&self) -> ProcessingState {
        self.processing
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Appends `text` on a new line of the input.
    pub fn append_input(&mut self, text: &str) {
        if !self.input.is_empty() && !self.input.ends_with('\n') {
            self.input.push('\n');
        }
        self.input.push_str(text);
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Marks the session busy. Callers may wait before [`finish_submit`].
    ///
    /// [`finish_submit`]: Session::finish_submit
    pub fn begin_submit(&mut self) -> Result<(), SessionError> {
        if self.processing == ProcessingState::Processing {
            return Err(SessionError::Busy);
        }
        self.processing = ProcessingState::Processing;
        Ok(())
    }

    /// Replaces the list with a fresh normalization of the input and returns
    /// the number of unique URLs.
    pub fn finish_submit(&mut self) -> usize {
        self.items.replace_from_text(&self.input);
        self.processing = ProcessingState::Idle;
        tracing::debug!(items = self.items.len(), "session list replaced");
        self.items.len()
    }

    pub fn submit(&mut self) -> Result<usize, SessionError> {
        self.begin_submit()?;
        Ok(self.finish_submit())
    }

    /// Flips the used mark of 1-based `row` and returns the new value.
    pub fn toggle(&mut self, row: usize) -> Result<bool, SessionError> {
        let index = row.checked_sub(1).ok_or(ListError::OutOfRange {
            index: 0,
            len: self.items.len(),
        })?;
        Ok(self.items.toggle(index)?)
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// The list in the current view. Empty when there is nothing to show.
    pub fn render(&self) -> String {
        if self.items.is_empty() {
            return String::new();
        }
        render::render(self.items.as_slice(), self.view_mode, &self.text_options)
    }

    /// Text serialization for the clipboard, whatever the current view.
    pub fn copy_text(&self) -> String {
        render::render_text(self.items.as_slice(), &self.text_options)
    }

    pub fn status_line(&self) -> String {
        let state = match self.processing {
            ProcessingState::Idle => "idle",
            ProcessingState::Processing => "processing",
        };
        format!(
            "input: {} lines, items: {} ({} used), view: {}, state: {}",
            self.input.lines().count(),
            self.items.len(),
            self.items.used_count(),
            self.view_mode,
            state
        )
    }
}
