//! CLI command handlers. Each command is in its own file.

mod completions;
mod config;
mod dedup;
mod interactive;
mod output;
mod paste;

pub use completions::{run_completions, run_man};
pub use config::run_config;
pub use dedup::run_dedup;
pub use interactive::run_interactive;
pub use paste::run_paste;

#[cfg(test)]
pub(crate) use interactive::interact;
#[cfg(test)]
pub(crate) use output::write_results;
#[cfg(test)]
pub(crate) use paste::paste_results;
