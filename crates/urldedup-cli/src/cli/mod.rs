//! CLI for urldedup.

mod clipboard;
mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use urldedup_core::config::{self, UrlDedupConfig};
use urldedup_core::{LineSeparator, TextOptions, ViewMode};

use commands::{run_completions, run_config, run_dedup, run_interactive, run_man, run_paste};

/// Top-level CLI for urldedup.
#[derive(Debug, Parser)]
#[command(name = "urldedup")]
#[command(about = "Remove duplicate URLs from pasted text", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/urldedup/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputView {
    Table,
    Text,
    Json,
}

impl From<ViewMode> for OutputView {
    fn from(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Table => OutputView::Table,
            ViewMode::Text => OutputView::Text,
        }
    }
}

/// Output flags shared by `dedup` and `paste`.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Output view (default from config: table or text).
    #[arg(long, value_enum)]
    pub view: Option<OutputView>,

    /// Put an empty line between URLs in text output and copies.
    #[arg(long)]
    pub double_newline: bool,

    /// Prefix text lines with [x] / [ ] used markers.
    #[arg(long)]
    pub markers: bool,

    /// Also copy the URL list to the clipboard.
    #[arg(long)]
    pub copy: bool,

    /// Print dropped tokens and collapsed duplicates to stderr.
    #[arg(long)]
    pub report_skipped: bool,
}

impl OutputArgs {
    pub fn view(&self, cfg: &UrlDedupConfig) -> OutputView {
        self.view.unwrap_or_else(|| cfg.default_view.into())
    }

    /// Command-line flags can only turn options on; config supplies the rest.
    pub fn text_options(&self, cfg: &UrlDedupConfig) -> TextOptions {
        TextOptions {
            separator: if self.double_newline {
                LineSeparator::Double
            } else {
                cfg.line_separator
            },
            markers: self.markers || cfg.show_markers,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Remove duplicate URLs from a file or stdin.
    Dedup {
        /// Text file with URLs; reads stdin when omitted or "-".
        path: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Remove duplicate URLs from the clipboard contents.
    Paste {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Line-oriented session: paste text, submit, toggle used marks, copy.
    Interactive,

    /// Show the config file location and effective settings.
    Config,

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print a man page.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Dedup { path, output } => run_dedup(&cfg, path.as_deref(), &output)?,
            CliCommand::Paste { output } => run_paste(&cfg, &output)?,
            CliCommand::Interactive => run_interactive(&cfg).await?,
            CliCommand::Config => run_config(&cfg, cli.config.as_deref())?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
