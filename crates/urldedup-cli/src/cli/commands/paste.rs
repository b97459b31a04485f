//! `urldedup paste` – de-duplicate URLs taken from the clipboard.

use anyhow::Result;
use std::io::{self, Write};
use urldedup_core::config::UrlDedupConfig;

use super::output::write_results;
use crate::cli::clipboard::Clipboard;
use crate::cli::OutputArgs;

pub fn run_paste(cfg: &UrlDedupConfig, args: &OutputArgs) -> Result<()> {
    let mut clipboard = Clipboard::new();
    paste_results(
        &mut clipboard,
        cfg,
        args,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Reads the clipboard and writes results exactly as `dedup` would for the
/// same text, empty clipboard included.
pub fn paste_results<W: Write, E: Write>(
    clipboard: &mut Clipboard,
    cfg: &UrlDedupConfig,
    args: &OutputArgs,
    out: &mut W,
    report: &mut E,
) -> Result<()> {
    let text = clipboard.load();
    if text.trim().is_empty() {
        writeln!(report, "Clipboard is empty.")?;
    } else {
        tracing::info!(bytes = text.len(), "pasted text from clipboard");
    }

    let copy_target = if args.copy { Some(clipboard) } else { None };
    write_results(&text, cfg, args, out, report, copy_target)
}
