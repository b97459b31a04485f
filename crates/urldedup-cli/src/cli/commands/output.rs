//! Shared output path for `dedup` and `paste`: normalize, print, copy.

use anyhow::Result;
use std::io::Write;
use urldedup_core::config::UrlDedupConfig;
use urldedup_core::normalize_with_report;
use urldedup_core::render::{render_json, render_table, render_text};

use crate::cli::clipboard::Clipboard;
use crate::cli::{OutputArgs, OutputView};

/// Normalizes `text` and writes the list to `out` in the requested view.
///
/// The skipped-token summary goes to `report` so piped stdout stays a
/// clean URL list.
pub fn write_results<W: Write, E: Write>(
    text: &str,
    cfg: &UrlDedupConfig,
    args: &OutputArgs,
    out: &mut W,
    report: &mut E,
    clipboard: Option<&mut Clipboard>,
) -> Result<()> {
    let result = normalize_with_report(text);
    let opts = args.text_options(cfg);

    if !result.items.is_empty() {
        match args.view(cfg) {
            OutputView::Table => write!(out, "{}", render_table(&result.items))?,
            OutputView::Text => writeln!(out, "{}", render_text(&result.items, &opts))?,
            OutputView::Json => writeln!(out, "{}", render_json(&result.items)?)?,
        }
    } else if args.view(cfg) == OutputView::Json {
        writeln!(out, "[]")?;
    }

    if args.report_skipped {
        writeln!(
            report,
            "{} unique, {} duplicates collapsed, {} tokens skipped",
            result.items.len(),
            result.duplicates,
            result.skipped.len()
        )?;
        for token in &result.skipped {
            writeln!(report, "skipped: {token}")?;
        }
    }

    if let Some(clipboard) = clipboard {
        clipboard.store(render_text(&result.items, &opts));
        // X11 selections die with their owner; this process exits right away.
        writeln!(
            report,
            "copied {} URLs; the copy outlives this command only if a clipboard manager is running (use `urldedup interactive` otherwise)",
            result.items.len()
        )?;
    }

    Ok(())
}
