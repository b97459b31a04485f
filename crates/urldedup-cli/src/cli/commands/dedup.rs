//! `urldedup dedup [PATH]` – de-duplicate URLs from a file or stdin.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use urldedup_core::config::UrlDedupConfig;

use super::output::write_results;
use crate::cli::clipboard::Clipboard;
use crate::cli::OutputArgs;

pub fn run_dedup(cfg: &UrlDedupConfig, path: Option<&Path>, args: &OutputArgs) -> Result<()> {
    let text = read_input(path)?;
    let mut clipboard = args.copy.then(Clipboard::new);
    write_results(
        &text,
        cfg,
        args,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        clipboard.as_mut(),
    )
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("read {}", p.display()))
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("read stdin")?;
            Ok(text)
        }
    }
}
