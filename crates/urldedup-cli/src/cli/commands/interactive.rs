//! `urldedup interactive` – paste, submit, toggle and copy in one session.

use anyhow::Result;
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use urldedup_core::config::UrlDedupConfig;
use urldedup_core::session::{Command, Session, HELP};

use crate::cli::clipboard::Clipboard;

pub async fn run_interactive(cfg: &UrlDedupConfig) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut clipboard = Clipboard::new();
    interact(cfg, stdin, &mut io::stdout(), &mut clipboard).await
}

/// Runs the command loop until `quit` or end of input.
pub async fn interact<R, W>(
    cfg: &UrlDedupConfig,
    reader: R,
    out: &mut W,
    clipboard: &mut Clipboard,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = Session::new(cfg);
    let delay = Duration::from_millis(cfg.submit_delay_ms);
    let mut lines = reader.lines();

    writeln!(out, "urldedup interactive; paste URLs, then `submit` (`help` lists commands)")?;
    out.flush()?;

    while let Some(line) = lines.next_line().await? {
        let cmd = match Command::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        tracing::trace!(?cmd, "session command");

        match cmd {
            Command::Add(text) => session.append_input(&text),
            Command::Paste => {
                let text = clipboard.load();
                if text.trim().is_empty() {
                    writeln!(out, "clipboard is empty")?;
                } else {
                    session.append_input(&text);
                    writeln!(out, "pasted {} lines", text.lines().count())?;
                }
            }
            Command::Clear => {
                session.clear_input();
                writeln!(out, "input cleared")?;
            }
            Command::Submit => {
                if let Err(err) = session.begin_submit() {
                    writeln!(out, "{err}")?;
                    continue;
                }
                if !delay.is_zero() {
                    writeln!(out, "processing...")?;
                    out.flush()?;
                    tokio::time::sleep(delay).await;
                }
                let count = session.finish_submit();
                writeln!(out, "{count} unique URLs")?;
                write_view(out, &session)?;
            }
            Command::Toggle(row) => match session.toggle(row) {
                Ok(true) => writeln!(out, "row {row} marked used")?,
                Ok(false) => writeln!(out, "row {row} marked unused")?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::View(mode) => {
                session.set_view_mode(mode);
                write_view(out, &session)?;
            }
            Command::Show => write_view(out, &session)?,
            Command::Copy => {
                clipboard.store(session.copy_text());
                writeln!(out, "copied {} URLs", session.items().len())?;
            }
            Command::Status => writeln!(out, "{}", session.status_line())?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
        out.flush()?;
    }

    Ok(())
}

fn write_view<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let view = session.render();
    if view.is_empty() {
        return writeln!(out, "no URLs");
    }
    write!(out, "{view}")?;
    if !view.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}
