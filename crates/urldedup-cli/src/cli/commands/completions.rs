//! `urldedup completions <shell>` and `urldedup man`.

use anyhow::Result;
use clap::CommandFactory;
use std::io;

use crate::cli::Cli;

pub fn run_completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "urldedup", &mut io::stdout());
}

pub fn run_man() -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    man.render(&mut io::stdout())?;
    Ok(())
}
