//! `urldedup config` – show where settings come from.

use anyhow::Result;
use std::path::Path;
use urldedup_core::config::{self, UrlDedupConfig};
use urldedup_core::logging;

pub fn run_config(cfg: &UrlDedupConfig, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("config: {}", path.display());
    if let Ok(log) = logging::log_file_path() {
        println!("log:    {}", log.display());
    }
    println!();
    print!("{}", cfg.to_toml_string()?);
    Ok(())
}
