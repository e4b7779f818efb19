//! Log setup for the terminal front end.
//!
//! The game owns the terminal while it runs, so log records go to a file.
//! Filtering follows `RUST_LOG` and defaults to `info`.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub fn init_file_logger(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .context("Failed to install logger")?;

    Ok(())
}
