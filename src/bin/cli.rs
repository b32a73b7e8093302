// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};
use totalscrobbles::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run_from_env().map_err(|e| eyre!("{e}"))
}
