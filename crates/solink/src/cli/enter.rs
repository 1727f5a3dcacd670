use anyhow::{Context, Result};

use super::build::{BuildArg, prepare};

pub fn run(arg: BuildArg) -> Result<()> {
    let prepared = prepare(arg)?;
    let status = prepared
        .shell()
        .context("failed to enter development shell")?;

    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }
    Ok(())
}
