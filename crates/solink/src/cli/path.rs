use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use solink_env::{PreparedEnv, SearchPath, SessionEnv};
use solink_shim::Config;

#[derive(Args, Clone, Debug)]
pub struct PathArg {
    #[arg(
        short,
        long,
        default_value = "solink.toml",
        help = "Environment definition file"
    )]
    pub config: PathBuf,

    #[arg(long, help = "Shim directory (defaults to <root>/shim)")]
    pub shim: Option<PathBuf>,
}

pub fn run(arg: PathArg) -> Result<()> {
    let session = SessionEnv::new().context("failed to resolve session root")?;
    let config = Config::load(&arg.config)?;

    let shim = arg.shim.unwrap_or_else(|| session.shim().to_path_buf());
    if !shim.is_dir() {
        bail!(
            "shim directory '{}' has not been built; run `solink build` first",
            shim.display()
        );
    }

    let path = SearchPath::compose(shim, config.extra_dirs().iter().cloned());
    let prepared = PreparedEnv::new(path).context("failed to compose search path")?;
    println!("{}", prepared.search_path());
    Ok(())
}
