use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use solink_env::{PreparedEnv, SearchPath, SessionEnv};
use solink_shim::{Config, DirStore};

#[derive(Args, Clone, Debug)]
pub struct BuildArg {
    #[arg(
        short,
        long,
        default_value = "solink.toml",
        help = "Environment definition file"
    )]
    pub config: PathBuf,

    #[arg(long, help = "Shim directory target (defaults to <root>/shim)")]
    pub target: Option<PathBuf>,

    #[arg(long, help = "Provider store root (defaults to <root>/pkgs)")]
    pub store: Option<PathBuf>,
}

pub fn run(arg: BuildArg) -> Result<()> {
    let prepared = prepare(arg)?;
    println!(
        "export {}=\"{}\"",
        prepared.var_name(),
        prepared.search_path()
    );
    Ok(())
}

/// Run the whole pipeline once: load the table, build the shim, compose
/// the search path.
pub fn prepare(arg: BuildArg) -> Result<PreparedEnv> {
    let session = SessionEnv::new().context("failed to resolve session root")?;
    let config = Config::load(&arg.config)?;

    let store = DirStore::new(arg.store.unwrap_or_else(|| session.pkgs().to_path_buf()));
    let target = arg.target.unwrap_or_else(|| session.shim().to_path_buf());

    let shim = solink_shim::build(&config.table(), &store, &target)
        .with_context(|| format!("failed to build shim directory '{}'", target.display()))?;

    let path = SearchPath::compose(
        shim.root().to_path_buf(),
        config.extra_dirs().iter().cloned(),
    );
    PreparedEnv::new(path).context("failed to compose search path")
}
