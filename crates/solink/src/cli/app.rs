use clap::{Parser, Subcommand};

use super::build::BuildArg;
use super::path::PathArg;

#[derive(Clone, Debug, Parser)]
#[command(name="solink",version=env!("CARGO_PKG_VERSION"),about,long_about=None,propagate_version=true)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "b", name = "build", about = "Build the shim directory and print the export line")]
    Build(BuildArg),
    #[command(alias = "p", name = "path", about = "Print the composed library search path")]
    Path(PathArg),
    #[command(alias = "e", name = "enter", about = "Build, then open the development shell")]
    Enter(BuildArg),
}
