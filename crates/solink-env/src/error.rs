use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to get home directory")]
    NoHome,

    #[error("failed to determine the current shell")]
    UnknownShell,

    #[error("search path entry contains a path separator")]
    InvalidSearchPath,

    #[error("failed to spawn shell '{shell}': {source}")]
    ShellSpawn { shell: String, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
