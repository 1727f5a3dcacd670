use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create directory '{path}': {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to create symlink '{link}': {source}")]
    Symlink { link: PathBuf, source: io::Error },

    #[error("failed to remove '{path}': {source}")]
    Remove { path: PathBuf, source: io::Error },

    #[error("failed to replace '{path}': {source}")]
    Replace { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
