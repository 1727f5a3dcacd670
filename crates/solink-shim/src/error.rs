use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("duplicate soname '{soname}': provided by both '{first}' and '{second}'")]
    DuplicateSoname {
        soname: String,
        first: String,
        second: String,
    },

    #[error("binding table is empty")]
    EmptyTable,

    #[error("failed to read config '{path}': {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("failed to parse config '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot resolve '{soname}': package '{package}' does not provide '{path}'")]
    Resolution {
        soname: String,
        package: String,
        path: PathBuf,
    },

    #[error(transparent)]
    Fs(#[from] solink_fs::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
