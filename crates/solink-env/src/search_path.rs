use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

fn paths_equal(p1: &Path, p2: &Path) -> bool {
    fn normalize(p: &Path) -> String {
        p.to_string_lossy().trim_end_matches('/').to_string()
    }
    normalize(p1) == normalize(p2)
}

/// An ordered library search path. Earlier entries shadow later ones when
/// two directories provide a library under the same name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose the session search path: the shim directory first, then the
    /// extra native-dependency directories in the order supplied.
    pub fn compose(shim_dir: impl Into<PathBuf>, extra_dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut path = Self::new();
        path.push(shim_dir.into());
        for dir in extra_dirs {
            path.push(dir);
        }
        path
    }

    /// Append a directory unless an equal one is already present; the
    /// first occurrence wins and keeps its position.
    pub fn push(&mut self, dir: PathBuf) {
        if !self.contains(&dir) {
            self.dirs.push(dir);
        }
    }

    pub fn contains(&self, dir: &Path) -> bool {
        self.dirs.iter().any(|d| paths_equal(d, dir))
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// The colon-delimited value for the environment variable.
    pub fn join(&self) -> Result<OsString> {
        env::join_paths(&self.dirs).map_err(|_| Error::InvalidSearchPath)
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, dir) in self.dirs.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{}", dir.display())?;
        }
        Ok(())
    }
}
