use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A directory populated off to the side and swapped over a destination on
/// commit.
///
/// Dropping an uncommitted staging removes it, so an aborted build leaves
/// the destination exactly as it was.
pub struct Staging {
    staging: PathBuf,
    destination: PathBuf,
    committed: bool,
}

impl Staging {
    pub fn new(staging: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<Self> {
        let staging = staging.as_ref().to_path_buf();
        let destination = destination.as_ref().to_path_buf();

        if !staging.exists() {
            std::fs::create_dir_all(&staging).map_err(|e| Error::CreateDir {
                path: staging.clone(),
                source: e,
            })?;
        }

        Ok(Self {
            staging,
            destination,
            committed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.staging
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Swap the staged content over the destination, superseding whatever
    /// was there before.
    pub fn commit(mut self) -> Result<()> {
        crate::replace_dir(&self.staging, &self.destination)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for Staging {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_dir_all(&self.staging);
        }
    }
}
