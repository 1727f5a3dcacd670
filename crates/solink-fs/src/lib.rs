//! Atomic filesystem primitives for environment builds.
//!
//! # Architecture
//!
//! - `symlink.rs` - atomic symlink creation
//! - `staging.rs` - build-then-commit directory staging
//!
//! Everything here is unix-only; the environments being built target the
//! Linux dynamic loader.

mod error;
mod staging;
mod symlink;

pub use error::{Error, Result};
pub use staging::Staging;
pub use symlink::atomic_symlink;

use std::path::Path;

/// Replace `dest` with `src`, discarding any prior content of `dest`.
pub fn replace_dir(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let src = src.as_ref();
    let dest = dest.as_ref();

    if let Ok(meta) = dest.symlink_metadata() {
        let removed = if meta.is_dir() {
            std::fs::remove_dir_all(dest)
        } else {
            std::fs::remove_file(dest)
        };
        removed.map_err(|e| Error::Remove {
            path: dest.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::rename(src, dest).map_err(|e| Error::Replace {
        path: dest.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn replace_dir_fresh_destination() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");

        std::fs::create_dir_all(&src).unwrap();
        std::fs::write(src.join("file.txt"), "data").unwrap();

        replace_dir(&src, &dest).unwrap();

        assert!(dest.join("file.txt").exists());
        assert!(!src.exists());
    }

    #[test]
    fn replace_dir_discards_prior_content() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");

        std::fs::create_dir_all(&src).unwrap();
        std::fs::create_dir_all(&dest).unwrap();
        std::fs::write(dest.join("stale.txt"), "old").unwrap();

        replace_dir(&src, &dest).unwrap();

        assert!(!dest.join("stale.txt").exists());
    }

    #[test]
    fn replace_dir_missing_source_fails() {
        let dir = tempdir().unwrap();
        let result = replace_dir(dir.path().join("missing"), dir.path().join("dest"));
        assert!(matches!(result, Err(Error::Replace { .. })));
    }
}
