use std::path::Path;

use crate::{Error, Result};

/// Create `link` pointing at `target`, replacing any existing entry.
///
/// The link is created under a temporary name in the same directory and
/// renamed over `link`, so a reader never observes a missing entry
/// mid-update. The temporary name is `.<name>.tmp` rather than a swapped
/// extension: versioned library names like `libfoo.so.1` and `libfoo.so.2`
/// must not collide on their temporary names.
pub fn atomic_symlink(target: impl AsRef<Path>, link: impl AsRef<Path>) -> Result<()> {
    let target = target.as_ref();
    let link = link.as_ref();

    let file_name = link.file_name().unwrap_or_default().to_string_lossy();
    let tmp_link = link.with_file_name(format!(".{file_name}.tmp"));

    std::os::unix::fs::symlink(target, &tmp_link).map_err(|e| Error::Symlink {
        link: link.to_path_buf(),
        source: e,
    })?;
    std::fs::rename(&tmp_link, link).map_err(|e| Error::Symlink {
        link: link.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_symlink() -> Result<()> {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");

        std::fs::write(&target, "data").unwrap();
        atomic_symlink(&target, &link)?;

        assert!(link.is_symlink());
        assert_eq!(std::fs::read_to_string(&link).unwrap(), "data");
        Ok(())
    }

    #[test]
    fn replaces_existing_link() -> Result<()> {
        let dir = tempdir().unwrap();
        let old = dir.path().join("old");
        let new = dir.path().join("new");
        let link = dir.path().join("libdemo.so.1");

        std::fs::write(&old, "old").unwrap();
        std::fs::write(&new, "new").unwrap();

        atomic_symlink(&old, &link)?;
        atomic_symlink(&new, &link)?;

        assert_eq!(std::fs::read_link(&link).unwrap(), new);
        Ok(())
    }

    #[test]
    fn versioned_names_get_distinct_temp_names() -> Result<()> {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        std::fs::write(&target, "data").unwrap();

        atomic_symlink(&target, dir.path().join("libdemo.so.1"))?;
        atomic_symlink(&target, dir.path().join("libdemo.so.2"))?;

        assert!(dir.path().join("libdemo.so.1").is_symlink());
        assert!(dir.path().join("libdemo.so.2").is_symlink());
        Ok(())
    }

    #[test]
    fn dangling_target_is_allowed() -> Result<()> {
        let dir = tempdir().unwrap();
        let link = dir.path().join("link");

        atomic_symlink(dir.path().join("missing"), &link)?;

        assert!(link.is_symlink());
        Ok(())
    }
}
