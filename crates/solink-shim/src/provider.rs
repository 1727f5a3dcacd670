//! Provider resolution for library bindings.
//!
//! The store is the only contact point with the external package
//! provisioning layer: given a package identity, it yields the absolute
//! path of that package's installed output directory. Everything else
//! about how packages get installed is somebody else's policy.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::table::LibraryBinding;

pub trait ProviderStore {
    fn locate(&self, package: &str) -> Option<PathBuf>;
}

/// Directory-backed store: each package's output lives at `<root>/<name>`.
#[derive(Clone, Debug)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ProviderStore for DirStore {
    fn locate(&self, package: &str) -> Option<PathBuf> {
        let dir = self.root.join(package);
        dir.is_dir().then_some(dir)
    }
}

/// Resolve one binding to the absolute path of its real library file.
pub fn resolve(store: &dyn ProviderStore, binding: &LibraryBinding) -> Result<PathBuf> {
    let Some(output) = store.locate(&binding.package) else {
        return Err(Error::Resolution {
            soname: binding.soname.clone(),
            package: binding.package.clone(),
            path: binding.lib_path.clone(),
        });
    };

    let resolved = output.join(&binding.lib_path);
    if !resolved.is_file() {
        return Err(Error::Resolution {
            soname: binding.soname.clone(),
            package: binding.package.clone(),
            path: resolved,
        });
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn dir_store_locates_installed_package() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("zlib/lib")).unwrap();

        let store = DirStore::new(dir.path());
        assert_eq!(store.locate("zlib"), Some(dir.path().join("zlib")));
        assert_eq!(store.locate("missing"), None);
    }

    #[test]
    fn resolve_yields_library_file() {
        let dir = tempdir().unwrap();
        let lib = dir.path().join("zlib/lib/libz.so.1");
        std::fs::create_dir_all(lib.parent().unwrap()).unwrap();
        std::fs::write(&lib, "elf").unwrap();

        let store = DirStore::new(dir.path());
        let binding = LibraryBinding::new("libz.so.1", "zlib", "lib/libz.so.1");

        assert_eq!(resolve(&store, &binding).unwrap(), lib);
    }

    #[test]
    fn resolve_fails_when_package_missing() {
        let dir = tempdir().unwrap();
        let store = DirStore::new(dir.path());
        let binding = LibraryBinding::new("libz.so.1", "zlib", "lib/libz.so.1");

        match resolve(&store, &binding) {
            Err(Error::Resolution {
                soname, package, ..
            }) => {
                assert_eq!(soname, "libz.so.1");
                assert_eq!(package, "zlib");
            }
            other => panic!("expected Resolution, got {other:?}"),
        }
    }

    #[test]
    fn resolve_fails_when_library_file_missing() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("zlib/lib")).unwrap();

        let store = DirStore::new(dir.path());
        let binding = LibraryBinding::new("libz.so.1", "zlib", "lib/libz.so.1");

        match resolve(&store, &binding) {
            Err(Error::Resolution { path, .. }) => {
                assert_eq!(path, dir.path().join("zlib/lib/libz.so.1"));
            }
            other => panic!("expected Resolution, got {other:?}"),
        }
    }
}
