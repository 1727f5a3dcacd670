use std::path::{Path, PathBuf};

use solink_fs::{Staging, atomic_symlink};

use crate::error::Result;
use crate::provider::{self, ProviderStore};
use crate::table::BindingTable;

/// The materialized compatibility directory: one symlink per binding,
/// nothing else.
#[derive(Clone, Debug)]
pub struct ShimDirectory {
    root: PathBuf,
    links: Vec<(String, PathBuf)>,
}

impl ShimDirectory {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `soname -> resolved target` pairs actually linked.
    pub fn links(&self) -> &[(String, PathBuf)] {
        &self.links
    }
}

/// Build the shim directory for `table` at `target`.
///
/// Validation and provider resolution both run to completion before the
/// filesystem is touched, and the links are created in a staging directory
/// that is swapped over `target` in one move. A failed build therefore
/// leaves `target` exactly as it was; a successful one fully supersedes
/// whatever was there, so links from an earlier table cannot linger.
pub fn build(
    table: &BindingTable,
    store: &dyn ProviderStore,
    target: impl AsRef<Path>,
) -> Result<ShimDirectory> {
    let target = target.as_ref();

    table.validate()?;

    let mut links = Vec::with_capacity(table.len());
    for binding in table {
        let resolved = provider::resolve(store, binding)?;
        links.push((binding.soname.clone(), resolved));
    }

    let staging = Staging::new(staging_dir(target), target)?;
    for (soname, resolved) in &links {
        atomic_symlink(resolved, staging.path().join(soname))?;
        tracing::debug!(soname = %soname, to = %resolved.display(), "linked");
    }
    staging.commit()?;

    tracing::info!(links = links.len(), shim = %target.display(), "shim directory built");

    Ok(ShimDirectory {
        root: target.to_path_buf(),
        links,
    })
}

fn staging_dir(target: &Path) -> PathBuf {
    let name = target.file_name().unwrap_or_default().to_string_lossy();
    target.with_file_name(format!("{name}.staging"))
}
