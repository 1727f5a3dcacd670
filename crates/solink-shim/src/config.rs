use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::table::{BindingTable, LibraryBinding};

/// The declarative environment definition.
///
/// ```toml
/// [libs."libusb-1.0.so.0"]
/// package = "libusb1"
/// path = "lib/libusb-1.0.so.0"
///
/// [extra]
/// dirs = ["/opt/vendor/lib"]
/// ```
///
/// `libs` is the soname mapping table; TOML already rejects a duplicate
/// key at parse time, and [`BindingTable::validate`] covers tables built
/// in code. `extra.dirs` are appended to the search path after the shim
/// directory.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    libs: BTreeMap<String, LibEntry>,
    #[serde(default)]
    extra: Extra,
}

#[derive(Clone, Debug, Deserialize)]
struct LibEntry {
    package: String,
    path: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct Extra {
    #[serde(default)]
    dirs: Vec<PathBuf>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&raw).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn table(&self) -> BindingTable {
        self.libs
            .iter()
            .map(|(soname, entry)| {
                LibraryBinding::new(soname.clone(), entry.package.clone(), entry.path.clone())
            })
            .collect()
    }

    pub fn extra_dirs(&self) -> &[PathBuf] {
        &self.extra.dirs
    }
}
