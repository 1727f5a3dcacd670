use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// One required compatibility link: the soname an external binary expects
/// to load, and where the real library lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryBinding {
    pub soname: String,
    pub package: String,
    pub lib_path: PathBuf,
}

impl LibraryBinding {
    pub fn new(
        soname: impl Into<String>,
        package: impl Into<String>,
        lib_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            soname: soname.into(),
            package: package.into(),
            lib_path: lib_path.into(),
        }
    }
}

/// The complete, order-irrelevant set of bindings an environment needs.
///
/// The table exposes construction, iteration and validation; nothing else.
/// Adding, removing or repointing an entry must never require changes
/// elsewhere in the pipeline.
#[derive(Clone, Debug, Default)]
pub struct BindingTable {
    bindings: Vec<LibraryBinding>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, binding: LibraryBinding) {
        self.bindings.push(binding);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LibraryBinding> {
        self.bindings.iter()
    }

    /// Check the table's invariants before any filesystem work.
    ///
    /// Sonames are link names, so they must be unique across the table;
    /// two bindings sharing one is a configuration error even when they
    /// name the same provider.
    pub fn validate(&self) -> Result<()> {
        if self.bindings.is_empty() {
            return Err(Error::EmptyTable);
        }

        let mut seen: HashMap<&str, &str> = HashMap::with_capacity(self.bindings.len());
        for binding in &self.bindings {
            if let Some(first) = seen.insert(&binding.soname, &binding.package) {
                return Err(Error::DuplicateSoname {
                    soname: binding.soname.clone(),
                    first: first.to_string(),
                    second: binding.package.clone(),
                });
            }
        }

        Ok(())
    }
}

impl FromIterator<LibraryBinding> for BindingTable {
    fn from_iter<I: IntoIterator<Item = LibraryBinding>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BindingTable {
    type Item = &'a LibraryBinding;
    type IntoIter = std::slice::Iter<'a, LibraryBinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}
