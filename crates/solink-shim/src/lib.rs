//! Soname compatibility shims.
//!
//! # Architecture
//!
//! Binary wheels built against the manylinux baseline `dlopen` shared
//! libraries by fixed soname. A package-managed host rarely exposes its
//! libraries under those exact names, so the environment build materializes
//! a directory of symlinks that does, and that directory goes first on the
//! loader's search path.
//!
//! The builder is mechanism, not policy. [`ProviderStore`] is the contract
//! with the package provisioning layer; [`BindingTable`] is the declarative
//! input; [`build`] turns both into a [`ShimDirectory`], all-or-nothing.

pub use builder::{ShimDirectory, build};
pub use config::Config;
pub use error::{Error, Result};
pub use provider::{DirStore, ProviderStore, resolve};
pub use table::{BindingTable, LibraryBinding};

mod builder;
mod config;
mod error;
mod provider;
mod table;
