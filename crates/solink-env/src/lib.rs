//! Search-path composition and session environment.
//!
//! The whole pipeline runs once, before any development work starts:
//! compose the search path from the shim directory plus the extra native
//! directories, wrap it in a [`PreparedEnv`], and pass that value to every
//! spawning call site. Nothing mutates it afterwards.

pub use error::{Error, Result};
pub use search_path::SearchPath;
pub use session::{LIBRARY_PATH_VAR, PreparedEnv, SessionEnv};

mod error;
mod search_path;
mod session;
