use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use query_shell::Shell;

use crate::error::{Error, Result};
use crate::search_path::SearchPath;

/// The variable the dynamic loader consults, and the only process-wide
/// state this crate ever writes.
pub const LIBRARY_PATH_VAR: &str = "LD_LIBRARY_PATH";

/// Resolved directory layout for a development session.
///
/// The root comes from `$SOLINK_ROOT` or defaults to `~/.solink`; the
/// provisioning layer installs package outputs under `pkgs/` and the shim
/// builder targets `shim/`.
#[derive(Clone, Debug)]
pub struct SessionEnv {
    root: PathBuf,
    pkgs: PathBuf,
    shim: PathBuf,
}

impl SessionEnv {
    pub fn new() -> Result<Self> {
        let root = env::var_os("SOLINK_ROOT")
            .map(PathBuf::from)
            .or_else(|| home::home_dir().map(|h| h.join(".solink")))
            .ok_or(Error::NoHome)?;
        Ok(Self::from_root(root))
    }

    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            pkgs: root.join("pkgs"),
            shim: root.join("shim"),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn pkgs(&self) -> &Path {
        &self.pkgs
    }

    pub fn shim(&self) -> &Path {
        &self.shim
    }
}

/// The immutable result of the environment build: the composed search path,
/// ready to hand to whatever spawns processes for the session.
///
/// Call sites receive this value explicitly instead of reading ambient
/// process state; [`PreparedEnv::export`] is the single deliberate
/// exception at the session boundary.
#[derive(Clone, Debug)]
pub struct PreparedEnv {
    search_path: SearchPath,
    value: OsString,
}

impl PreparedEnv {
    pub fn new(search_path: SearchPath) -> Result<Self> {
        let value = search_path.join()?;
        Ok(Self { search_path, value })
    }

    pub fn var_name(&self) -> &'static str {
        LIBRARY_PATH_VAR
    }

    pub fn value(&self) -> &OsStr {
        &self.value
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    /// Inject the variable into a child process about to be spawned.
    pub fn apply(&self, cmd: &mut Command) {
        cmd.env(LIBRARY_PATH_VAR, &self.value);
    }

    /// Export the variable process-wide for the rest of the session.
    ///
    /// # Safety
    ///
    /// `env::set_var` is only safe to call in single-threaded programs.
    /// On multi-threaded programs, other threads may read/write the
    /// environment simultaneously through libc functions, causing
    /// undefined behavior.
    pub fn export(&self) {
        // SAFETY: Only safe in single-threaded programs.
        // See the safety documentation above.
        unsafe { env::set_var(LIBRARY_PATH_VAR, &self.value) };
    }

    /// Spawn the user's shell with the variable set and wait for it: the
    /// interactive development session.
    pub fn shell(&self) -> Result<ExitStatus> {
        let shell = shell_name()?;
        let mut child = Command::new(shell)
            .env(LIBRARY_PATH_VAR, &self.value)
            .spawn()
            .map_err(|e| Error::ShellSpawn {
                shell: shell.to_string(),
                source: e,
            })?;
        child.wait().map_err(|e| Error::ShellSpawn {
            shell: shell.to_string(),
            source: e,
        })
    }
}

fn shell_name() -> Result<&'static str> {
    match query_shell::get_shell() {
        Ok(s) => match s {
            Shell::Bash => Ok("bash"),
            Shell::Elvish => Ok("elvish"),
            Shell::Fish => Ok("fish"),
            Shell::Ion => Ok("ion"),
            Shell::Nushell => Ok("nu"),
            Shell::Powershell => Ok("pwsh"),
            Shell::Xonsh => Ok("xonsh"),
            Shell::Zsh => Ok("zsh"),
            _ => Err(Error::UnknownShell),
        },
        Err(_) => Err(Error::UnknownShell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_layout_from_root() {
        let env = SessionEnv::from_root("/srv/solink");
        assert_eq!(env.root(), Path::new("/srv/solink"));
        assert_eq!(env.pkgs(), Path::new("/srv/solink/pkgs"));
        assert_eq!(env.shim(), Path::new("/srv/solink/shim"));
    }

    #[test]
    fn prepared_env_value() {
        let path = SearchPath::compose("/shim", [PathBuf::from("/vendor/lib")]);
        let prepared = PreparedEnv::new(path).unwrap();

        assert_eq!(prepared.var_name(), "LD_LIBRARY_PATH");
        assert_eq!(prepared.value(), OsStr::new("/shim:/vendor/lib"));
    }

    #[test]
    fn apply_injects_variable_into_command() {
        let prepared = PreparedEnv::new(SearchPath::compose("/shim", [])).unwrap();

        let mut cmd = Command::new("true");
        prepared.apply(&mut cmd);

        let injected = cmd
            .get_envs()
            .find(|(k, _)| *k == OsStr::new(LIBRARY_PATH_VAR))
            .and_then(|(_, v)| v);
        assert_eq!(injected, Some(OsStr::new("/shim")));
    }
}
