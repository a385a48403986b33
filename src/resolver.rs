//! Executable lookup on a search path.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Locates executables by name.
///
/// The launcher only sees this trait, so callers can swap the process search
/// path for an explicit one, or for a fake in tests.
pub trait ExecutableResolver {
    /// Full path of the executable `name`, if it can be found.
    fn resolve(&self, name: &OsStr) -> Option<PathBuf>;

    fn is_available(&self, name: &OsStr) -> bool {
        self.resolve(name).is_some()
    }
}

impl<R: ExecutableResolver + ?Sized> ExecutableResolver for &R {
    fn resolve(&self, name: &OsStr) -> Option<PathBuf> {
        (**self).resolve(name)
    }
}

/// Searches the current process's `PATH` (and `PATHEXT` on Windows).
#[derive(Debug, Default, Clone, Copy)]
pub struct PathResolver;

impl ExecutableResolver for PathResolver {
    fn resolve(&self, name: &OsStr) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// Searches an explicit `PATH`-style string instead of the environment.
#[derive(Debug, Clone)]
pub struct SearchPathResolver {
    paths: OsString,
    cwd: PathBuf,
}

impl SearchPathResolver {
    #[must_use]
    pub fn new(paths: impl Into<OsString>, cwd: impl AsRef<Path>) -> Self {
        Self {
            paths: paths.into(),
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    /// Build from a list of directories joined with the platform separator.
    ///
    /// # Errors
    /// Returns an error if a directory contains the path separator.
    pub fn from_dirs<I, P>(dirs: I, cwd: impl AsRef<Path>) -> Result<Self, std::env::JoinPathsError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<OsStr>,
    {
        Ok(Self::new(std::env::join_paths(dirs)?, cwd))
    }
}

impl ExecutableResolver for SearchPathResolver {
    fn resolve(&self, name: &OsStr) -> Option<PathBuf> {
        which::which_in(name, Some(&self.paths), &self.cwd).ok()
    }
}
