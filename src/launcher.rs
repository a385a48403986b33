//! Choosing the command to delegate to, and running it.

use crate::command::CommandVector;
use crate::config::LauncherConfig;
use crate::error::{EXIT_FAILURE, LaunchError};
use crate::resolver::{ExecutableResolver, PathResolver};
use std::ffi::OsString;
use std::process::{Command, ExitStatus, Stdio};

/// Delegates to the primary tool when it is installed, otherwise to the
/// fallback package runner.
#[derive(Debug, Clone)]
pub struct Launcher<R> {
    config: LauncherConfig,
    resolver: R,
}

impl Launcher<PathResolver> {
    /// Launcher with the default tool names, searching the process `PATH`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(LauncherConfig::default(), PathResolver)
    }
}

impl<R: ExecutableResolver> Launcher<R> {
    #[must_use]
    pub fn new(config: LauncherConfig, resolver: R) -> Self {
        Self { config, resolver }
    }

    /// Build the command vector for `args`.
    ///
    /// Never fails: a missing primary tool selects the fallback runner.
    #[must_use]
    pub fn resolve_command(&self, args: &[OsString]) -> CommandVector {
        if self.resolver.is_available(self.config.primary()) {
            tracing::debug!(
                tool = %self.config.primary().to_string_lossy(),
                "primary tool found on search path"
            );
            self.config.primary_command(args)
        } else {
            tracing::debug!(
                tool = %self.config.primary().to_string_lossy(),
                runner = %self.config.runner().to_string_lossy(),
                "primary tool not found, using package runner"
            );
            self.config.fallback_command(args)
        }
    }

    /// Run `command` with inherited stdio and wait for it.
    ///
    /// Returns the child's exit code, which may be non-zero.
    ///
    /// # Errors
    /// Returns [`LaunchError`] if the program cannot be started or waited on.
    pub fn run(&self, command: &CommandVector) -> Result<i32, LaunchError> {
        let program_name = command.program().to_string_lossy().into_owned();

        // Spawn the resolved path when there is one so Windows `.cmd` shims work.
        let program = self
            .resolver
            .resolve(command.program())
            .map_or_else(|| command.program().to_os_string(), OsString::from);

        tracing::debug!(command = %command, program = %program.to_string_lossy(), "spawning");

        let mut child = Command::new(&program)
            .args(command.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: program_name.clone(),
                source,
            })?;

        let status = child.wait().map_err(|source| LaunchError::Wait {
            program: program_name,
            source,
        })?;

        tracing::debug!(%status, "child exited");
        Ok(exit_code(status))
    }

    /// Resolve and run in one step.
    ///
    /// # Errors
    /// See [`Launcher::run`].
    pub fn launch(&self, args: &[OsString]) -> Result<i32, LaunchError> {
        let command = self.resolve_command(args);
        self.run(&command)
    }
}

/// Exit code to report for a finished child.
///
/// Signal deaths map to `128 + signal`, as shells report them.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    EXIT_FAILURE
}
