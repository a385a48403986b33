//! Launcher configuration: which tool to look for and how to fetch it when missing.

use crate::command::CommandVector;
use std::ffi::OsString;

/// Executable looked up on the search path.
pub const PRIMARY_TOOL: &str = "task-master";

/// Package runner used when the primary tool is not installed.
pub const FALLBACK_RUNNER: &str = "npx";

/// Fixed runner arguments: auto-confirm, fetch the package, run its binary.
pub const FALLBACK_RUNNER_ARGS: [&str; 3] = ["-y", "--package=task-master-ai", "task-master-ai"];

/// Names and flags used to build a [`CommandVector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    primary: OsString,
    runner: OsString,
    runner_args: Vec<OsString>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            primary: PRIMARY_TOOL.into(),
            runner: FALLBACK_RUNNER.into(),
            runner_args: FALLBACK_RUNNER_ARGS.iter().map(OsString::from).collect(),
        }
    }
}

impl LauncherConfig {
    /// Replace the primary tool name.
    #[must_use]
    pub fn with_primary(mut self, primary: impl Into<OsString>) -> Self {
        self.primary = primary.into();
        self
    }

    /// Replace the fallback runner and its fixed arguments.
    #[must_use]
    pub fn with_fallback<I, S>(mut self, runner: impl Into<OsString>, runner_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.runner = runner.into();
        self.runner_args = runner_args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn primary(&self) -> &OsString {
        &self.primary
    }

    #[must_use]
    pub fn runner(&self) -> &OsString {
        &self.runner
    }

    #[must_use]
    pub fn runner_args(&self) -> &[OsString] {
        &self.runner_args
    }

    /// `<primary> <args...>`
    #[must_use]
    pub fn primary_command(&self, args: &[OsString]) -> CommandVector {
        CommandVector::new(self.primary.clone(), args.iter().cloned())
    }

    /// `<runner> <runner_args...> <args...>`
    #[must_use]
    pub fn fallback_command(&self, args: &[OsString]) -> CommandVector {
        CommandVector::new(
            self.runner.clone(),
            self.runner_args.iter().chain(args).cloned(),
        )
    }
}
