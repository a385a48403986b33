//! The command vector: a program name followed by its arguments.

use std::ffi::{OsStr, OsString};
use std::fmt;

/// Ordered program + arguments, built once per invocation.
///
/// The program is always present, so a vector can never be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandVector {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandVector {
    #[must_use]
    pub fn new(program: impl Into<OsString>, args: impl IntoIterator<Item = OsString>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Flatten into `[program, args...]`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for CommandVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
