//! Launch failures and their exit codes.

use std::io;
use thiserror::Error;

/// Exit code when the program could not be found (shell convention).
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit code when the program was found but could not be executed.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

/// Exit code for any other launch failure.
pub const EXIT_FAILURE: i32 = 1;

/// The delegated program could not be run at all.
///
/// A program that runs and exits non-zero is not a `LaunchError`; its code is
/// returned as-is by [`crate::launcher::Launcher::run`].
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed waiting for '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Map the failure to the launcher's own exit code.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                io::ErrorKind::PermissionDenied => EXIT_NOT_EXECUTABLE,
                _ => EXIT_FAILURE,
            },
            LaunchError::Wait { .. } => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_error(kind: io::ErrorKind) -> LaunchError {
        LaunchError::Spawn {
            program: "npx".to_string(),
            source: io::Error::from(kind),
        }
    }

    #[test]
    fn test_exit_codes_follow_shell_conventions() {
        assert_eq!(spawn_error(io::ErrorKind::NotFound).exit_code(), 127);
        assert_eq!(spawn_error(io::ErrorKind::PermissionDenied).exit_code(), 126);
        assert_eq!(spawn_error(io::ErrorKind::Other).exit_code(), 1);
    }

    #[test]
    fn test_wait_error_is_general_failure() {
        let err = LaunchError::Wait {
            program: "task-master".to_string(),
            source: io::Error::from(io::ErrorKind::Interrupted),
        };
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_message_names_program() {
        let message = spawn_error(io::ErrorKind::NotFound).to_string();
        assert!(message.starts_with("failed to start 'npx'"));
    }
}
