//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Path of the compiled launcher binary
pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_taskmaster-ai"))
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// File the stub scripts write their name and arguments to, one per line
pub fn args_file(dir: &Path) -> PathBuf {
    dir.join("recorded-args")
}

/// Write an executable stub named `name` into `dir`.
///
/// The stub records `name` followed by its arguments into `STUB_ARGS_FILE`,
/// runs `body`, then exits with `STUB_EXIT` (default 0).
#[cfg(unix)]
pub fn create_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' '{name}' \"$@\" > \"$STUB_ARGS_FILE\"\n{body}\nexit \"${{STUB_EXIT:-0}}\"\n"
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Read back what a stub recorded
pub fn recorded_args(dir: &Path) -> Vec<String> {
    fs::read_to_string(args_file(dir))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Launcher command whose search path is only `bin_dir`
pub fn launcher_command(bin_dir: &Path, state_dir: &Path) -> Command {
    let mut cmd = Command::new(get_binary_path());
    cmd.env("PATH", bin_dir)
        .env("STUB_ARGS_FILE", args_file(state_dir))
        .env_remove("TASKMASTER_AI_LOG")
        .env_remove("RUST_LOG");
    cmd
}
