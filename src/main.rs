//! # taskmaster-ai
//!
//! Launcher for the `task-master` CLI.
//!
//! ## Usage
//!
//! - `taskmaster-ai list` runs `task-master list` if it is installed.
//! - Otherwise it runs `npx -y --package=task-master-ai task-master-ai list`.
//!
//! The exit code is the delegated tool's exit code.

/// Entry point for the CLI tool.
fn main() {
    std::process::exit(taskmaster_ai::cli::run_cli());
}
