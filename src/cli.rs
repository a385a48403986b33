//! CLI module containing the main entry point logic.
//!
//! The launcher has no flags of its own: every argument is forwarded.

use crate::launcher::Launcher;
use std::ffi::OsString;

const BIN_NAME: &str = env!("CARGO_PKG_NAME");

/// Run the launcher with the process arguments and return its exit code.
#[must_use]
pub fn run_cli() -> i32 {
    crate::logging::init();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    run_with_args(&Launcher::from_env(), &args)
}

/// Launch `args` with `launcher`, reporting a launch failure on stderr.
pub fn run_with_args<R>(launcher: &Launcher<R>, args: &[OsString]) -> i32
where
    R: crate::resolver::ExecutableResolver,
{
    match launcher.launch(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{BIN_NAME}: {e}");
            e.exit_code()
        }
    }
}
