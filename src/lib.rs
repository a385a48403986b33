//! # taskmaster-ai
//!
//! Runs `task-master` when it is on the search path, and otherwise fetches and
//! runs it through `npx -y --package=task-master-ai task-master-ai`.
//! Arguments are forwarded unchanged and the child's exit code is returned.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod resolver;

pub use command::CommandVector;
pub use config::LauncherConfig;
pub use error::LaunchError;
pub use launcher::Launcher;
pub use resolver::{ExecutableResolver, PathResolver, SearchPathResolver};
