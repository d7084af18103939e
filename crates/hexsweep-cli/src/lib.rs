// NOTE: Two binaries, one library
//
// `project-hex` and `extract-hex` share nothing at runtime, but they share
// argument conventions (--config, --log-level), logging setup and config
// loading. Both binaries are thin wrappers around `run_dump` / `run_colors`
// so the whole flow is testable without spawning a process.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{ColorsCli, DumpCli};
pub use commands::{run_colors, run_dump};

/// Reset SIGPIPE to default behavior to prevent panic on broken pipe
/// (e.g., when piping to `head` or `less` that exits early)
#[cfg(unix)]
pub fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
