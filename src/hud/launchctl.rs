//! Session-scoped environment variable plumbing
//!
//! `launchctl setenv`/`unsetenv` run against the user's session so that
//! every app launched afterwards inherits the HUD variables. Each call
//! is best-effort: we wait for the subprocess, discard its output, and
//! log launch failures without surfacing them.

use std::process::Command;

use tracing::warn;

const LAUNCHCTL: &str = "/bin/launchctl";

/// Seam over the user-session environment.
///
/// Production goes through `launchctl`; tests record the issued
/// operations instead.
pub trait SessionEnv {
    fn setenv(&self, name: &str, value: &str);
    fn unsetenv(&self, name: &str);
}

/// `launchctl`-backed session environment
pub struct Launchctl;

impl Launchctl {
    fn run(&self, args: &[&str]) {
        let uid = current_uid().to_string();
        let result = Command::new(LAUNCHCTL)
            .arg("asuser")
            .arg(&uid)
            .arg(LAUNCHCTL)
            .args(args)
            .output();

        if let Err(e) = result {
            warn!("Failed to run launchctl {:?}: {}", args, e);
        }
    }
}

impl SessionEnv for Launchctl {
    fn setenv(&self, name: &str, value: &str) {
        self.run(&["setenv", name, value]);
    }

    fn unsetenv(&self, name: &str) {
        self.run(&["unsetenv", name]);
    }
}

#[cfg(unix)]
fn current_uid() -> u32 {
    // SAFETY: getuid has no failure modes and touches no memory.
    unsafe { libc::getuid() }
}

#[cfg(not(unix))]
fn current_uid() -> u32 {
    0
}
