//! Login-item registration
//!
//! Registers the app to start at login by dropping a LaunchAgent plist
//! into `~/Library/LaunchAgents` and loading it with `launchctl`. All
//! failures are logged and swallowed: a broken login item must never
//! block the rest of the app.

use std::path::PathBuf;
use std::process::Command;

use tracing::warn;

const AGENT_LABEL: &str = "com.mtlhud.app";

/// OS login-item registration seam
///
/// The production implementation talks to `launchctl`; tests substitute
/// a recording fake.
pub trait LoginItem {
    fn register(&self);
    fn unregister(&self);
    fn is_registered(&self) -> bool;
}

/// LaunchAgent-backed login item
pub struct LaunchAgent;

impl LaunchAgent {
    fn plist_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Library")
            .join("LaunchAgents")
            .join(format!("{AGENT_LABEL}.plist"))
    }

    fn plist_content(program: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Label</key>
    <string>{AGENT_LABEL}</string>
    <key>ProgramArguments</key>
    <array>
        <string>{program}</string>
    </array>
    <key>RunAtLoad</key>
    <true/>
</dict>
</plist>
"#
        )
    }

    fn launchctl(args: &[&str]) {
        match Command::new("/bin/launchctl").args(args).output() {
            Ok(_) => {}
            Err(e) => warn!("Failed to run launchctl {:?}: {}", args, e),
        }
    }
}

impl LoginItem for LaunchAgent {
    fn register(&self) {
        let exe = match std::env::current_exe() {
            Ok(p) => p,
            Err(e) => {
                warn!("Failed to resolve current executable: {}", e);
                return;
            }
        };

        let path = Self::plist_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(
                    "Failed to create LaunchAgents directory ({}): {}",
                    parent.display(),
                    e
                );
                return;
            }
        }

        let content = Self::plist_content(&exe.display().to_string());
        if let Err(e) = std::fs::write(&path, content) {
            warn!("Failed to write login item ({}): {}", path.display(), e);
            return;
        }

        Self::launchctl(&["load", "-w", &path.display().to_string()]);
    }

    fn unregister(&self) {
        let path = Self::plist_path();
        if !path.exists() {
            return;
        }

        Self::launchctl(&["unload", "-w", &path.display().to_string()]);

        if let Err(e) = std::fs::remove_file(&path) {
            warn!("Failed to remove login item ({}): {}", path.display(), e);
        }
    }

    fn is_registered(&self) -> bool {
        Self::plist_path().exists()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Recording login item for store tests
    #[derive(Default)]
    pub struct FakeLogin {
        registered: bool,
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl FakeLogin {
        pub fn registered() -> Self {
            Self {
                registered: true,
                calls: Rc::default(),
            }
        }

        pub fn calls(&self) -> Rc<RefCell<Vec<&'static str>>> {
            Rc::clone(&self.calls)
        }
    }

    impl LoginItem for FakeLogin {
        fn register(&self) {
            self.calls.borrow_mut().push("register");
        }

        fn unregister(&self) {
            self.calls.borrow_mut().push("unregister");
        }

        fn is_registered(&self) -> bool {
            self.registered
        }
    }

    #[test]
    fn plist_names_the_agent_and_program() {
        let content = LaunchAgent::plist_content("/usr/local/bin/mtlhud");
        assert!(content.contains("<string>com.mtlhud.app</string>"));
        assert!(content.contains("<string>/usr/local/bin/mtlhud</string>"));
        assert!(content.contains("<key>RunAtLoad</key>"));
    }
}
