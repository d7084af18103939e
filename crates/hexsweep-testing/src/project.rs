//! TestProject pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated project tree
//! - Keeping a separate working directory for tools that write to the CWD
//! - Executing the CLI binaries with proper context

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated project tree plus a working directory next to it.
///
/// # Example
/// ```no_run
/// use hexsweep_testing::TestProject;
///
/// let project = TestProject::new()
///     .with_file("src/theme.css", "a { color: #fff; }")
///     .with_file("node_modules/lib/x.css", "b { color: #000; }");
///
/// assert!(project.root().join("src/theme.css").exists());
/// ```
pub struct TestProject {
    temp_dir: TempDir,
    root: PathBuf,
    workdir: PathBuf,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create a new empty project under a fresh temp directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("project");
        let workdir = temp_dir.path().join("work");

        std::fs::create_dir_all(&root).expect("Failed to create project dir");
        std::fs::create_dir_all(&workdir).expect("Failed to create work dir");

        Self {
            temp_dir,
            root,
            workdir,
        }
    }

    /// Project root that the tools scan.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Working directory used for commands; outside the project tree.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a text file relative to the project root.
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        self.with_bytes(relative, content.as_bytes())
    }

    /// Write raw bytes relative to the project root.
    pub fn with_bytes(self, relative: &str, content: &[u8]) -> Self {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write project file");
        self
    }

    /// Add a symlink pointing at a missing target. Reading it fails for every
    /// user, including root, which makes it a reliable unreadable file.
    #[cfg(unix)]
    pub fn with_unreadable(self, relative: &str) -> Self {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        let target = self.temp_dir.path().join("missing-target");
        std::os::unix::fs::symlink(target, &path).expect("Failed to create dangling symlink");
        self
    }

    /// Configure a CLI command to run inside [`Self::workdir`].
    ///
    /// The caller provides the base command (e.g. from `cargo_bin_cmd!("extract-hex")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(&self.workdir)
            .env_remove("HEXSWEEP_CONFIG")
            .env("XDG_CONFIG_HOME", self.temp_dir.path().join("config"))
            .env("NO_COLOR", "1")
    }
}
