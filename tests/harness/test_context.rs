//! Shared testing harness for `rolecheck` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write a catalog file relative to the work directory and return its path.
    pub(crate) fn write_catalog(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create catalog directory");
        }
        fs::write(&path, content).expect("Failed to write catalog");
        path
    }

    /// Build a command for invoking the compiled `rolecheck` binary in the work directory.
    ///
    /// Inherited catalog overrides are cleared so each test controls its own.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("rolecheck").expect("Failed to locate rolecheck binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.root.path())
            .env_remove("ROLECHECK_CATALOG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Build a `rolecheck` command that runs `catalog` with `/bin/sh`.
    pub(crate) fn cli_with_catalog(&self, catalog: &Path) -> Command {
        let mut cmd = self.cli();
        cmd.arg("--shell").arg("/bin/sh").arg("--catalog").arg(catalog);
        cmd
    }

    /// Build a command for invoking the compiled `rolecheck-images` binary.
    pub(crate) fn images_cli(&self, container_tool: &str) -> Command {
        let mut cmd = Command::cargo_bin("rolecheck-images")
            .expect("Failed to locate rolecheck-images binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.root.path())
            .env("ROLECHECK_CONTAINER_TOOL", container_tool)
            .env_remove("RUST_LOG");
        cmd
    }
}
