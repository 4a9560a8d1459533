//! Shared testing utilities for ntpconf CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated directory for request files and templates.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory holding request files and, by default, templates.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `ntpconf` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ntpconf").expect("Failed to locate ntpconf binary");
        cmd.current_dir(self.work_dir()).env_remove("NTPCONF_LOG");
        cmd
    }

    /// Write a request file and return its path.
    pub fn write_request(&self, name: &str, content: &str) -> PathBuf {
        self.write_file(name, content)
    }

    /// Write a template under the work directory and return its path.
    pub fn write_template(&self, id: &str, source: &str) -> PathBuf {
        self.write_file(id, source)
    }

    /// Request with the given facts and a raw TOML `[parameters]` body.
    pub fn toml_request(&self, family: &str, name: &str, release: &str, parameters: &str) -> PathBuf {
        let content = format!(
            "[facts]\nfamily = \"{}\"\nname = \"{}\"\nrelease_major = \"{}\"\n\n[parameters]\n{}",
            family, name, release, parameters
        );
        self.write_request("request.toml", &content)
    }

    fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}
