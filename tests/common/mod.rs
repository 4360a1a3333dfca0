//! Shared integration-test harness: scratch documentation trees and a
//! helper for running the `modeldocs` binary inside them.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A temporary site checkout with a `models/` directory.
///
/// The directory is removed on drop.
pub struct SiteTree {
    dir: TempDir,
}

impl SiteTree {
    /// Creates an empty tree containing only `models/`.
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::create_dir(dir.path().join("models")).expect("failed to create models dir");
        Self { dir }
    }

    /// The site root (the working directory for spawned commands).
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path below `models/`.
    pub fn model_path(&self, rel: &str) -> PathBuf {
        self.root().join("models").join(rel)
    }

    /// Writes a file below `models/`, creating parent directories.
    #[allow(clippy::missing_panics_doc)]
    pub fn write(&self, rel: &str, content: &str) -> &Self {
        let path = self.model_path(rel);
        fs::create_dir_all(path.parent().expect("path has parent")).expect("mkdir failed");
        fs::write(&path, content).expect("write failed");
        self
    }

    /// Creates an empty directory below `models/`.
    #[allow(clippy::missing_panics_doc)]
    pub fn mkdir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.model_path(rel)).expect("mkdir failed");
        self
    }

    /// Reads a file below `models/`.
    #[allow(clippy::missing_panics_doc)]
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.model_path(rel)).expect("read failed")
    }

    /// Reads a file relative to the site root.
    #[allow(clippy::missing_panics_doc)]
    pub fn read_root(&self, rel: &str) -> String {
        fs::read_to_string(self.root().join(rel)).expect("read failed")
    }

    /// Runs `modeldocs` with `args` from the site root.
    #[allow(clippy::missing_panics_doc)]
    pub fn run(&self, args: &[&str]) -> Output {
        spawn_command_in(self.root(), args)
    }
}

/// Runs `modeldocs` with `args` in `cwd`, returning its captured output.
#[allow(clippy::missing_panics_doc)]
pub fn spawn_command_in(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_modeldocs"))
        .args(args)
        .current_dir(cwd)
        .env_remove("MODELDOCS_MODELS_DIR")
        .env_remove("MODELDOCS_REGISTRY")
        .env_remove("MODELDOCS_LOG_LEVEL")
        .output()
        .expect("failed to run modeldocs")
}

/// Path to a file in `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Stdout of a finished command as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr of a finished command as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
