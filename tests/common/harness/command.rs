//! Fluent wrapper around assert_cmd::Command.

// Test utility; not every helper is used by every test binary
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `note` binary.
///
/// Every command runs with an isolated config file, no inherited editor,
/// and colors disabled.
pub struct NoteCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
    config: Option<PathBuf>,
}

impl NoteCommand {
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            stdin: None,
            config: None,
        }
    }

    /// Sets the `--store` option.
    pub fn store(self, path: &Path) -> Self {
        self.args(["--store".to_string(), path.to_string_lossy().into_owned()])
    }

    /// Selects the one-file-per-note backend.
    pub fn dir_backend(self) -> Self {
        self.args(["--backend", "dir"])
    }

    /// Points `NOTEKEEPER_CONFIG` at `path`.
    pub fn config(mut self, path: &Path) -> Self {
        self.config = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Feeds `input` to the command's stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("note").expect("Failed to find note binary");
        let config = self
            .config
            .unwrap_or_else(|| PathBuf::from("/nonexistent/notekeeper/config.toml"));
        cmd.env("NOTEKEEPER_CONFIG", config)
            .env("NO_COLOR", "1")
            .env_remove("EDITOR")
            .env_remove("VISUAL")
            .env_remove("RUST_LOG")
            .env_remove("NOTEKEEPER_LOG");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.args(&self.args);
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    pub fn add(self, title: &str, content: &str) -> Self {
        self.args(["add", title, "-c", content])
    }

    pub fn list(self) -> Self {
        self.args(["list"])
    }

    pub fn view(self, id: u64) -> Self {
        self.args(["view".to_string(), id.to_string()])
    }

    pub fn edit(self, id: u64) -> Self {
        self.args(["edit".to_string(), id.to_string()])
    }

    pub fn delete(self, id: u64) -> Self {
        self.args(["delete".to_string(), id.to_string()])
    }

    pub fn search(self, query: &str) -> Self {
        self.args(["search", query])
    }

    pub fn tags(self) -> Self {
        self.args(["tags"])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for NoteCommand {
    fn default() -> Self {
        Self::new()
    }
}
