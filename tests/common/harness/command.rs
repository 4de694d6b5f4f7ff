//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `tether` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct TetherCommand {
    args: Vec<String>,
}

impl TetherCommand {
    /// Creates a new command for the `tether` binary.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Sets the `--dir` option to specify the notes directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Sets the `--glossary` option to specify the glossary subtree.
    pub fn glossary(mut self, path: &str) -> Self {
        self.args.push("--glossary".to_string());
        self.args.push(path.to_string());
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

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("tether").expect("Failed to find tether binary");
        cmd.args(&self.args);
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

    /// Configures for the `check` command.
    pub fn check(self) -> Self {
        self.args(["check"])
    }

    /// Configures for the `links` command with a file path.
    pub fn links(self, file: &str) -> Self {
        self.args(["links", file])
    }

    /// Configures for the `topics` command.
    pub fn topics(self) -> Self {
        self.args(["topics"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--counts` to the command.
    pub fn with_counts(self) -> Self {
        self.args(["--counts"])
    }
}

impl Default for TetherCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ===========================================
    // Phase 3: TetherCommand Basics
    // ===========================================

    #[test]
    fn test_command_runs_binary() {
        // Just verify the binary can be found and runs (with --help)
        TetherCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_dir() {
        let temp = TempDir::new().unwrap();
        let cmd = TetherCommand::new().dir(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_output_success() {
        let output = TetherCommand::new().args(["--help"]).output_success();
        assert!(output.contains("tether") || output.contains("notes"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = TetherCommand::new().topics().with_counts().format_json();
        let args = cmd.get_args();
        assert!(args.contains(&"topics".to_string()));
        assert!(args.contains(&"--counts".to_string()));
        assert!(args.contains(&"--format".to_string()));
        assert!(args.contains(&"json".to_string()));
    }
}
