//! Isolated test environment with temp directory.

use super::TetherCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Provides methods for writing note files and running the CLI against
/// the directory.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the notes directory
    notes_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    ///
    /// The environment includes an empty notes directory that will
    /// be automatically cleaned up when the TestEnv is dropped.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            notes_dir,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Writes a note file at a path relative to the notes directory.
    ///
    /// Creates intermediate directories as needed and returns the full
    /// path of the written file.
    pub fn write_note(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.notes_dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write test note");
        path
    }

    /// Writes a note file into the default glossary subtree.
    pub fn write_glossary_note(&self, rel: &str, content: &str) -> PathBuf {
        self.write_note(&format!("glossary/{rel}"), content)
    }

    /// Creates a TetherCommand configured for this test environment.
    pub fn cmd(&self) -> TetherCommand {
        TetherCommand::new().dir(&self.notes_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // Phase 1: TestEnv Foundation
    // ===========================================

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.notes_dir().exists(), "notes directory should exist");
        assert!(
            env.notes_dir().is_dir(),
            "notes directory should be a directory"
        );
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.notes_dir().to_path_buf()
        };
        // After env is dropped, the temp directory should be cleaned up
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        // The command should have --dir set to the notes directory
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.notes_dir().to_string_lossy());
    }

    // ===========================================
    // Phase 2: Note File Creation
    // ===========================================

    #[test]
    fn test_env_write_note_creates_file() {
        let env = TestEnv::new();
        let path = env.write_note("a/b/note.md", "## One\n");

        assert!(path.exists(), "note file should be created");
        assert!(path.is_file(), "note should be a file");
        assert!(path.starts_with(env.notes_dir()));
    }

    #[test]
    fn test_env_write_glossary_note_lands_in_subtree() {
        let env = TestEnv::new();
        let path = env.write_glossary_note("terms.md", "## Widget\n");

        assert!(path.exists());
        assert!(path.ends_with("glossary/terms.md"));
    }
}
