//! File I/O operations for note threads.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::domain::Thread;
use crate::infra::grammar::parse_thread;

/// Errors during file system operations on note files.
///
/// These are the only fatal conditions of a run; everything found inside
/// a readable file is collected as data instead.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Scans a directory recursively for markdown (.md) files.
///
/// Skips hidden files and directories (starting with `.`). Returns paths
/// relative to the input directory, sorted for deterministic output.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the directory doesn't exist.
/// Returns `FsError::NotADirectory` if the path is not a directory.
pub fn scan_markdown_files(dir: &Path) -> Result<Vec<PathBuf>, FsError> {
    if !dir.exists() {
        return Err(FsError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(has_md_extension)
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect();
    paths.sort();

    Ok(paths)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

fn has_md_extension(entry: &DirEntry) -> bool {
    entry.path().extension().is_some_and(|e| e == "md")
}

/// Reads and parses a single note file into a thread.
///
/// The thread's identity is derived from `path` exactly as given.
/// Returns `Ok(None)` if the path is not a regular file or lacks the
/// `.md` suffix; callers filter these out silently.
///
/// # Errors
///
/// Returns an `FsError` if the file exists but cannot be read.
pub fn read_thread(path: &Path) -> Result<Option<Thread>, FsError> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))?;
    Ok(parse_thread(path, &content))
}

/// Scans `root` and parses every markdown file into a thread.
///
/// Thread identities are derived from root-relative paths, so index keys
/// and group paths are stable no matter where the knowledge base lives.
/// Threads appear in sorted path order.
///
/// # Errors
///
/// Returns an `FsError` if the root cannot be scanned or any discovered
/// file cannot be read.
pub fn load_threads(root: &Path) -> Result<Vec<Thread>, FsError> {
    let mut threads = Vec::new();

    for rel in scan_markdown_files(root)? {
        let full = root.join(&rel);
        let content = std::fs::read_to_string(&full).map_err(|e| FsError::from_io(&full, e))?;
        if let Some(thread) = parse_thread(&rel, &content) {
            threads.push(thread);
        }
    }

    Ok(threads)
}
