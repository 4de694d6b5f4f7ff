//! File I/O and the line-oriented note grammar

mod fs;
mod grammar;

pub use fs::{load_threads, read_thread, scan_markdown_files, FsError};
pub use grammar::{classify, parse_notes, parse_thread, step, LineClass, ParserState};
