//! Core types: Thread, Note, Link, CheckReport

mod link;
mod note;
mod thread;
mod validate;
mod validation;

pub use link::{Link, LinkKind};
pub use note::Note;
pub use thread::Thread;
pub use validate::{collect_write_issues, find_missed_links, flatten_write_issue, validate_threads};
pub use validation::CheckReport;
