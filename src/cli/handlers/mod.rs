//! Command handlers for the CLI.

mod check;
mod links;
mod topics;

pub use check::handle_check;
pub use links::handle_links;
pub use topics::handle_topics;

use std::path::{Component, Path};

use crate::domain::Thread;
use crate::index::Glossary;

// ===========================================
// Shared Utilities
// ===========================================

/// Splits a glossary directory into group path components.
///
/// Only normal components count; `.`, `..` and root markers are dropped so
/// the prefix compares cleanly against thread group paths.
pub(crate) fn glossary_prefix(glossary_dir: &Path) -> Vec<String> {
    glossary_dir
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str().map(str::to_string),
            _ => None,
        })
        .collect()
}

/// Builds a glossary from the threads inside the glossary subtree.
///
/// A thread belongs to the subtree when its group path starts with the
/// glossary prefix. A missing glossary directory simply yields an empty
/// glossary.
pub(crate) fn build_glossary(threads: &[Thread], prefix: &[String]) -> Glossary {
    Glossary::from_threads(threads.iter().filter(|t| t.group_path().starts_with(prefix)))
}

/// Prints one stderr warning per duplicate topic registration.
pub(crate) fn warn_ambiguities(glossary: &Glossary) {
    for name in glossary.ambiguities() {
        eprintln!("warning: ambiguous topic: {name}");
    }
}
