//! Note struct representing one heading-delimited section of a thread.

use crate::domain::Link;
use serde::Serialize;
use std::fmt;

/// One `##`-level section of a thread.
///
/// A note carries the heading text (trimmed) plus the links and write issues
/// accumulated from instruction lines, in file order. An empty heading is a
/// valid note with an empty name.
///
/// # Examples
///
/// ```
/// use tether::domain::{Link, LinkKind, Note};
///
/// let mut note = Note::new("  Widget  ");
/// note.push_link(Link::new(LinkKind::Link, "Gadget"));
/// assert_eq!(note.name(), "Widget");
/// assert_eq!(note.links().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    name: String,
    links: Vec<Link>,
    write_issues: Vec<String>,
}

impl Note {
    /// Creates a new note from heading text.
    ///
    /// The name is trimmed; an empty result is allowed.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            links: Vec::new(),
            write_issues: Vec::new(),
        }
    }

    /// Returns the note's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the note's links in file order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Returns the note's write issues in file order.
    pub fn write_issues(&self) -> &[String] {
        &self.write_issues
    }

    /// Appends a link.
    pub fn push_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Appends a write issue.
    pub fn push_write_issue(&mut self, issue: impl Into<String>) {
        self.write_issues.push(issue.into());
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
