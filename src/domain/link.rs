//! Typed references between notes, glossary topics, and external resources.

use serde::Serialize;
use std::fmt;

/// The kind of reference a link instruction declares.
///
/// Each kind resolves against a different universe:
/// - `Link` targets a glossary topic by name.
/// - `Hardlink` targets an addressable note by its index key
///   (e.g. `group/thread.md/Note Name`).
/// - `Netlink` targets an external resource and is never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Link,
    Hardlink,
    Netlink,
}

impl LinkKind {
    /// All link kinds, in instruction-check order.
    pub const ALL: [LinkKind; 3] = [LinkKind::Link, LinkKind::Hardlink, LinkKind::Netlink];

    /// Returns the instruction keyword for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            LinkKind::Link => "link",
            LinkKind::Hardlink => "hardlink",
            LinkKind::Netlink => "netlink",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A typed reference extracted from a link instruction.
///
/// The target is the raw instruction payload, kept verbatim (no trimming).
/// Links are immutable once created and owned by the note that contains them.
///
/// # Examples
///
/// ```
/// use tether::domain::{Link, LinkKind};
///
/// let link = Link::new(LinkKind::Hardlink, "a/b/note.md/Two");
/// assert_eq!(link.to_string(), "hardlink: \"a/b/note.md/Two\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Link {
    kind: LinkKind,
    target: String,
}

impl Link {
    /// Creates a new link of the given kind.
    pub fn new(kind: LinkKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }

    /// Returns the link's kind.
    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    /// Returns the raw target string.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: \"{}\"", self.kind, self.target)
    }
}
