//! Line-oriented note grammar and the thread parser.
//!
//! Note files use a line convention rather than full Markdown semantics:
//! `# ` titles are ignored, `## ` headings open notes, and
//! `(<keyword> <payload>)` lines attach links or write issues to the
//! currently open note. Classification operates on whitespace-trimmed
//! lines and is pure; the parser threads an explicit open-note state
//! through the line stream.

use std::path::{Component, Path};

use crate::domain::{Link, LinkKind, Note, Thread};

/// Classification of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `# ` prefix; no structural effect.
    DocumentTitle,
    /// `## ` prefix; opens a note named by the (untrimmed) remainder.
    NoteHeading(&'a str),
    /// A well-formed link instruction with its raw payload.
    LinkInstruction(LinkKind, &'a str),
    /// A well-formed write instruction with its raw payload.
    WriteInstruction(&'a str),
    /// Anything else, including malformed instructions.
    Content,
}

/// Extracts the payload of an instruction line for one keyword.
///
/// A line matches iff it starts with `"(<keyword> "`, ends with `")"`,
/// and is strictly longer than the empty-payload form `"(<keyword> )"`.
/// The payload is the substring between prefix and trailing parenthesis,
/// not further trimmed.
fn instruction_payload<'a>(keyword: &str, line: &'a str) -> Option<&'a str> {
    let rest = line
        .strip_prefix('(')?
        .strip_prefix(keyword)?
        .strip_prefix(' ')?;
    let payload = rest.strip_suffix(')')?;
    if payload.is_empty() {
        return None;
    }
    Some(payload)
}

/// Classifies one trimmed line.
///
/// The instruction prefixes are mutually exclusive, so a line matches at
/// most one keyword.
pub fn classify(line: &str) -> LineClass<'_> {
    if line.starts_with("# ") {
        return LineClass::DocumentTitle;
    }
    if let Some(name) = line.strip_prefix("## ") {
        return LineClass::NoteHeading(name);
    }
    for kind in LinkKind::ALL {
        if let Some(payload) = instruction_payload(kind.keyword(), line) {
            return LineClass::LinkInstruction(kind, payload);
        }
    }
    if let Some(payload) = instruction_payload("write", line) {
        return LineClass::WriteInstruction(payload);
    }
    LineClass::Content
}

/// Parser state: either no note is open, or one note is accumulating lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParserState {
    #[default]
    Idle,
    Open(Note),
}

/// Advances the parser by one trimmed line.
///
/// Returns the next state plus at most one completed note. A heading
/// closes any open note before opening the next; instructions attach to
/// the open note and are ignored while idle.
pub fn step(state: ParserState, line: &str) -> (ParserState, Option<Note>) {
    match classify(line) {
        LineClass::DocumentTitle | LineClass::Content => (state, None),
        LineClass::NoteHeading(name) => {
            let closed = match state {
                ParserState::Open(note) => Some(note),
                ParserState::Idle => None,
            };
            (ParserState::Open(Note::new(name)), closed)
        }
        LineClass::LinkInstruction(kind, payload) => match state {
            ParserState::Idle => (ParserState::Idle, None),
            ParserState::Open(mut note) => {
                note.push_link(Link::new(kind, payload));
                (ParserState::Open(note), None)
            }
        },
        LineClass::WriteInstruction(payload) => match state {
            ParserState::Idle => (ParserState::Idle, None),
            ParserState::Open(mut note) => {
                note.push_write_issue(payload);
                (ParserState::Open(note), None)
            }
        },
    }
}

/// Parses file content into notes.
///
/// Lines are trimmed before classification. A note still open at end of
/// input is closed.
pub fn parse_notes(content: &str) -> Vec<Note> {
    let mut state = ParserState::default();
    let mut notes = Vec::new();

    for line in content.lines() {
        let (next, closed) = step(state, line.trim());
        if let Some(note) = closed {
            notes.push(note);
        }
        state = next;
    }
    if let ParserState::Open(note) = state {
        notes.push(note);
    }

    notes
}

/// Derives a thread's identity from its path.
///
/// Returns the slash-joined path, the name (filename with `.md` stripped)
/// and the ancestor directory names root-first. Paths without the `.md`
/// suffix yield `None`.
fn thread_identity(path: &Path) -> Option<(String, String, Vec<String>)> {
    let parts: Vec<&str> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();

    let (filename, groups) = parts.split_last()?;
    let name = filename.strip_suffix(".md")?;

    Some((
        parts.join("/"),
        name.to_string(),
        groups.iter().map(|g| g.to_string()).collect(),
    ))
}

/// Parses file content into a thread identified by `path`.
///
/// Returns `None` for paths without the `.md` suffix; callers filter
/// these out silently. The path is used as given, so callers are
/// expected to hand in paths relative to the knowledge-base root.
pub fn parse_thread(path: &Path, content: &str) -> Option<Thread> {
    let (joined, name, group_path) = thread_identity(path)?;
    let mut thread = Thread::new(joined, name, group_path);
    for note in parse_notes(content) {
        thread.push_note(note);
    }
    Some(thread)
}
