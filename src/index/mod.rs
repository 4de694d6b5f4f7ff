//! Glossary and note-key indexes built from parsed threads

mod glossary;
mod notes;

pub use glossary::{Glossary, TopicOccurrence};
pub use notes::{note_key, IndexEntry, NoteIndex};
