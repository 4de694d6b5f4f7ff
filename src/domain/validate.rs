//! Validation functions for parsed threads.
//!
//! This module provides pure functions that resolve every link in a
//! collection of threads against the known topic names and hardlink keys,
//! and flatten write issues into reportable records. All functions are
//! designed to be testable in isolation without I/O; the indexes are
//! read-only inputs.

use std::collections::HashSet;

use crate::domain::{CheckReport, Link, LinkKind, Thread};

/// Resolves every link in every note and collects the failures.
///
/// Resolution rule per kind:
/// - `Netlink`: never checked, always resolved.
/// - `Hardlink`: resolved iff the target is in `hardlink_keys`.
/// - `Link`: resolved iff the target is in `topics`.
///
/// # Arguments
///
/// * `threads` - All parsed threads, in scan order
/// * `topics` - Glossary topic names
/// * `hardlink_keys` - Note index keys (thread paths and `path/note` pairs)
///
/// # Returns
///
/// The unresolved links, cloned, in thread-then-note-then-line order.
pub fn find_missed_links(
    threads: &[Thread],
    topics: &HashSet<String>,
    hardlink_keys: &HashSet<String>,
) -> Vec<Link> {
    let mut missed = Vec::new();

    for thread in threads {
        for note in thread.notes() {
            for link in note.links() {
                let resolved = match link.kind() {
                    LinkKind::Netlink => true,
                    LinkKind::Hardlink => hardlink_keys.contains(link.target()),
                    LinkKind::Link => topics.contains(link.target()),
                };
                if !resolved {
                    missed.push(link.clone());
                }
            }
        }
    }

    missed
}

/// Flattens one write issue into a slash-joined record.
///
/// The issue text is wrapped in double quotes iff it contains a space.
/// The record joins `group_path`, thread name, note name, and the issue
/// with `/`.
pub fn flatten_write_issue(
    group_path: &[String],
    thread_name: &str,
    note_name: &str,
    issue: &str,
) -> String {
    let issue = if issue.contains(' ') {
        format!("\"{issue}\"")
    } else {
        issue.to_string()
    };

    let mut parts: Vec<&str> = group_path.iter().map(String::as_str).collect();
    parts.push(thread_name);
    parts.push(note_name);
    parts.push(&issue);
    parts.join("/")
}

/// Collects the flattened write-issue records of every note.
///
/// Records appear in thread-then-note-then-line order.
pub fn collect_write_issues(threads: &[Thread]) -> Vec<String> {
    let mut records = Vec::new();

    for thread in threads {
        for note in thread.notes() {
            for issue in note.write_issues() {
                records.push(flatten_write_issue(
                    thread.group_path(),
                    thread.name(),
                    note.name(),
                    issue,
                ));
            }
        }
    }

    records
}

/// Runs the full validation pass over a collection of threads.
///
/// Combines link resolution and write-issue flattening into a single
/// report. Never fails: every outcome is data.
pub fn validate_threads(
    threads: &[Thread],
    topics: &HashSet<String>,
    hardlink_keys: &HashSet<String>,
) -> CheckReport {
    let mut report = CheckReport::new();

    for link in find_missed_links(threads, topics, hardlink_keys) {
        report.add_missed_link(link);
    }
    for record in collect_write_issues(threads) {
        report.add_write_issue(record);
    }

    report
}
