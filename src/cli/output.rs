//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single link in listing output.
#[derive(Debug, Serialize)]
pub struct LinkListing {
    pub kind: String,
    pub target: String,
}

/// A note with its links, for the `links` command.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub name: String,
    pub links: Vec<LinkListing>,
}

/// A topic with optional registration count.
#[derive(Debug, Serialize)]
pub struct TopicListing {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Full result of a check run.
#[derive(Debug, Serialize)]
pub struct CheckListing {
    pub missed_links: Vec<LinkListing>,
    pub topics: usize,
    pub write_issues: Vec<String>,
    pub ambiguous_topics: Vec<String>,
}
