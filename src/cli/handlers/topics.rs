//! Topics command handler.

use std::path::Path;

use anyhow::Result;

use super::{build_glossary, glossary_prefix, warn_ambiguities};
use crate::cli::TopicsArgs;
use crate::cli::output::{Output, OutputFormat, TopicListing};
use crate::infra::load_threads;

pub fn handle_topics(args: &TopicsArgs, notes_dir: &Path, glossary_dir: &Path) -> Result<()> {
    let threads = load_threads(notes_dir)?;
    let prefix = glossary_prefix(glossary_dir);
    let glossary = build_glossary(&threads, &prefix);

    warn_ambiguities(&glossary);

    match args.format {
        OutputFormat::Human => {
            if glossary.is_empty() {
                println!("No topics found.");
            } else {
                for name in glossary.names() {
                    if args.counts {
                        println!("{} ({})", name, glossary.occurrences(name).len());
                    } else {
                        println!("{name}");
                    }
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TopicListing> = glossary
                .names()
                .iter()
                .map(|name| TopicListing {
                    name: name.clone(),
                    count: args.counts.then(|| glossary.occurrences(name).len()),
                })
                .collect();
            let out = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
