//! Check command handler.

use std::path::Path;

use anyhow::{Result, bail};

use super::{build_glossary, glossary_prefix, warn_ambiguities};
use crate::cli::CheckArgs;
use crate::cli::output::{CheckListing, LinkListing, Output, OutputFormat};
use crate::domain::validate_threads;
use crate::index::NoteIndex;
use crate::infra::load_threads;

pub fn handle_check(
    args: &CheckArgs,
    notes_dir: &Path,
    glossary_dir: &Path,
    verbose: bool,
) -> Result<()> {
    // 1. Load and parse every note file
    let threads = load_threads(notes_dir)?;
    if verbose {
        eprintln!(
            "loaded {} threads from {}",
            threads.len(),
            notes_dir.display()
        );
    }

    // 2. Build both indexes
    let prefix = glossary_prefix(glossary_dir);
    let glossary = build_glossary(&threads, &prefix);
    let index = NoteIndex::from_threads(&threads);

    warn_ambiguities(&glossary);

    // 3. Resolve every link and flatten write markers
    let report = validate_threads(&threads, &glossary.name_set(), &index.key_set());

    // 4. Display results
    match args.format {
        OutputFormat::Human => {
            println!("Found {} missed links", report.missed_links().len());
            for link in report.missed_links() {
                println!(" * {link}");
            }
            println!("Found {} topics", glossary.len());
            println!("Found {} write issues", report.write_issues().len());
            for issue in report.write_issues() {
                println!(" * {issue}");
            }
        }
        OutputFormat::Json => {
            let listing = CheckListing {
                missed_links: report
                    .missed_links()
                    .iter()
                    .map(|l| LinkListing {
                        kind: l.kind().keyword().to_string(),
                        target: l.target().to_string(),
                    })
                    .collect(),
                topics: glossary.len(),
                write_issues: report.write_issues().to_vec(),
                ambiguous_topics: glossary.ambiguities().to_vec(),
            };
            let out = Output::new(listing);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    // 5. Exit code: fail only if a link failed to resolve
    if report.has_missed_links() {
        bail!("check failed");
    }
    Ok(())
}
