//! Links command handler.

use std::path::Path;

use anyhow::{Result, anyhow};

use crate::cli::LinksArgs;
use crate::cli::output::{LinkListing, NoteListing, Output, OutputFormat};
use crate::infra::read_thread;

pub fn handle_links(args: &LinksArgs, notes_dir: &Path) -> Result<()> {
    let path = notes_dir.join(&args.file);
    let thread = read_thread(&path)?.ok_or_else(|| anyhow!("not a note file: {}", path.display()))?;

    match args.format {
        OutputFormat::Human => {
            for note in thread.notes() {
                println!("{}", note.name());
                for link in note.links() {
                    println!(" * {link}");
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = thread
                .notes()
                .iter()
                .map(|note| NoteListing {
                    name: note.name().to_string(),
                    links: note
                        .links()
                        .iter()
                        .map(|l| LinkListing {
                            kind: l.kind().keyword().to_string(),
                            target: l.target().to_string(),
                        })
                        .collect(),
                })
                .collect();
            let out = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
