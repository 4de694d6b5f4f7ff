//! tether - consistency checker for linked markdown notes

pub mod cli;
pub mod domain;
pub mod index;
pub mod infra;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_check, handle_links, handle_topics},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let notes_dir = config.notes_dir(cli.dir.as_ref());
    let glossary_dir = config.glossary_dir(cli.glossary.as_ref());
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Check(args) => handle_check(args, &notes_dir, &glossary_dir, verbose),
        Command::Links(args) => handle_links(args, &notes_dir),
        Command::Topics(args) => handle_topics(args, &notes_dir, &glossary_dir),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "tether", &mut std::io::stdout());
            Ok(())
        }
    }
}
