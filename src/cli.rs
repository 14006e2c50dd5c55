//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::Parser;

use crate::commands::init::InitCommand;

/// element-init - rename the placeholder custom element of a template repository
///
/// Run once, from the root of a freshly cloned template. Prompts for a class
/// name in PascalCase and renames `custom-element` / `CustomElement` throughout
/// the template's files.
#[derive(Parser, Debug)]
#[command(name = "element-init")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print naming keys and substitution maps
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        InitCommand {
            verbose: self.verbose,
        }
        .execute()
    }
}
