//! element-init - initialize a custom element template repository
//!
//! Renames the placeholder `custom-element` / `CustomElement` identifier in a
//! fixed set of template files to a name chosen by the user.
//!
//! ## Architecture
//!
//! ```text
//! git → prompt → NamingKeys → substitution maps → manifest files
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod rewrite;
mod utils;

use clap::Parser;

use cli::Cli;
use error::InitError;
use utils::terminal::print_error;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.execute() {
        match err.downcast_ref::<InitError>() {
            Some(init_error) => init_error.display_with_hints(),
            None => print_error(&format!("{:#}", err)),
        }
        std::process::exit(1);
    }
}
