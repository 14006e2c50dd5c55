//! Error types and helpers for user-friendly error messages
//!
//! Every variant carries a hint that tells the user what to do next.

use thiserror::Error;

/// Failures surfaced to the user
#[derive(Error, Debug)]
pub enum InitError {
    /// Repository name could not be discovered
    #[error("Could not determine the repository name: {message}")]
    Discovery { message: String, hint: String },

    /// Tool/executable not found
    #[error("Missing tool: {tool} (required for {required_for})")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// Built-in rewrite configuration is invalid
    #[error("Configuration error: {message}")]
    Config { message: String, hint: Option<String> },

    /// One or more manifest entries could not be updated
    #[error("{failed} of {total} files could not be updated")]
    Update {
        failed: usize,
        total: usize,
        details: Vec<String>,
        hint: String,
    },
}

impl InitError {
    /// Create a discovery error with a hint
    pub fn discovery(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Discovery {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            hint: None,
        }
    }

    /// Create a configuration error with a hint
    pub fn config_error_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an update error from the failed entries of a run
    pub fn update_failure(total: usize, details: Vec<String>) -> Self {
        Self::Update {
            failed: details.len(),
            total,
            details,
            hint: hints::partial_run().to_string(),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        if let InitError::Update { details, .. } = self {
            if !details.is_empty() {
                eprintln!("\n{}", style("FAILED:").cyan().bold());
                for detail in details {
                    eprintln!("  • {}", detail);
                }
            }
        }

        match self {
            InitError::Config { hint, .. } => {
                if let Some(h) = hint {
                    eprintln!("\n{} {}", style("HINT:").yellow().bold(), h);
                }
            }
            InitError::Discovery { hint, .. }
            | InitError::MissingTool { hint, .. }
            | InitError::Update { hint, .. } => {
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
        }

        eprintln!();
    }
}

/// Common error hints
pub mod hints {
    /// Get hint for missing Git
    pub fn git() -> &'static str {
        "Install Git from https://git-scm.com/ or use your package manager:\n\
         • macOS: brew install git\n\
         • Ubuntu: sudo apt install git\n\
         • Windows: winget install Git.Git"
    }

    /// Get hint for running outside a repository
    pub fn not_a_repository() -> &'static str {
        "Run element-init from inside the cloned template repository.\n\
         The repository name is read from the 'origin' remote URL, or from\n\
         the name of the working tree's top-level directory."
    }

    /// Get hint for a run that stopped part-way through the manifest
    pub fn partial_run() -> &'static str {
        "The remaining files were still processed, so the repository is now\n\
         partially renamed. Fix the listed problems, then restore the template\n\
         files (e.g. git checkout -- .) and run element-init again; it is not\n\
         safe to re-run on files that were already renamed."
    }

    /// Get hint for an invalid built-in rewrite configuration
    pub fn invalid_rewrite_config() -> &'static str {
        "Templates may only use {from:<key>} and {to:<key>} tokens where <key> is\n\
         one of: file, fileSuffix, tag, tagName, className, suffix."
    }
}
