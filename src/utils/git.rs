//! Repository name discovery through git

use std::path::PathBuf;

use crate::error::{hints, InitError};
use crate::exec::subprocess::{command_exists, run_command, CommandResult};

/// Something that can tell us the name of the repository being initialized
pub trait RepositoryNameSource {
    fn repository_name(&self) -> Result<String, InitError>;
}

/// Reads the name from git: the `origin` remote first, then the top-level
/// directory of the working tree
#[derive(Debug, Clone)]
pub struct GitRepositoryNameSource {
    root: PathBuf,
}

impl GitRepositoryNameSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn git(&self, args: &[&str]) -> Result<CommandResult, InitError> {
        run_command("git", args, &self.root)
            .map_err(|e| InitError::discovery(format!("{:#}", e), hints::git()))
    }
}

impl RepositoryNameSource for GitRepositoryNameSource {
    fn repository_name(&self) -> Result<String, InitError> {
        if !command_exists("git") {
            return Err(InitError::missing_tool(
                "git",
                "repository name discovery",
                hints::git(),
            ));
        }

        // Get origin remote URL
        let remote = self.git(&["config", "--get", "remote.origin.url"])?;
        if let Some(url) = remote.trimmed_stdout() {
            let name = basename_without_git(url);
            if !name.is_empty() {
                return Ok(name.to_string());
            }
        }

        // Fall back to the working tree directory name
        let toplevel = self.git(&["rev-parse", "--show-toplevel"])?;
        if let Some(dir) = toplevel.trimmed_stdout() {
            let name = basename_without_git(dir);
            if !name.is_empty() {
                return Ok(name.to_string());
            }
        }

        let mut message = format!("{} is not a git repository", self.root.display());
        let stderr = toplevel.stderr.trim();
        if !toplevel.success && !stderr.is_empty() {
            message.push_str(&format!(" (git exited with {}: {})", toplevel.exit_code, stderr));
        }
        Err(InitError::discovery(message, hints::not_a_repository()))
    }
}

/// A fixed name, for tests
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedRepositoryNameSource(pub String);

#[cfg(test)]
impl RepositoryNameSource for FixedRepositoryNameSource {
    fn repository_name(&self) -> Result<String, InitError> {
        Ok(self.0.clone())
    }
}

/// Last path segment of a remote URL or directory, without a `.git` suffix
///
/// Handles `https://host/owner/repo.git`, `git@host:owner/repo.git`,
/// `git@host:repo.git`, trailing slashes and Windows separators.
pub fn basename_without_git(location: &str) -> &str {
    let trimmed = location.trim().trim_end_matches(['/', '\\']);
    let base = trimmed
        .rsplit(['/', '\\', ':'])
        .next()
        .unwrap_or(trimmed);
    base.strip_suffix(".git").unwrap_or(base)
}
