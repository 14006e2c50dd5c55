//! Apply substitution maps to the files named in the manifest

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use super::substitution::{apply_substitutions, Substitution};
use crate::config::ManifestEntry;
use crate::utils::terminal::{print_info, print_warning};

/// What happened to a single manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file does not exist
    Skipped,
    /// The file was processed
    Updated {
        rewritten: bool,
        renamed_to: Option<PathBuf>,
    },
}

/// Rewrite and/or rename one file under `root`
///
/// Contents are rewritten before the rename so the read happens at the
/// original path. A missing file is not an error.
pub fn update_file(
    root: &Path,
    entry: &ManifestEntry,
    contents_substitutions: &[Substitution],
    filename_substitutions: &[Substitution],
) -> Result<FileOutcome> {
    let path = root.join(&entry.path);
    if !path.is_file() {
        return Ok(FileOutcome::Skipped);
    }

    let mut rewritten = false;
    if entry.contents {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let updated = apply_substitutions(&text, contents_substitutions);
        fs::write(&path, updated)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        rewritten = true;
    }

    let mut renamed_to = None;
    if entry.rename {
        let new_name = renamed_file_name(&path, filename_substitutions)?;
        let new_path = path.with_file_name(&new_name);
        if new_path != path {
            if new_path.exists() {
                bail!(
                    "Cannot rename {} to {}: destination already exists",
                    path.display(),
                    new_path.display()
                );
            }
            fs::rename(&path, &new_path).with_context(|| {
                format!("Failed to rename {} to {}", path.display(), new_path.display())
            })?;
            renamed_to = Some(new_path);
        }
    }

    Ok(FileOutcome::Updated {
        rewritten,
        renamed_to,
    })
}

/// Compute the new file name: substitute the stem, keep the extension
fn renamed_file_name(path: &Path, substitutions: &[Substitution]) -> Result<String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Invalid file name: {}", path.display()))?;
    let new_stem = apply_substitutions(stem, substitutions);

    match path.extension() {
        Some(ext) => {
            let ext = ext
                .to_str()
                .with_context(|| format!("Invalid file extension: {}", path.display()))?;
            Ok(format!("{}.{}", new_stem, ext))
        }
        None => Ok(new_stem),
    }
}

/// Summary of a manifest run
#[derive(Debug, Default)]
pub struct RunReport {
    pub updated: Vec<PathBuf>,
    pub renamed: Vec<(PathBuf, PathBuf)>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Entries that were attempted, whatever the outcome
    pub fn total(&self) -> usize {
        self.updated.len() + self.skipped.len() + self.failed.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} updated, {} renamed, {} skipped, {} failed",
            self.updated.len(),
            self.renamed.len(),
            self.skipped.len(),
            self.failed.len()
        )
    }
}

/// Walks the manifest in order, best-effort
pub struct ManifestRunner<'a> {
    root: PathBuf,
    contents_substitutions: &'a [Substitution],
    filename_substitutions: &'a [Substitution],
    verbose: bool,
}

impl<'a> ManifestRunner<'a> {
    pub fn new(
        root: impl Into<PathBuf>,
        contents_substitutions: &'a [Substitution],
        filename_substitutions: &'a [Substitution],
        verbose: bool,
    ) -> Self {
        Self {
            root: root.into(),
            contents_substitutions,
            filename_substitutions,
            verbose,
        }
    }

    /// Process every entry; a failure is recorded and the run continues
    pub fn run(&self, entries: &[ManifestEntry]) -> RunReport {
        let mut report = RunReport::default();

        for entry in entries {
            let path = PathBuf::from(&entry.path);
            if self.root.join(&path).is_file() {
                println!("Updating {}...", entry.path);
            }

            match update_file(
                &self.root,
                entry,
                self.contents_substitutions,
                self.filename_substitutions,
            ) {
                Ok(FileOutcome::Skipped) => {
                    if self.verbose {
                        print_info(&format!("{} does not exist, skipped", entry.path));
                    }
                    report.skipped.push(path);
                }
                Ok(FileOutcome::Updated {
                    rewritten,
                    renamed_to,
                }) => {
                    if rewritten && self.verbose {
                        print_info(&format!("{} contents rewritten", entry.path));
                    }
                    if let Some(new_path) = renamed_to {
                        let relative = new_path
                            .strip_prefix(&self.root)
                            .map(Path::to_path_buf)
                            .unwrap_or(new_path);
                        println!("  Renamed to {}", relative.display());
                        report.renamed.push((path.clone(), relative));
                    }
                    report.updated.push(path);
                }
                Err(e) => {
                    print_warning(&format!("{}: {:#}", entry.path, e));
                    report.failed.push((path, format!("{:#}", e)));
                }
            }
        }

        report
    }
}
