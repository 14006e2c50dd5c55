//! Init command implementation
//!
//! Discover the repository name, ask for a class name, derive the target
//! naming identity, resolve the substitution maps and apply them to the
//! manifest. Every step runs once, in order.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::{load_rewrite_rules, RewriteRules};
use crate::error::InitError;
use crate::rewrite::naming::strip_suffix;
use crate::rewrite::{
    derive_candidate_class_name, derive_target_naming_keys, resolve_templates, ManifestRunner,
    RunReport,
};
use crate::utils::git::{GitRepositoryNameSource, RepositoryNameSource};
use crate::utils::terminal::{print_info, print_section, print_success, prompt_line};

/// Initialize the template in the current directory
#[derive(Debug)]
pub struct InitCommand {
    pub verbose: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(self) -> Result<()> {
        let root = std::env::current_dir().context("Failed to get current directory")?;
        let rules = load_rewrite_rules()?;
        let names = GitRepositoryNameSource::new(&root);

        let initializer = Initializer::new(root, &names, &rules, self.verbose);
        let stdin = io::stdin();
        let report = initializer.run(&mut stdin.lock(), &mut io::stdout())?;

        if !report.is_success() {
            let details = report
                .failed
                .iter()
                .map(|(path, error)| format!("{}: {}", path.display(), error))
                .collect();
            return Err(InitError::update_failure(report.total(), details).into());
        }

        Ok(())
    }
}

/// Runs the rename pipeline against one repository root
pub struct Initializer<'a, S: RepositoryNameSource> {
    root: PathBuf,
    names: &'a S,
    rules: &'a RewriteRules,
    verbose: bool,
}

impl<'a, S: RepositoryNameSource> Initializer<'a, S> {
    pub fn new(root: impl Into<PathBuf>, names: &'a S, rules: &'a RewriteRules, verbose: bool) -> Self {
        Self {
            root: root.into(),
            names,
            rules,
            verbose,
        }
    }

    /// Run the whole pipeline, prompting on `input`/`output`
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<RunReport> {
        let source = &self.rules.source;

        let repository_name = self.names.repository_name()?;
        let candidate = strip_suffix(&derive_candidate_class_name(&repository_name), &source.suffix)
            .to_string();
        if self.verbose {
            print_info(&format!("Repository name: {}", repository_name));
            print_info(&format!("Candidate class name: {}", candidate));
        }

        let answer = prompt_line(
            &format!("Custom element class name in PascalCase ({}): ", candidate),
            input,
            output,
        )
        .context("Failed to read class name")?;
        let class_name = resolve_class_name(&answer, &candidate, &source.suffix);

        let target = derive_target_naming_keys(&class_name, source);
        let filename_substitutions = resolve_templates(source, &target, &self.rules.filename)?;
        let contents_substitutions = resolve_templates(source, &target, &self.rules.contents)?;

        if self.verbose {
            dump("Source naming keys", source)?;
            dump("Target naming keys", &target)?;
            dump("Filename substitutions", &filename_substitutions)?;
            dump("Contents substitutions", &contents_substitutions)?;
        }

        let runner = ManifestRunner::new(
            &self.root,
            &contents_substitutions,
            &filename_substitutions,
            self.verbose,
        );
        let report = runner.run(&self.rules.files);

        print_success("Done!");
        println!("{}", report.summary());

        Ok(report)
    }
}

/// Pick the class name from the prompt answer
///
/// A blank answer selects `candidate`. Otherwise the answer is trimmed and
/// one trailing `suffix` is removed, so `FooBarElement` and `FooBar` both
/// yield `FooBar`.
pub fn resolve_class_name(answer: &str, candidate: &str, suffix: &str) -> String {
    let answer = answer.trim();
    if answer.is_empty() {
        return candidate.to_string();
    }
    strip_suffix(answer, suffix).to_string()
}

fn dump<T: Serialize + ?Sized>(title: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize diagnostics")?;
    print_section(title, &json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::git::FixedRepositoryNameSource;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    struct FailingSource;

    impl RepositoryNameSource for FailingSource {
        fn repository_name(&self) -> Result<String, InitError> {
            Err(InitError::discovery("not a git repository", "run it inside one"))
        }
    }

    fn run_with(root: &std::path::Path, repo: &str, answer: &str) -> (RunReport, String) {
        run_with_verbosity(root, repo, answer, false)
    }

    fn run_with_verbosity(
        root: &std::path::Path,
        repo: &str,
        answer: &str,
        verbose: bool,
    ) -> (RunReport, String) {
        let rules = load_rewrite_rules().unwrap();
        let names = FixedRepositoryNameSource(repo.to_string());
        let initializer = Initializer::new(root, &names, &rules, verbose);

        let mut input = Cursor::new(answer.to_string());
        let mut output = Vec::new();
        let report = initializer.run(&mut input, &mut output).unwrap();
        (report, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_resolve_class_name() {
        assert_eq!(resolve_class_name("", "Widget", "Element"), "Widget");
        assert_eq!(resolve_class_name("   ", "Widget", "Element"), "Widget");
        assert_eq!(resolve_class_name(" FooBar ", "Widget", "Element"), "FooBar");
        assert_eq!(resolve_class_name("FooBarElement", "Widget", "Element"), "FooBar");
        assert_eq!(resolve_class_name("foo_bar", "Widget", "Element"), "foo_bar");
    }

    #[test]
    fn test_end_to_end_rename() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/custom-element.ts"), "class CustomElementElement {}").unwrap();

        let (report, prompt) = run_with(root, "custom-element-boilerplate", "FooBar\n");

        assert!(report.is_success());
        assert_eq!(
            prompt,
            "Custom element class name in PascalCase (CustomElementBoilerplate): "
        );
        assert!(!root.join("src/custom-element.ts").exists());
        assert_eq!(
            fs::read_to_string(root.join("src/foo-bar-element.ts")).unwrap(),
            "class FooBarElement {}"
        );
    }

    #[test]
    fn test_end_to_end_template_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("examples")).unwrap();
        fs::write(
            root.join("src/custom-element.ts"),
            "class CustomElementElement extends HTMLElement {}\n\
             export default CustomElementElement\n\
             if (!window.customElements.get('custom-element')) {\n  \
               window.CustomElementElement = CustomElementElement\n  \
               window.customElements.define('custom-element', CustomElementElement)\n\
             }\n\
             declare global {\n  \
               interface HTMLElementTagNameMap {\n    \
                 'custom-element': CustomElementElement\n  \
               }\n\
             }\n",
        )
        .unwrap();
        fs::write(root.join("src/index.ts"), "export * from './custom-element.js'\n").unwrap();
        fs::write(
            root.join("examples/index.html"),
            "<custom-element></custom-element>\n<script src=\"../dist/custom-element.js\"></script>\n",
        )
        .unwrap();
        fs::write(
            root.join("package.json"),
            "{\n  \"name\": \"@github/custom-element-element\",\n  \"main\": \"dist/custom-element.js\"\n}\n",
        )
        .unwrap();

        let (report, _) = run_with(root, "fancy-button", "\n");

        assert!(report.is_success());
        assert_eq!(report.renamed.len(), 1);

        let source = fs::read_to_string(root.join("src/fancy-button-element.ts")).unwrap();
        assert!(source.contains("class FancyButtonElement extends HTMLElement {}"));
        assert!(source.contains("customElements.define('fancy-button', FancyButtonElement)"));
        assert!(source.contains("'fancy-button': FancyButtonElement"));
        assert!(!source.contains("CustomElement"));
        assert!(!source.contains("custom-element"));

        assert_eq!(
            fs::read_to_string(root.join("src/index.ts")).unwrap(),
            "export * from './fancy-button-element.js'\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("examples/index.html")).unwrap(),
            "<fancy-button></fancy-button>\n<script src=\"../dist/fancy-button-element.js\"></script>\n"
        );
        let package = fs::read_to_string(root.join("package.json")).unwrap();
        assert!(package.contains("\"main\": \"dist/fancy-button-element.js\""));
    }

    #[test]
    fn test_package_manifest_keeps_custom_elements_names() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(
            root.join("package.json"),
            r#"{
  "name": "@github/custom-element-element",
  "main": "dist/custom-element.js",
  "customElements": "custom-elements.json",
  "scripts": {
    "manifest": "custom-elements-manifest analyze"
  },
  "devDependencies": {
    "@custom-elements-manifest/analyzer": "^0.9.0"
  }
}
"#,
        )
        .unwrap();
        fs::write(root.join("custom-elements.json"), "{\"modules\": []}\n").unwrap();

        let (report, _) = run_with(root, "fancy-button", "");

        assert!(report.is_success());
        assert!(root.join("custom-elements.json").exists());
        assert_eq!(
            fs::read_to_string(root.join("package.json")).unwrap(),
            r#"{
  "name": "@github/fancy-button-element",
  "main": "dist/fancy-button-element.js",
  "customElements": "custom-elements.json",
  "scripts": {
    "manifest": "custom-elements-manifest analyze"
  },
  "devDependencies": {
    "@custom-elements-manifest/analyzer": "^0.9.0"
  }
}
"#
        );
    }

    #[test]
    fn test_tag_rules_cover_markup_strings_and_css() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(
            root.join("README.md"),
            "```html\n<custom-element open></custom-element>\n```\n\
             Query it with `custom-element` or \"custom-element\".\n\
             custom-element {\n  display: block;\n}\n\
             See custom-elements.json.\n",
        )
        .unwrap();

        run_with(root, "fancy-button", "");

        assert_eq!(
            fs::read_to_string(root.join("README.md")).unwrap(),
            "```html\n<fancy-button open></fancy-button>\n```\n\
             Query it with `fancy-button` or \"fancy-button\".\n\
             fancy-button {\n  display: block;\n}\n\
             See custom-elements.json.\n"
        );
    }

    #[test]
    fn test_verbose_run_matches_quiet_run() {
        let quiet_dir = TempDir::new().unwrap();
        let verbose_dir = TempDir::new().unwrap();
        for dir in [&quiet_dir, &verbose_dir] {
            fs::create_dir_all(dir.path().join("src")).unwrap();
            fs::write(
                dir.path().join("src/custom-element.ts"),
                "class CustomElementElement {}\ncustomElements.define('custom-element', CustomElementElement)\n",
            )
            .unwrap();
        }

        let (quiet, quiet_prompt) = run_with_verbosity(quiet_dir.path(), "fancy-button", "", false);
        let (verbose, verbose_prompt) =
            run_with_verbosity(verbose_dir.path(), "fancy-button", "", true);

        assert!(verbose.is_success());
        assert_eq!(quiet_prompt, verbose_prompt);
        assert_eq!(quiet.summary(), verbose.summary());
        assert_eq!(
            fs::read_to_string(quiet_dir.path().join("src/fancy-button-element.ts")).unwrap(),
            fs::read_to_string(verbose_dir.path().join("src/fancy-button-element.ts")).unwrap()
        );
    }

    #[test]
    fn test_dump_serializes_diagnostics() {
        let rules = load_rewrite_rules().unwrap();
        let target = derive_target_naming_keys("FancyButton", &rules.source);
        let substitutions = resolve_templates(&rules.source, &target, &rules.filename).unwrap();

        assert!(dump("Target naming keys", &target).is_ok());
        assert!(dump("Filename substitutions", &substitutions).is_ok());
    }

    #[test]
    fn test_default_candidate_drops_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/custom-element.ts"), "class CustomElementElement {}").unwrap();

        let (_, prompt) = run_with(root, "fancy-button-element", "");

        assert_eq!(prompt, "Custom element class name in PascalCase (FancyButton): ");
        assert_eq!(
            fs::read_to_string(root.join("src/fancy-button-element.ts")).unwrap(),
            "class FancyButtonElement {}"
        );
    }

    #[test]
    fn test_missing_files_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let (report, _) = run_with(root, "fancy-button", "FancyButton\n");
        let rules = load_rewrite_rules().unwrap();

        assert!(report.is_success());
        assert!(report.updated.is_empty());
        assert_eq!(report.skipped.len(), rules.files.len());
        assert_eq!(fs::read_dir(root).unwrap().count(), 0);
    }

    #[test]
    fn test_discovery_failure_stops_before_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let rules = load_rewrite_rules().unwrap();
        let initializer = Initializer::new(temp_dir.path(), &FailingSource, &rules, false);

        let mut input = Cursor::new("FooBar\n".to_string());
        let mut output = Vec::new();
        let err = initializer.run(&mut input, &mut output).unwrap_err();

        assert!(output.is_empty());
        assert!(matches!(
            err.downcast_ref::<InitError>(),
            Some(InitError::Discovery { .. })
        ));
    }

    #[test]
    fn test_second_run_is_not_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/custom-element.ts"), "class CustomElementElement {}").unwrap();

        run_with(root, "fancy-button", "FooBar\n");
        let (report, _) = run_with(root, "fancy-button", "FooBar\n");

        // The renamed file is no longer in the manifest's view
        assert!(report.renamed.is_empty());
        assert!(root.join("src/foo-bar-element.ts").exists());
    }
}
