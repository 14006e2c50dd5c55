//! Naming derivation, template resolution and file rewriting
//!
//! Data flows one way:
//!
//! ```text
//! class name → NamingKeys → templates → substitution map → file mutations
//! ```

pub mod naming;
pub mod substitution;
pub mod template;
pub mod updater;

pub use naming::{derive_candidate_class_name, derive_target_naming_keys, NamingKeys};
pub use template::{resolve_templates, TemplateEntry, TemplatePair};
pub use updater::{ManifestRunner, RunReport};
