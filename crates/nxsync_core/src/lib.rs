//! Core utilities for nxsync tools.
//!
//! This crate provides the text-processing engines behind the
//! implicit-dependency sync:
//! - Stripping comments from JSONC manifests while preserving line structure
//! - Leniently parsing `project.json` documents
//! - Rewriting the `implicitDependencies` array in place, leaving every
//!   other byte of the manifest untouched
//! - Extracting local `from <base>.<module>` imports from Python sources
//! - Collecting projects and source files from a monorepo

mod collector;
mod imports;
mod jsonc;
mod rewrite;
mod types;

// Re-export public API
pub use collector::{find_projects, python_files_for};
pub use imports::{import_pattern, local_imports_for};
pub use jsonc::{parse_file, parse_str, strip_comments};
pub use rewrite::rewrite_dependencies;
pub use types::ProjectManifest;
