//! Implicit-dependency sync for Nx-style monorepos of Python projects.
//!
//! This crate scans every project under a base directory for
//! `from <base_module>.<project> import ...` statements, derives each
//! project's cross-project dependency set, and rewrites the
//! `implicitDependencies` array in its `project.json` — preserving comments
//! and formatting everywhere else in the manifest.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use nxsync_implicit_deps::{Config, run_implicit_deps_sync};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     base_dir: std::path::PathBuf::from("my_monorepo"),
//!     base_module: None,
//! };
//!
//! let result = run_implicit_deps_sync(cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! nxsync_implicit_deps::print_report(&mut stdout, &result)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod analyzer;
mod checker;
mod config;
mod reporter;
mod types;
mod updater;

// Re-export public API
pub use analyzer::analyze_dependencies;
pub use checker::run_implicit_deps_sync;
pub use config::Config;
pub use reporter::print_report;
pub use types::{ProjectReport, SyncResult, UpdateOutcome};
pub use updater::update_manifest;
