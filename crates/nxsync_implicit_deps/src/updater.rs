use anyhow::Context;
use log::{debug, trace};
use std::{fs, path::Path};

use nxsync_core::{parse_str, rewrite_dependencies};

use crate::types::UpdateOutcome;

/// Update the `implicitDependencies` array in a project's manifest.
/// `dependencies` must already be sorted; if the stored array holds the same
/// names (in any order) the file is left byte-for-byte untouched.
pub fn update_manifest(project_dir: &Path, dependencies: &[String]) -> UpdateOutcome {
    let manifest_path = project_dir.join("project.json");
    trace!("Updating manifest: {}", manifest_path.display());

    let original = match fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))
    {
        Ok(content) => content,
        Err(e) => return UpdateOutcome::ParseFailed(e),
    };

    let manifest = match parse_str(&original)
        .with_context(|| format!("Failed to parse {}", manifest_path.display()))
    {
        Ok(m) => m,
        Err(e) => return UpdateOutcome::ParseFailed(e),
    };

    // Compare as sorted sequences so stored order never forces a rewrite
    let mut stored = manifest.implicit_dependencies;
    stored.sort();
    if stored == dependencies {
        debug!("No changes needed for {}", manifest_path.display());
        return UpdateOutcome::Unchanged;
    }

    let updated = match rewrite_dependencies(&original, dependencies)
        .with_context(|| format!("Failed to render {}", manifest_path.display()))
    {
        Ok(text) => text,
        Err(e) => return UpdateOutcome::WriteFailed(e),
    };

    match fs::write(&manifest_path, updated)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))
    {
        Ok(()) => {
            debug!("Updated {}", manifest_path.display());
            UpdateOutcome::Changed
        }
        Err(e) => UpdateOutcome::WriteFailed(e),
    }
}
