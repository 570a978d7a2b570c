use anyhow::{Context, Result};
use log::{debug, trace, warn};
use regex::Regex;
use std::{collections::HashSet, fs, path::Path};

/// Build the matcher for `from <base_module>.<segment>` imports. The base
/// module is escaped so it is matched as a literal, dots included.
///
/// Plain `import <base_module>.<segment>` statements are intentionally not
/// matched; only the `from` form counts as a qualifying import.
pub fn import_pattern(base_module: &str) -> Result<Regex> {
    let escaped = regex::escape(base_module);
    Regex::new(&format!(r"from\s+{escaped}\.([^.\s]+)"))
        .with_context(|| format!("Failed to build import pattern for '{base_module}'"))
}

/// Extract the first-level local submodules imported by a source file.
///
/// Never fails: a missing, unreadable or non-UTF-8 file contributes an empty
/// set and a warning, so one bad file cannot abort analysis of its project.
pub fn local_imports_for(file: &Path, pattern: &Regex) -> HashSet<String> {
    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            warn!("Could not read {}: {}", file.display(), e);
            return HashSet::new();
        }
    };

    let imports: HashSet<String> =
        pattern.captures_iter(&content).map(|caps| caps[1].to_string()).collect();

    if !imports.is_empty() {
        trace!("Found local imports in {}: {:?}", file.display(), imports);
    }
    debug!("Extracted {} local imports from {}", imports.len(), file.display());
    imports
}
