use log::{debug, trace};
use regex::Regex;
use std::{collections::HashSet, path::Path};

use nxsync_core::{local_imports_for, python_files_for};

/// Derive a project's cross-project dependency set from its imports: union
/// the local imports of every Python file under the project, keep only names
/// of other known projects, and drop any self-reference.
pub fn analyze_dependencies(
    project_name: &str,
    project_dir: &Path,
    all_projects: &HashSet<String>,
    pattern: &Regex,
) -> HashSet<String> {
    debug!("Analyzing dependencies of project '{}'", project_name);
    let mut dependencies = HashSet::new();

    for py_file in python_files_for(project_dir) {
        for imported in local_imports_for(&py_file, pattern) {
            if imported != project_name && all_projects.contains(&imported) {
                trace!("Project '{}' depends on '{}' via {}", project_name, imported, py_file.display());
                dependencies.insert(imported);
            }
        }
    }

    debug!("Project '{}' has {} dependencies", project_name, dependencies.len());
    dependencies
}
