use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// Find all projects under `base_dir`: any immediate subdirectory holding a
/// top-level `project.json`. Keyed by directory base name; the BTreeMap
/// keeps iteration deterministic for diagnostics.
pub fn find_projects(base_dir: &Path) -> Result<BTreeMap<String, PathBuf>> {
    debug!("Discovering projects under {}", base_dir.display());
    let mut projects = BTreeMap::new();

    let walker =
        WalkBuilder::new(base_dir).hidden(false).ignore(true).git_ignore(true).max_depth(Some(2)).build();

    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() || p.file_name().and_then(|n| n.to_str()) != Some("project.json") {
            continue;
        }
        // Only manifests one level down count; base_dir itself is not a project
        if p.parent() == Some(base_dir) {
            trace!("Skipping manifest at base dir itself: {}", p.display());
            continue;
        }
        if let Some(project_dir) = p.parent()
            && let Some(name) = project_dir.file_name().and_then(|n| n.to_str())
        {
            trace!("Found project '{}' at {}", name, project_dir.display());
            projects.insert(name.to_string(), project_dir.to_path_buf());
        }
    }

    debug!("Discovered {} projects", projects.len());
    Ok(projects)
}

/// Collect every Python source file under a project directory, any depth.
/// Traversal order is not significant; callers union per-file results.
pub fn python_files_for(project_dir: &Path) -> Vec<PathBuf> {
    trace!("Walking {} for Python files", project_dir.display());
    let walker = WalkBuilder::new(project_dir).hidden(false).ignore(true).git_ignore(true).build();

    let mut files: Vec<PathBuf> = Vec::new();
    for dent in walker.filter_map(|e| e.ok()) {
        let p = dent.path();
        if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("py") {
            files.push(p.to_path_buf());
        }
    }
    debug!("Found {} Python files under {}", files.len(), project_dir.display());
    files
}
