use anyhow::Result;
use log::{debug, info};
use std::collections::HashSet;

use nxsync_core::{find_projects, import_pattern};

use crate::{
    analyzer::analyze_dependencies,
    config::Config,
    types::{ProjectReport, SyncResult, UpdateOutcome},
    updater::update_manifest,
};

/// Run the full sync: discover projects, infer each one's dependency set
/// from its imports, and rewrite manifests that are out of date. Per-project
/// failures are carried in the reports; only discovery errors and invalid
/// configuration are fatal.
pub fn run_implicit_deps_sync(cfg: Config) -> Result<SyncResult> {
    let base_module = cfg.resolved_base_module();
    info!(
        "Syncing implicit dependencies under {} (base module '{}')",
        cfg.base_dir.display(),
        base_module
    );

    let pattern = import_pattern(&base_module)?;
    let projects = find_projects(&cfg.base_dir)?;
    let all_names: HashSet<String> = projects.keys().cloned().collect();
    info!("Found {} projects", projects.len());

    let mut reports = Vec::with_capacity(projects.len());
    let mut changed = 0;

    for (name, dir) in &projects {
        debug!("Processing project '{}'", name);

        let mut dependencies: Vec<String> =
            analyze_dependencies(name, dir, &all_names, &pattern).into_iter().collect();
        dependencies.sort();
        debug!("Project '{}' dependencies: {:?}", name, dependencies);

        let outcome = update_manifest(dir, &dependencies);
        if matches!(outcome, UpdateOutcome::Changed) {
            changed += 1;
        }

        reports.push(ProjectReport {
            name: name.clone(),
            manifest_path: dir.join("project.json"),
            dependencies,
            outcome,
        });
    }

    info!("Sync complete, {} manifests updated", changed);
    Ok(SyncResult { base_dir: cfg.base_dir, reports, changed })
}
