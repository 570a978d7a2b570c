/// Outcome of a single manifest update attempt. Failures are carried rather
/// than propagated so one broken manifest never halts the run.
#[derive(Debug)]
pub enum UpdateOutcome {
    /// The manifest was rewritten with a new dependency array.
    Changed,
    /// The stored dependencies already match; file bytes untouched.
    Unchanged,
    /// The manifest was missing or failed to parse; left as-is.
    ParseFailed(anyhow::Error),
    /// Rendering or writing the updated manifest failed.
    WriteFailed(anyhow::Error),
}

#[derive(Debug)]
pub struct ProjectReport {
    pub name: String,
    pub manifest_path: std::path::PathBuf,
    /// Sorted dependency names inferred from imports.
    pub dependencies: Vec<String>,
    pub outcome: UpdateOutcome,
}

#[derive(Debug)]
pub struct SyncResult {
    pub base_dir: std::path::PathBuf,
    pub reports: Vec<ProjectReport>,
    /// Number of manifests actually rewritten.
    pub changed: usize,
}
