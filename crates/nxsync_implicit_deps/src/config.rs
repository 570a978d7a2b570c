use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "nxsync")]
#[command(about = "Update implicitDependencies in project.json files based on actual imports")]
pub struct Config {
    /// Base directory containing the projects to scan (e.g. "my_monorepo" or "src")
    pub base_dir: PathBuf,

    /// Base module name for import matching (defaults to the base_dir value)
    #[arg(long)]
    pub base_module: Option<String>,
}

impl Config {
    /// The namespace prefix used for import matching. Falls back to the
    /// literal `base_dir` value, matching the common layout where the scan
    /// directory is also the importable package root.
    pub fn resolved_base_module(&self) -> String {
        match &self.base_module {
            Some(m) => m.clone(),
            None => self.base_dir.to_string_lossy().into_owned(),
        }
    }
}
