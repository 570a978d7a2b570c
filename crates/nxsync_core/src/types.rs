use serde::Deserialize;

/// Typed view of a `project.json` manifest. Only the field this tool manages
/// is modelled; everything else in the document is opaque passthrough.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectManifest {
    #[serde(default, rename = "implicitDependencies")]
    pub implicit_dependencies: Vec<String>,
}
