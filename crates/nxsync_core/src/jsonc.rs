use anyhow::{Context, Result};
use log::{debug, trace};
use std::{fs, path::Path};

use crate::types::ProjectManifest;

/// Strip `//` and `/* ... */` comments from JSONC content so it parses as
/// plain JSON. Line-preserving: the output always has the same number of
/// lines as the input, and every emitted line has trailing whitespace
/// removed.
///
/// Comment markers inside string values are not recognized. That is a known
/// limitation of this document family, not something to fix here; manifests
/// must avoid `//` or `/*` inside string values.
pub fn strip_comments(input: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_block_comment = false;

    for raw in input.split('\n') {
        let mut line = raw.to_string();

        if in_block_comment {
            if let Some(idx) = line.find("*/") {
                // Drop everything up to and including the terminator
                line = line[idx + 2..].to_string();
                in_block_comment = false;
            } else {
                // Whole line is inside the comment; keep the line slot
                out.push(String::new());
                continue;
            }
        }

        if let Some(start) = line.find("/*") {
            let before = line[..start].to_string();
            if let Some(end) = line[start..].find("*/") {
                // Comment starts and ends on the same line
                let after = line[start + end + 2..].to_string();
                line = before + &after;
            } else {
                line = before;
                in_block_comment = true;
            }
        }

        if let Some(idx) = line.find("//") {
            line.truncate(idx);
        }

        let trimmed_len = line.trim_end().len();
        line.truncate(trimmed_len);
        out.push(line);
    }

    out.join("\n")
}

/// Parse JSONC text into a typed manifest view. Unknown keys are ignored.
pub fn parse_str(content: &str) -> Result<ProjectManifest> {
    let stripped = strip_comments(content);
    let manifest: ProjectManifest =
        serde_json::from_str(&stripped).context("Failed to parse manifest as JSON")?;
    Ok(manifest)
}

/// Read and parse a JSONC manifest file. Parse and I/O failures propagate to
/// the caller with the offending path in context.
pub fn parse_file(path: &Path) -> Result<ProjectManifest> {
    trace!("Reading manifest: {}", path.display());
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let manifest =
        parse_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(
        "Parsed manifest {} with {} implicit dependencies",
        path.display(),
        manifest.implicit_dependencies.len()
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_strip_single_line_comments() {
        let jsonc = "{\n  \"name\": \"test\", // This is a comment\n  \"dependencies\": [] // Another comment\n}";
        let result = strip_comments(jsonc);
        assert_eq!(result, "{\n  \"name\": \"test\",\n  \"dependencies\": []\n}");
    }

    #[test]
    fn test_strip_multiline_comments() {
        let jsonc = "{\n  \"name\": \"test\", /* This is a\n  multiline comment */\n  \"dependencies\": []\n}";
        let result = strip_comments(jsonc);
        assert!(result.contains("\"name\": \"test\","));
        assert!(result.contains("\"dependencies\": []"));
        assert!(!result.contains("multiline comment"));
    }

    #[test]
    fn test_strip_block_comment_spanning_many_lines() {
        let jsonc = "{\n  /* This is a long\n     multiline comment\n     spanning several lines */\n  \"name\": \"test\",\n  \"deps\": []\n}";
        let result = strip_comments(jsonc);
        assert!(result.contains("\"name\": \"test\","));
        assert!(result.contains("\"deps\": []"));
        assert!(!result.contains("multiline comment"));
        assert!(!result.contains("spanning several lines"));
    }

    #[test]
    fn test_strip_same_line_block_comment() {
        let jsonc = "{\n  \"name\": /* inline comment */ \"test\",\n  \"deps\": []\n}";
        let result = strip_comments(jsonc);
        assert!(result.contains("\"name\":  \"test\","));
        assert!(!result.contains("inline comment"));
    }

    #[test]
    fn test_strip_preserves_line_count() {
        let jsonc = "{\n  /* a\n     b\n     c */\n  \"name\": \"test\" // tail\n}";
        let result = strip_comments(jsonc);
        assert_eq!(result.split('\n').count(), jsonc.split('\n').count());
    }

    #[test]
    fn test_strip_text_after_block_terminator() {
        let jsonc = "{\n  /* comment\n  still comment */ \"name\": \"test\",\n  \"deps\": []\n}";
        let result = strip_comments(jsonc);
        assert!(result.contains("\"name\": \"test\","));
        assert!(!result.contains("still comment"));
    }

    #[test]
    fn test_stripped_output_is_valid_json() {
        let jsonc = "{\n  // leading comment\n  \"name\": \"test\", /* mid */\n  \"implicitDependencies\": [\n    \"a\", // first\n    \"b\"\n  ]\n}";
        let stripped = strip_comments(jsonc);
        let value: serde_json::Value = serde_json::from_str(&stripped).unwrap();
        assert_eq!(value["name"], "test");
        assert_eq!(value["implicitDependencies"][0], "a");
        assert_eq!(value["implicitDependencies"][1], "b");
    }

    #[test]
    fn test_parse_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project.json");
        fs::write(
            &path,
            "{\n  \"name\": \"proj\", // Project name\n  \"implicitDependencies\": [\n    \"dep1\", // First dependency\n    \"dep2\"\n  ]\n}",
        )
        .unwrap();

        let manifest = parse_file(&path).unwrap();
        assert_eq!(manifest.implicit_dependencies, vec!["dep1", "dep2"]);
    }

    #[test]
    fn test_parse_file_missing_field_defaults_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project.json");
        fs::write(&path, "{\n  \"name\": \"proj\"\n}").unwrap();

        let manifest = parse_file(&path).unwrap();
        assert!(manifest.implicit_dependencies.is_empty());
    }

    #[test]
    fn test_parse_file_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project.json");
        fs::write(&path, "{ \"name\": \"proj\", invalid json }").unwrap();

        assert!(parse_file(&path).is_err());
    }

    #[test]
    fn test_parse_file_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");
        assert!(parse_file(&path).is_err());
    }
}
