use anyhow::Result;
use log::{debug, trace};
use regex::{Captures, Regex};

/// Rewrite the `implicitDependencies` array in raw manifest text, leaving
/// every other byte — comments, whitespace, key order — untouched.
///
/// The replacement is keyed on the field's declaration line rather than a
/// full re-serialization: the span from the array's opening bracket to its
/// first closing bracket is swapped out and nothing else moves. The field's
/// value is assumed to be a flat array of strings with no nested brackets.
pub fn rewrite_dependencies(original: &str, deps: &[String]) -> Result<String> {
    let span_re = Regex::new(r#"("implicitDependencies"\s*:\s*)\[[\s\S]*?\]"#)?;
    let indent_re = Regex::new(r#"(?m)^([ \t]*)"implicitDependencies"[ \t]*:"#)?;

    if span_re.is_match(original) {
        let rendered = if deps.is_empty() {
            // An empty list is always the literal token, no internal newlines
            "[]".to_string()
        } else if let Some(caps) = indent_re.captures(original) {
            render_with_indent(&caps[1], deps)
        } else {
            // Declaration line not found (e.g. minified manifest); fall back
            // to a generic 2-space-indented rendering
            debug!("No implicitDependencies declaration line found, using fallback formatting");
            serde_json::to_string_pretty(deps)?
        };

        trace!("Replacing implicitDependencies span with {} entries", deps.len());
        let replaced =
            span_re.replace(original, |caps: &Captures| format!("{}{}", &caps[1], rendered));
        Ok(replaced.into_owned())
    } else {
        // Field absent entirely: append it as the last key of the top-level
        // object so the placement is deterministic
        debug!("implicitDependencies field absent, appending as last key");
        let rendered = if deps.is_empty() {
            "[]".to_string()
        } else {
            render_with_indent("  ", deps)
        };
        Ok(insert_as_last_key(original, &rendered))
    }
}

fn render_with_indent(base_indent: &str, deps: &[String]) -> String {
    let item_indent = format!("{base_indent}    ");
    let mut lines = Vec::with_capacity(deps.len() + 2);
    lines.push("[".to_string());
    for (i, dep) in deps.iter().enumerate() {
        let comma = if i + 1 == deps.len() { "" } else { "," };
        lines.push(format!("{item_indent}\"{dep}\"{comma}"));
    }
    lines.push(format!("{base_indent}  ]"));
    lines.join("\n")
}

fn insert_as_last_key(original: &str, rendered: &str) -> String {
    let Some(close) = original.rfind('}') else {
        debug!("No closing brace in manifest, leaving text unchanged");
        return original.to_string();
    };
    let head = original[..close].trim_end();
    let tail = &original[close..];
    let comma = if head.ends_with('{') { "" } else { "," };
    format!("{head}{comma}\n  \"implicitDependencies\": {rendered}\n{tail}")
}
