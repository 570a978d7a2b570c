use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::types::{SyncResult, UpdateOutcome};

/// Print the per-project report and summary. Everything — progress lines,
/// per-project errors included — goes to the one writer; failures are
/// informational here, the run has already continued past them.
pub fn print_report<W: Write>(writer: &mut W, result: &SyncResult) -> io::Result<()> {
    debug!("Printing report for {} projects", result.reports.len());

    let names: Vec<&str> = result.reports.iter().map(|r| r.name.as_str()).collect();
    writeln!(
        writer,
        "{} Analyzing projects in \"{}\"...",
        "●".bright_blue(),
        result.base_dir.display()
    )?;
    writeln!(
        writer,
        "Found {} projects: {}",
        names.len().to_string().cyan(),
        names.join(", ")
    )?;

    for report in &result.reports {
        writeln!(writer, "\n{} {}", "▸".bright_blue(), report.name.bold())?;
        writeln!(writer, "   Dependencies found: [{}]", report.dependencies.join(", ").cyan())?;

        match &report.outcome {
            UpdateOutcome::Changed => {
                writeln!(
                    writer,
                    "   {} Updated {}",
                    "✓".green().bold(),
                    report.manifest_path.display()
                )?;
            }
            UpdateOutcome::Unchanged => {
                writeln!(
                    writer,
                    "   {}",
                    format!("No changes needed for {}", report.manifest_path.display()).dimmed()
                )?;
            }
            UpdateOutcome::ParseFailed(e) => {
                writeln!(
                    writer,
                    "   {} Error updating {}: {:#}",
                    "✗".red().bold(),
                    report.manifest_path.display(),
                    e
                )?;
            }
            UpdateOutcome::WriteFailed(e) => {
                writeln!(
                    writer,
                    "   {} Unexpected error updating {}: {:#}",
                    "✗".red().bold(),
                    report.manifest_path.display(),
                    e
                )?;
            }
        }
    }

    writeln!(
        writer,
        "\nAnalysis complete. Updated {} project.json files.",
        result.changed.to_string().cyan()
    )?;
    if result.changed > 0 {
        writeln!(writer, "{}", "Review the changes and commit them if they look correct.".dimmed())?;
    } else {
        writeln!(writer, "{}", "All implicitDependencies were already up to date.".dimmed())?;
    }

    writer.flush()?;
    Ok(())
}
