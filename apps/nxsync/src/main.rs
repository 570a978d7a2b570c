use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::{debug, info};
use nxsync_implicit_deps::{Config, print_report, run_implicit_deps_sync};
use std::io::{BufWriter, Write};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cfg = Config::parse();
    debug!("Parsed CLI arguments: {:?}", cfg);

    let start = Instant::now();

    info!(
        "Running implicit dependency sync for {} (base module: {})",
        cfg.base_dir.display(),
        cfg.resolved_base_module()
    );

    let result = run_implicit_deps_sync(cfg)?;
    debug!("Sync produced {} project reports", result.reports.len());

    print_report(&mut stdout, &result)?;

    let elapsed_ms = start.elapsed().as_millis();
    writeln!(
        stdout,
        "\n{} Finished in {}ms on {} projects.",
        "●".bright_blue(),
        elapsed_ms.to_string().cyan(),
        result.reports.len().to_string().cyan()
    )?;
    stdout.flush()?;

    Ok(())
}
