use anyhow::Result;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod driver;
mod patches;
mod plan;
mod types;
mod utils;

#[cfg(test)]
mod tests;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // stdout carries the transcript
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();

    let config = config::Config::from_env();
    let plan = config.load_plan()?;
    debug!(root = %plan.root.display(), targets = plan.targets.len(), "plan loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = driver::run(&plan, &mut out)?;

    for (result, reason) in report.skipped() {
        debug!(
            path = %result.path.display(),
            patch = %result.patch.describe(),
            %reason,
            "skipped"
        );
    }
    debug!(applied = report.applied(), "run finished");
    Ok(())
}
