use anyhow::{Context, Result};
use tracing::error;
use tracing_subscriber::EnvFilter;

use daily_temperature::{run, AggregatorConfig};

fn main() {
    // Logs go to stderr; stdout only carries the confirmation line
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run_aggregation() {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run_aggregation() -> Result<()> {
    let config = AggregatorConfig::default();

    let summary = run(&config).with_context(|| {
        format!(
            "daily aggregation failed (data dir {})",
            config.data_dir().display()
        )
    })?;

    println!(
        "Wrote {} days to {}",
        summary.days_written(),
        summary.output_path.display()
    );

    Ok(())
}
