use std::io::{self, Write};

use anyhow::Context;
use shape_metrics::{write_catalog, Catalog};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shape_metrics=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let catalog = Catalog::demo();
    tracing::debug!(shapes = catalog.len(), "demo catalog built");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_catalog(&mut out, &catalog).context("failed to write shape report")?;
    out.flush().context("failed to flush shape report")?;
    Ok(())
}
