//! One-time migration entry point
//!
//! Converts a flat `{key: record}` JSON file into the `{"locations": [...]}`
//! array form. Usage: `locadmin-migrate [input] [output]`, defaulting to
//! `db.json` and `data.json` in the working directory.

use anyhow::Context;
use locadmin::utils::migrate_file;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "db.json".to_string());
    let output = args.next().unwrap_or_else(|| "data.json".to_string());

    let count = migrate_file(&input, &output)
        .with_context(|| format!("migrating {input} to {output}"))?;
    tracing::info!("Converted {count} records from {input} to {output}");

    Ok(())
}
