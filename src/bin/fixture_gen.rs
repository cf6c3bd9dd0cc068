//! Claimdrop fixture generator - writes the `add_allocations` seed message.

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use claimdrop_fixture_gen::allocations::{self, OUTPUT_FILE, PREVIEW_LEN};
use claimdrop_fixture_gen::output;

fn main() -> Result<()> {
    init_tracing();

    let msg = allocations::build_message();
    info!("Built allocation list with {} entries", msg.entry_count());

    output::write_fixture(Path::new(OUTPUT_FILE), &msg)?;
    info!("Wrote fixture to {}", OUTPUT_FILE);

    println!("First 5 entries of the JSON:");
    println!("{}", output::render_preview(&msg, PREVIEW_LEN)?);
    println!("\nTotal entries: {}", msg.entry_count());
    println!("JSON saved to '{}'", OUTPUT_FILE);

    Ok(())
}

fn init_tracing() {
    // Diagnostics go to stderr; stdout carries only the fixture report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
