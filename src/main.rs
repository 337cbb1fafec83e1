//! font-metrics demo - Main Entry Point
//!
//! Renders the sample dialog headlessly at every size category.

use font_metrics::app::{AppContext, run_app};

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting font-metrics demo...");

    let ctx = AppContext::bootstrap()?;
    run_app(&ctx)?;
    Ok(())
}
