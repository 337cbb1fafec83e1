//! Application - Composition Root
//!
//! Builds the platform and the shared `FontMetrics` once and hands them to
//! whatever needs them.

use crate::domain::{MetricsConfig, SizeCategory};
use crate::error::Result;
use crate::services::SystemPlatform;
use crate::state::FontMetrics;
use crate::views::DialogView;
use std::sync::Arc;
use tracing::info;

/// Shared instances for one process
#[derive(Debug, Clone)]
pub struct AppContext {
    config: MetricsConfig,
    platform: Arc<SystemPlatform>,
    metrics: Arc<FontMetrics>,
}

impl AppContext {
    /// Load the config file and build the context
    pub fn bootstrap() -> Result<Self> {
        let config = MetricsConfig::try_load()?;
        Ok(Self::from_config(config))
    }

    /// Build the context from an already loaded config
    pub fn from_config(config: MetricsConfig) -> Self {
        let platform = Arc::new(SystemPlatform::from_env(&config));
        let metrics = FontMetrics::with_config(platform.clone(), &config);
        Self {
            config,
            platform,
            metrics,
        }
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    pub fn platform(&self) -> Arc<SystemPlatform> {
        self.platform.clone()
    }

    pub fn metrics(&self) -> Arc<FontMetrics> {
        self.metrics.clone()
    }
}

/// Walk the dialog screen through every size category, then through a
/// simulated system change
pub fn run_app(ctx: &AppContext) -> Result<()> {
    let metrics = ctx.metrics();
    let view = DialogView::new(metrics.clone())?;
    let initial = metrics.size_category();
    let font = view.dialog().font();

    info!(
        text = view.dialog().text(),
        family = font.family(),
        scaling = ?metrics.scaling(),
        "Dialog created"
    );

    for category in SizeCategory::ALL {
        metrics.set_size_category(category);
        let point_size = view.dialog().font().point_size();
        let margin = metrics.scaled_value(16.0)?;
        info!(category = %category, point_size, margin, "Dialog rescaled");
    }

    // The system change overwrites the manually chosen category
    ctx.platform().set_preferred_size_category(initial);
    let point_size = view.dialog().font().point_size();
    info!(
        category = %metrics.size_category(),
        point_size,
        "Restored system size category"
    );

    Ok(())
}
