//! Scaled Label
//!
//! A headless text label that keeps its font in step with the size category.

use crate::domain::Font;
use crate::error::Result;
use crate::services::SubscriptionId;
use crate::state::FontMetrics;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Label whose font is re-fetched on every size category change
pub struct ScaledLabel {
    metrics: Arc<FontMetrics>,
    text: Arc<str>,
    base_font: Font,
    font: Arc<RwLock<Font>>,
    subscription: SubscriptionId,
}

impl ScaledLabel {
    /// Create the label and subscribe it to `metrics`
    pub fn attach(
        metrics: Arc<FontMetrics>,
        text: impl Into<Arc<str>>,
        base_font: Font,
    ) -> Result<Self> {
        let text = text.into();
        let font = Arc::new(RwLock::new(metrics.scaled_font(&base_font)?));

        // Weak, so the subscription does not keep the metrics alive
        let weak = Arc::downgrade(&metrics);
        let slot = font.clone();
        let base = base_font.clone();
        let subscription = metrics.subscribe(move |event| {
            let Some(metrics) = weak.upgrade() else {
                return;
            };
            match metrics.scaled_font(&base) {
                Ok(scaled) => {
                    debug!(
                        category = %event.category,
                        point_size = scaled.point_size(),
                        "Label font rescaled"
                    );
                    *slot.write() = scaled;
                }
                Err(e) => warn!(error = %e, "Failed to rescale label font"),
            }
        });

        Ok(Self {
            metrics,
            text,
            base_font,
            font,
            subscription,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn base_font(&self) -> &Font {
        &self.base_font
    }

    /// Font currently used to draw the label
    pub fn font(&self) -> Font {
        self.font.read().clone()
    }
}

impl Drop for ScaledLabel {
    fn drop(&mut self) {
        self.metrics.unsubscribe(self.subscription);
    }
}

impl std::fmt::Debug for ScaledLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaledLabel")
            .field("text", &self.text)
            .field("font", &self.font())
            .finish()
    }
}
