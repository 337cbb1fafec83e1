//! Host Platform
//!
//! The system collaborator `FontMetrics` depends on: it reports the user's
//! preferred size category, the body style's point sizes, an optional native
//! scaling curve, and announces when the preferred category changes.

use crate::constants::SIZE_CATEGORY_ENV;
use crate::domain::{MetricsConfig, SizeCategory, TextStyle};
use crate::services::{
    ChangeNotifier, NativeCurve, SizeCategoryChanged, StyleCurve, SubscriptionId,
};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

/// Callback invoked when the system's preferred category changes
pub type SystemChangeHandler = Box<dyn Fn() + Send + Sync>;

/// System font services
pub trait Platform: Send + Sync {
    /// The user's current preferred category
    fn preferred_size_category(&self) -> SizeCategory;

    /// Body style point size at `category`
    fn body_point_size(&self, category: SizeCategory) -> f32 {
        TextStyle::Body.point_size(category)
    }

    /// Native scaling curve, if this platform has one
    fn native_curve(&self) -> Option<Arc<dyn NativeCurve>> {
        None
    }

    /// Register a handler for preferred category changes
    fn on_size_category_change(&self, handler: SystemChangeHandler) -> SubscriptionId;

    /// Remove a handler. Returns false if `id` was not registered.
    fn remove_size_category_handler(&self, id: SubscriptionId) -> bool;
}

/// Built-in platform
///
/// The preferred category is held in memory; `set_preferred_size_category`
/// stands in for the user moving the system text size slider.
pub struct SystemPlatform {
    preferred: RwLock<SizeCategory>,
    native_curve: Option<Arc<dyn NativeCurve>>,
    handlers: ChangeNotifier,
}

impl SystemPlatform {
    /// Platform with the style curve available
    pub fn new(preferred: SizeCategory) -> Self {
        let curve: Arc<dyn NativeCurve> = Arc::new(StyleCurve);
        Self {
            preferred: RwLock::new(preferred),
            native_curve: Some(curve),
            handlers: ChangeNotifier::new(),
        }
    }

    /// Platform without a native curve, forcing the linear fallback
    pub fn without_native_curve(preferred: SizeCategory) -> Self {
        Self {
            native_curve: None,
            ..Self::new(preferred)
        }
    }

    /// Resolve the preferred category from the environment, then `config`
    ///
    /// An unparsable environment value is logged and ignored.
    pub fn from_env(config: &MetricsConfig) -> Self {
        let from_env = std::env::var(SIZE_CATEGORY_ENV).ok().and_then(|value| {
            value
                .parse::<SizeCategory>()
                .map_err(|e| warn!(error = %e, var = SIZE_CATEGORY_ENV, "Ignoring size category"))
                .ok()
        });

        let preferred = from_env.or(config.size_category).unwrap_or_default();
        info!(category = %preferred, "System preferred size category");
        Self::new(preferred)
    }

    /// Change the system preference and notify registered handlers
    pub fn set_preferred_size_category(&self, category: SizeCategory) {
        *self.preferred.write() = category;
        info!(category = %category, "System size category changed");
        self.handlers.notify(&SizeCategoryChanged { category });
    }

    /// Number of registered change handlers
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Platform for SystemPlatform {
    fn preferred_size_category(&self) -> SizeCategory {
        *self.preferred.read()
    }

    fn native_curve(&self) -> Option<Arc<dyn NativeCurve>> {
        self.native_curve.clone()
    }

    fn on_size_category_change(&self, handler: SystemChangeHandler) -> SubscriptionId {
        self.handlers.subscribe(move |_| handler())
    }

    fn remove_size_category_handler(&self, id: SubscriptionId) -> bool {
        self.handlers.unsubscribe(id)
    }
}

impl std::fmt::Debug for SystemPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemPlatform")
            .field("preferred", &self.preferred_size_category())
            .field("native_curve", &self.native_curve.is_some())
            .field("handlers", &self.handler_count())
            .finish()
    }
}
