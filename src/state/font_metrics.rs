//! Font Metrics
//!
//! Scales fonts and layout values for the active size category and announces
//! every assignment of that category to subscribers.
//!
//! ```text
//! system slider ─▶ Platform ─▶ delegate ─▶ set_size_category ─▶ subscribers
//!                                                 ▲                 │
//!                              manual override ───┘                 ▼
//!                                                         scaled_font(base)
//! ```
//!
//! A manually assigned category is overwritten by the next system change
//! while the default delegate is installed.

use crate::constants::REFERENCE_BODY_POINT_SIZE;
use crate::domain::font::ensure_positive;
use crate::domain::{Font, MetricsConfig, ScalingMode, SizeCategory};
use crate::error::{Error, Result};
use crate::services::{
    ChangeNotifier, NativeCurve, Platform, SizeCategoryChanged, SubscriptionId,
};
use crossbeam_channel::Receiver;
use parking_lot::{ReentrantMutex, RwLock};
use std::sync::{Arc, Weak};
use tracing::{debug, info};

/// Reacts to the system's preferred category changing
pub trait SizeCategoryDelegate: Send + Sync {
    fn size_category_changed(&self, metrics: &FontMetrics);
}

/// Default delegate: adopt the system's new preference
#[derive(Debug, Clone, Copy, Default)]
pub struct FollowSystem;

impl SizeCategoryDelegate for FollowSystem {
    fn size_category_changed(&self, metrics: &FontMetrics) {
        metrics.sync_with_system();
    }
}

/// Scaling strategy, resolved once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingKind {
    /// Platform's per-style curve
    Native,
    /// Body-size ratio
    Linear,
}

enum Scaling {
    Native(Arc<dyn NativeCurve>),
    Linear,
}

/// Dynamic type scaler
pub struct FontMetrics {
    platform: Arc<dyn Platform>,
    scaling: Scaling,
    size_category: RwLock<SizeCategory>,
    notifier: ChangeNotifier,
    delegate: RwLock<Option<Arc<dyn SizeCategoryDelegate>>>,
    /// Held across store and notify so events arrive in assignment order
    assign: ReentrantMutex<()>,
    system_subscription: SubscriptionId,
}

impl FontMetrics {
    /// Create a scaler starting at the platform's preferred category
    pub fn new(platform: Arc<dyn Platform>) -> Arc<Self> {
        let category = platform.preferred_size_category();
        Self::build(platform, category, ScalingMode::Auto)
    }

    /// Create a scaler starting at an explicit category
    pub fn with_size_category(platform: Arc<dyn Platform>, category: SizeCategory) -> Arc<Self> {
        Self::build(platform, category, ScalingMode::Auto)
    }

    /// Create a scaler honoring the configured scaling mode
    pub fn with_config(platform: Arc<dyn Platform>, config: &MetricsConfig) -> Arc<Self> {
        let category = platform.preferred_size_category();
        Self::build(platform, category, config.scaling)
    }

    fn build(platform: Arc<dyn Platform>, category: SizeCategory, mode: ScalingMode) -> Arc<Self> {
        let scaling = match (mode, platform.native_curve()) {
            (ScalingMode::Auto, Some(curve)) => Scaling::Native(curve),
            _ => Scaling::Linear,
        };

        let delegate: Arc<dyn SizeCategoryDelegate> = Arc::new(FollowSystem);
        let metrics = Arc::new_cyclic(|weak: &Weak<Self>| {
            let weak = weak.clone();
            let system_subscription = platform.on_size_category_change(Box::new(move || {
                if let Some(metrics) = weak.upgrade() {
                    metrics.handle_system_change();
                }
            }));

            Self {
                platform,
                scaling,
                size_category: RwLock::new(category),
                notifier: ChangeNotifier::new(),
                delegate: RwLock::new(Some(delegate)),
                assign: ReentrantMutex::new(()),
                system_subscription,
            }
        });
        info!(
            category = %category,
            scaling = ?metrics.scaling(),
            "Font metrics initialized"
        );

        metrics
    }

    // ==================== Size Category ====================

    pub fn size_category(&self) -> SizeCategory {
        *self.size_category.read()
    }

    /// Assign the category and notify every subscriber before returning
    ///
    /// Assigning the current value again still notifies. Concurrent
    /// assignments are serialized, so the last event delivered always matches
    /// `size_category()`.
    pub fn set_size_category(&self, category: SizeCategory) {
        let _assign = self.assign.lock();
        *self.size_category.write() = category;
        info!(category = %category, "Size category assigned");
        self.notifier.notify(&SizeCategoryChanged { category });
    }

    /// Overwrite the category with the platform's current preference
    pub fn sync_with_system(&self) {
        self.set_size_category(self.platform.preferred_size_category());
    }

    // ==================== System Changes ====================

    /// Replace the delegate consulted on system changes. `None` ignores them.
    pub fn set_delegate(&self, delegate: Option<Arc<dyn SizeCategoryDelegate>>) {
        *self.delegate.write() = delegate;
    }

    /// Called when the platform reports a new preferred category
    pub fn handle_system_change(&self) {
        let delegate = self.delegate.read().clone();
        match delegate {
            Some(delegate) => delegate.size_category_changed(self),
            None => debug!("System size category change ignored, no delegate"),
        }
    }

    // ==================== Subscriptions ====================

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&SizeCategoryChanged) + Send + Sync + 'static,
    {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Channel receiving every subsequent change event
    pub fn events(&self) -> Receiver<SizeCategoryChanged> {
        self.notifier.channel()
    }

    // ==================== Scaling ====================

    pub fn scaling(&self) -> ScalingKind {
        match self.scaling {
            Scaling::Native(_) => ScalingKind::Native,
            Scaling::Linear => ScalingKind::Linear,
        }
    }

    /// Body size at `category` over the reference body size
    pub fn scale_factor(&self, category: SizeCategory) -> f32 {
        self.platform.body_point_size(category) / REFERENCE_BODY_POINT_SIZE
    }

    fn scaled_point_size(&self, font: &Font) -> f32 {
        let category = self.size_category();
        match &self.scaling {
            Scaling::Native(curve) => {
                curve.scaled_point_size(font.point_size(), font.text_style(), category)
            }
            Scaling::Linear => self.scale_factor(category) * font.point_size(),
        }
    }

    /// `font` at its size for the current category
    pub fn scaled_font(&self, font: &Font) -> Result<Font> {
        font.with_size(self.scaled_point_size(font))
    }

    /// `font` at its size for the current category, capped at `maximum_point_size`
    pub fn scaled_font_with_max(&self, font: &Font, maximum_point_size: f32) -> Result<Font> {
        ensure_positive("maximum point size", maximum_point_size)?;
        font.with_size(self.scaled_point_size(font).min(maximum_point_size))
    }

    /// Scale a layout value such as a margin or icon size
    pub fn scaled_value(&self, value: f32) -> Result<f32> {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidArgument {
                message: format!("value must be finite and non-negative, got {value}"),
            });
        }

        let category = self.size_category();
        Ok(match &self.scaling {
            Scaling::Native(curve) => curve.scaled_value(value, category),
            Scaling::Linear => self.scale_factor(category) * value,
        })
    }
}

impl Drop for FontMetrics {
    fn drop(&mut self) {
        self.platform.remove_size_category_handler(self.system_subscription);
    }
}

impl std::fmt::Debug for FontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontMetrics")
            .field("size_category", &self.size_category())
            .field("scaling", &self.scaling())
            .field("notifier", &self.notifier)
            .field("has_delegate", &self.delegate.read().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TextStyle;
    use crate::services::SystemPlatform;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn linear(category: SizeCategory) -> (Arc<SystemPlatform>, Arc<FontMetrics>) {
        let platform = Arc::new(SystemPlatform::without_native_curve(category));
        let metrics = FontMetrics::new(platform.clone());
        (platform, metrics)
    }

    fn native(category: SizeCategory) -> (Arc<SystemPlatform>, Arc<FontMetrics>) {
        let platform = Arc::new(SystemPlatform::new(category));
        let metrics = FontMetrics::new(platform.clone());
        (platform, metrics)
    }

    fn font(size: f32) -> Font {
        Font::new("GillSans-Light", size).expect("valid font")
    }

    #[test]
    fn test_starts_at_platform_preference() {
        let (_, metrics) = native(SizeCategory::ExtraExtraLarge);
        assert_eq!(metrics.size_category(), SizeCategory::ExtraExtraLarge);
        assert_eq!(metrics.scaling(), ScalingKind::Native);

        let (_, metrics) = linear(SizeCategory::Small);
        assert_eq!(metrics.scaling(), ScalingKind::Linear);
    }

    #[test]
    fn test_linear_config_overrides_native_curve() {
        let platform = Arc::new(SystemPlatform::new(SizeCategory::Large));
        let config = MetricsConfig {
            size_category: None,
            scaling: ScalingMode::Linear,
        };
        let metrics = FontMetrics::with_config(platform, &config);
        assert_eq!(metrics.scaling(), ScalingKind::Linear);
    }

    #[test]
    fn test_scale_factor() {
        let (_, metrics) = linear(SizeCategory::Large);
        assert_eq!(metrics.scale_factor(SizeCategory::Large), 1.0);
        assert_eq!(metrics.scale_factor(SizeCategory::ExtraSmall), 14.0 / 17.0);
        assert_eq!(
            metrics.scale_factor(SizeCategory::AccessibilityExtraExtraExtraLarge),
            53.0 / 17.0
        );
    }

    #[test]
    fn test_linear_scaled_font() {
        let (_, metrics) = linear(SizeCategory::ExtraLarge);
        let scaled = metrics.scaled_font(&font(34.0)).expect("scaled");
        assert!((scaled.point_size() - 38.0).abs() < 1e-4);
        assert_eq!(scaled.family(), "GillSans-Light");
    }

    #[test]
    fn test_scaled_font_monotonic_in_category() {
        for (_, metrics) in [linear(SizeCategory::Large), native(SizeCategory::Large)] {
            for size in [9.0, 17.0, 36.0] {
                let base = font(size);
                let sizes: Vec<f32> = SizeCategory::ALL
                    .into_iter()
                    .map(|category| {
                        metrics.set_size_category(category);
                        metrics.scaled_font(&base).expect("scaled").point_size()
                    })
                    .collect();
                assert!(sizes.windows(2).all(|pair| pair[0] <= pair[1]), "{sizes:?}");
            }
        }
    }

    #[test]
    fn test_maximum_point_size_never_exceeded() {
        for (_, metrics) in [linear(SizeCategory::Large), native(SizeCategory::Large)] {
            let base = font(36.0);
            for category in SizeCategory::ALL {
                metrics.set_size_category(category);
                let capped = metrics.scaled_font_with_max(&base, 40.0).expect("scaled");
                assert!(capped.point_size() <= 40.0);
            }

            metrics.set_size_category(SizeCategory::ExtraSmall);
            let uncapped = metrics.scaled_font(&base).expect("scaled");
            let capped = metrics.scaled_font_with_max(&base, 40.0).expect("scaled");
            assert_eq!(capped.point_size(), uncapped.point_size());
        }
    }

    #[test]
    fn test_invalid_arguments() {
        let (_, metrics) = native(SizeCategory::Large);
        let base = font(17.0);
        assert!(matches!(
            metrics.scaled_font_with_max(&base, 0.0),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(metrics.scaled_font_with_max(&base, -5.0).is_err());
        assert!(metrics.scaled_value(-1.0).is_err());
        assert!(metrics.scaled_value(f32::NAN).is_err());
        assert_eq!(metrics.scaled_value(0.0).expect("zero"), 0.0);
    }

    #[test]
    fn test_scaled_value() {
        for (_, metrics) in [linear(SizeCategory::Large), native(SizeCategory::Large)] {
            assert_eq!(metrics.scaled_value(16.0).expect("scaled"), 16.0);
            metrics.set_size_category(SizeCategory::AccessibilityMedium);
            let scaled = metrics.scaled_value(17.0).expect("scaled");
            assert!((scaled - 28.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_style_hint_follows_style_curve() {
        let (_, metrics) = native(SizeCategory::AccessibilityExtraExtraExtraLarge);
        let title = Font::preferred("Avenir", TextStyle::LargeTitle);
        let scaled = metrics.scaled_font(&title).expect("scaled");
        assert!((scaled.point_size() - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_same_value_notifies_every_time() {
        let (_, metrics) = native(SizeCategory::Large);
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        metrics.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        metrics.set_size_category(SizeCategory::Medium);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        metrics.set_size_category(SizeCategory::Medium);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_subscriber_reads_new_category_during_notification() {
        let (_, metrics) = native(SizeCategory::Large);
        let seen = Arc::new(RwLock::new(None));

        let weak = Arc::downgrade(&metrics);
        let slot = seen.clone();
        metrics.subscribe(move |event| {
            if let Some(metrics) = weak.upgrade() {
                *slot.write() = Some((event.category, metrics.size_category()));
            }
        });

        metrics.set_size_category(SizeCategory::ExtraSmall);
        assert_eq!(
            *seen.read(),
            Some((SizeCategory::ExtraSmall, SizeCategory::ExtraSmall))
        );
    }

    #[test]
    fn test_unsubscribed_callback_not_called() {
        let (_, metrics) = native(SizeCategory::Large);
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let id = metrics.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(metrics.unsubscribe(id));

        metrics.set_size_category(SizeCategory::Small);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_events_channel() {
        let (_, metrics) = native(SizeCategory::Large);
        let rx = metrics.events();
        metrics.set_size_category(SizeCategory::AccessibilityLarge);
        assert_eq!(
            rx.try_recv().ok(),
            Some(SizeCategoryChanged {
                category: SizeCategory::AccessibilityLarge
            })
        );
    }

    #[test]
    fn test_system_change_overwrites_manual_category() {
        let (platform, metrics) = native(SizeCategory::Large);
        let rx = metrics.events();

        metrics.set_size_category(SizeCategory::ExtraSmall);
        platform.set_preferred_size_category(SizeCategory::ExtraExtraExtraLarge);

        assert_eq!(metrics.size_category(), SizeCategory::ExtraExtraExtraLarge);
        assert_eq!(rx.try_iter().count(), 2);
    }

    #[test]
    fn test_without_delegate_system_changes_are_ignored() {
        let (platform, metrics) = native(SizeCategory::Large);
        metrics.set_delegate(None);
        metrics.set_size_category(SizeCategory::Small);

        platform.set_preferred_size_category(SizeCategory::ExtraLarge);
        assert_eq!(metrics.size_category(), SizeCategory::Small);
    }

    #[test]
    fn test_custom_delegate() {
        struct Counting(AtomicUsize);

        impl SizeCategoryDelegate for Counting {
            fn size_category_changed(&self, _metrics: &FontMetrics) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let (platform, metrics) = native(SizeCategory::Large);
        let delegate = Arc::new(Counting(AtomicUsize::new(0)));
        let installed: Arc<dyn SizeCategoryDelegate> = delegate.clone();
        metrics.set_delegate(Some(installed));

        platform.set_preferred_size_category(SizeCategory::AccessibilityMedium);
        assert_eq!(delegate.0.load(Ordering::SeqCst), 1);
        assert_eq!(metrics.size_category(), SizeCategory::Large);
    }

    #[test]
    fn test_dropped_metrics_ignore_system_changes() {
        let (platform, metrics) = native(SizeCategory::Large);
        drop(metrics);
        platform.set_preferred_size_category(SizeCategory::Small);
        assert_eq!(platform.preferred_size_category(), SizeCategory::Small);
    }

    #[test]
    fn test_drop_removes_system_handler() {
        let platform = Arc::new(SystemPlatform::new(SizeCategory::Large));
        let kept = FontMetrics::new(platform.clone());
        assert_eq!(platform.handler_count(), 1);

        for _ in 0..1000 {
            drop(FontMetrics::new(platform.clone()));
        }
        assert_eq!(platform.handler_count(), 1);

        drop(kept);
        assert_eq!(platform.handler_count(), 0);
    }

    #[test]
    fn test_concurrent_assignments_end_consistent() {
        let (_, metrics) = native(SizeCategory::Large);
        let rx = metrics.events();

        let workers: Vec<_> = (0..4)
            .map(|worker| {
                let metrics = metrics.clone();
                std::thread::spawn(move || {
                    for step in 0..200 {
                        let index = (worker * 3 + step) % SizeCategory::ALL.len();
                        metrics.set_size_category(SizeCategory::ALL[index]);
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().expect("worker finished");
        }

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events.len(), 800);
        assert_eq!(
            events.last().map(|event| event.category),
            Some(metrics.size_category())
        );
    }

    #[test]
    fn test_subscriber_may_assign_again() {
        let (_, metrics) = native(SizeCategory::Large);
        let weak = Arc::downgrade(&metrics);
        metrics.subscribe(move |event| {
            if event.category != SizeCategory::ExtraSmall {
                return;
            }
            if let Some(metrics) = weak.upgrade() {
                metrics.set_size_category(SizeCategory::Small);
            }
        });

        metrics.set_size_category(SizeCategory::ExtraSmall);
        assert_eq!(metrics.size_category(), SizeCategory::Small);
    }
}
