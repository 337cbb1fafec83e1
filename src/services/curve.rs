//! Style Curve
//!
//! Nonlinear, per-text-style scaling. Small text grows faster than large text
//! as the category increases, so a single ratio cannot describe every size.

use crate::domain::{SizeCategory, TextStyle};

/// A native scaling curve offered by the host platform
pub trait NativeCurve: Send + Sync {
    /// Scale a font point size, following `text_style`'s curve when given
    fn scaled_point_size(
        &self,
        point_size: f32,
        text_style: Option<TextStyle>,
        category: SizeCategory,
    ) -> f32;

    /// Scale an arbitrary layout value
    fn scaled_value(&self, value: f32, category: SizeCategory) -> f32;
}

/// How fast a font's growth follows body growth as its size moves away from
/// the body size. Fitted so a 36pt font lands near 31pt at `ExtraSmall` and
/// near 101pt at `AccessibilityExtraExtraExtraLarge`.
const BODY_GROWTH_EXPONENT: f32 = 0.79;

/// Curve built from the platform text style tables
///
/// A font with a style hint follows that style's table. A font without one
/// follows the body curve: it moves by the body style's point delta for the
/// category, weighted by `(size / body) ^ BODY_GROWTH_EXPONENT`, so text
/// above body size grows in absolute points but less in proportion.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleCurve;

impl StyleCurve {
    fn body_curve(point_size: f32, category: SizeCategory) -> f32 {
        let body = TextStyle::Body;
        let reference = body.default_point_size();
        let delta = body.point_size(category) - reference;
        let weight = (point_size / reference).powf(BODY_GROWTH_EXPONENT);
        let scaled = point_size + delta * weight;

        if delta < 0.0 {
            // Tiny fonts would otherwise shrink past zero
            scaled.max(point_size * body.ratio(category))
        } else {
            scaled
        }
    }
}

impl NativeCurve for StyleCurve {
    fn scaled_point_size(
        &self,
        point_size: f32,
        text_style: Option<TextStyle>,
        category: SizeCategory,
    ) -> f32 {
        match text_style {
            Some(style) => point_size * style.ratio(category),
            None => Self::body_curve(point_size, category),
        }
    }

    fn scaled_value(&self, value: f32, category: SizeCategory) -> f32 {
        value * TextStyle::Body.ratio(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_is_identity() {
        for size in [8.0, 11.0, 14.5, 17.0, 25.0, 34.0, 36.0, 72.0] {
            let scaled = StyleCurve.scaled_point_size(size, None, SizeCategory::Large);
            assert!((scaled - size).abs() < 1e-4, "{size} -> {scaled}");
        }
    }

    #[test]
    fn test_body_size_follows_body_table() {
        for category in SizeCategory::ALL {
            let scaled = StyleCurve.scaled_point_size(17.0, None, category);
            assert!((scaled - TextStyle::Body.point_size(category)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_reference_sizes_for_36pt() {
        let small = StyleCurve.scaled_point_size(36.0, None, SizeCategory::ExtraSmall);
        let largest = StyleCurve.scaled_point_size(
            36.0,
            None,
            SizeCategory::AccessibilityExtraExtraExtraLarge,
        );
        assert!((small - 31.0).abs() < 0.5, "{small}");
        assert!((largest - 101.0).abs() < 0.5, "{largest}");
    }

    #[test]
    fn test_style_sizes_reproduced() {
        for style in TextStyle::ALL {
            for category in SizeCategory::ALL {
                let scaled = StyleCurve.scaled_point_size(
                    style.default_point_size(),
                    Some(style),
                    category,
                );
                assert!((scaled - style.point_size(category)).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_monotonic_for_all_sizes() {
        for size in [0.001, 6.0, 11.5, 16.5, 19.0, 30.0, 36.0, 96.0] {
            let sizes: Vec<f32> = SizeCategory::ALL
                .into_iter()
                .map(|category| StyleCurve.scaled_point_size(size, None, category))
                .collect();
            assert!(sizes.windows(2).all(|pair| pair[0] <= pair[1]), "{sizes:?}");
            assert!(sizes.iter().all(|scaled| *scaled > 0.0), "{sizes:?}");
        }
    }

    #[test]
    fn test_large_text_grows_slower_than_body() {
        let category = SizeCategory::AccessibilityExtraExtraExtraLarge;
        let body_growth = StyleCurve.scaled_point_size(17.0, None, category) / 17.0;
        let title_growth = StyleCurve.scaled_point_size(36.0, None, category) / 36.0;
        assert!(title_growth < body_growth);
    }

    #[test]
    fn test_style_hint_uses_that_style() {
        let scaled = StyleCurve.scaled_point_size(
            22.0,
            Some(TextStyle::Title2),
            SizeCategory::AccessibilityExtraExtraExtraLarge,
        );
        assert!((scaled - 56.0).abs() < 1e-4);
    }
}
