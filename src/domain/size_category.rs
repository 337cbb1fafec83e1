//! Size Category - Accessibility Text Size Setting
//!
//! The ordered set of preferred text sizes a user can pick, from the standard
//! range up through the extended accessibility range.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Preferred text size category
///
/// Variants are declared smallest to largest, so the derived `Ord` is the
/// category order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum SizeCategory {
    ExtraSmall,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
    AccessibilityMedium,
    AccessibilityLarge,
    AccessibilityExtraLarge,
    AccessibilityExtraExtraLarge,
    AccessibilityExtraExtraExtraLarge,
}

impl SizeCategory {
    /// Every category in ascending order
    pub const ALL: [SizeCategory; 12] = [
        SizeCategory::ExtraSmall,
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::ExtraLarge,
        SizeCategory::ExtraExtraLarge,
        SizeCategory::ExtraExtraExtraLarge,
        SizeCategory::AccessibilityMedium,
        SizeCategory::AccessibilityLarge,
        SizeCategory::AccessibilityExtraLarge,
        SizeCategory::AccessibilityExtraExtraLarge,
        SizeCategory::AccessibilityExtraExtraExtraLarge,
    ];

    /// Position in `ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether this category belongs to the extended accessibility range
    pub fn is_accessibility(self) -> bool {
        self >= SizeCategory::AccessibilityMedium
    }

    /// Setting name as used in config files and environment variables
    pub fn as_str(self) -> &'static str {
        match self {
            SizeCategory::ExtraSmall => "extraSmall",
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
            SizeCategory::ExtraLarge => "extraLarge",
            SizeCategory::ExtraExtraLarge => "extraExtraLarge",
            SizeCategory::ExtraExtraExtraLarge => "extraExtraExtraLarge",
            SizeCategory::AccessibilityMedium => "accessibilityMedium",
            SizeCategory::AccessibilityLarge => "accessibilityLarge",
            SizeCategory::AccessibilityExtraLarge => "accessibilityExtraLarge",
            SizeCategory::AccessibilityExtraExtraLarge => "accessibilityExtraExtraLarge",
            SizeCategory::AccessibilityExtraExtraExtraLarge => {
                "accessibilityExtraExtraExtraLarge"
            }
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        SizeCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidArgument {
                message: format!("unknown size category '{wanted}'"),
            })
    }
}
