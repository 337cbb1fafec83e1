//! Text Style - Platform Text Styles and Their Preferred Sizes

use crate::domain::SizeCategory;
use serde::{Deserialize, Serialize};

/// Platform-defined text styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextStyle {
    LargeTitle,
    Title1,
    Title2,
    Title3,
    Headline,
    Body,
    Callout,
    Subheadline,
    Footnote,
    Caption1,
    Caption2,
}

// Preferred point sizes, one column per `SizeCategory` in ascending order.
const LARGE_TITLE: [f32; 12] = [
    31.0, 32.0, 33.0, 34.0, 36.0, 38.0, 40.0, 44.0, 48.0, 52.0, 56.0, 60.0,
];
const TITLE1: [f32; 12] = [
    25.0, 26.0, 27.0, 28.0, 30.0, 32.0, 34.0, 38.0, 43.0, 48.0, 53.0, 58.0,
];
const TITLE2: [f32; 12] = [
    19.0, 20.0, 21.0, 22.0, 24.0, 26.0, 28.0, 34.0, 39.0, 44.0, 50.0, 56.0,
];
const TITLE3: [f32; 12] = [
    17.0, 18.0, 19.0, 20.0, 22.0, 24.0, 26.0, 31.0, 37.0, 43.0, 49.0, 55.0,
];
const BODY: [f32; 12] = [
    14.0, 15.0, 16.0, 17.0, 19.0, 21.0, 23.0, 28.0, 33.0, 40.0, 47.0, 53.0,
];
const CALLOUT: [f32; 12] = [
    13.0, 14.0, 15.0, 16.0, 18.0, 20.0, 22.0, 26.0, 32.0, 38.0, 44.0, 51.0,
];
const SUBHEADLINE: [f32; 12] = [
    12.0, 13.0, 14.0, 15.0, 17.0, 19.0, 21.0, 25.0, 30.0, 36.0, 42.0, 49.0,
];
const FOOTNOTE: [f32; 12] = [
    12.0, 12.0, 12.0, 13.0, 15.0, 17.0, 19.0, 23.0, 27.0, 33.0, 38.0, 44.0,
];
const CAPTION1: [f32; 12] = [
    11.0, 11.0, 11.0, 12.0, 14.0, 16.0, 18.0, 22.0, 26.0, 32.0, 37.0, 43.0,
];
const CAPTION2: [f32; 12] = [
    11.0, 11.0, 11.0, 11.0, 13.0, 15.0, 17.0, 20.0, 24.0, 29.0, 34.0, 40.0,
];

impl TextStyle {
    /// Every style, smallest default size first
    pub const ALL: [TextStyle; 11] = [
        TextStyle::Caption2,
        TextStyle::Caption1,
        TextStyle::Footnote,
        TextStyle::Subheadline,
        TextStyle::Callout,
        TextStyle::Body,
        TextStyle::Headline,
        TextStyle::Title3,
        TextStyle::Title2,
        TextStyle::Title1,
        TextStyle::LargeTitle,
    ];

    fn sizes(self) -> &'static [f32; 12] {
        match self {
            TextStyle::LargeTitle => &LARGE_TITLE,
            TextStyle::Title1 => &TITLE1,
            TextStyle::Title2 => &TITLE2,
            TextStyle::Title3 => &TITLE3,
            // Headline shares body metrics and differs only in weight
            TextStyle::Headline | TextStyle::Body => &BODY,
            TextStyle::Callout => &CALLOUT,
            TextStyle::Subheadline => &SUBHEADLINE,
            TextStyle::Footnote => &FOOTNOTE,
            TextStyle::Caption1 => &CAPTION1,
            TextStyle::Caption2 => &CAPTION2,
        }
    }

    /// Preferred point size of this style at `category`
    pub fn point_size(self, category: SizeCategory) -> f32 {
        self.sizes()[category.index()]
    }

    /// Preferred point size at the default category
    pub fn default_point_size(self) -> f32 {
        self.point_size(SizeCategory::default())
    }

    /// Ratio of this style's size at `category` to its default size
    pub fn ratio(self, category: SizeCategory) -> f32 {
        self.point_size(category) / self.default_point_size()
    }
}
