//! Scaling Constants

/// Body style point size at the default (`Large`) category.
/// Denominator of the linear scale factor.
pub const REFERENCE_BODY_POINT_SIZE: f32 = 17.0;

/// Environment variable overriding the system preferred size category
pub const SIZE_CATEGORY_ENV: &str = "FONT_METRICS_SIZE_CATEGORY";

/// Sample dialog shown by the demo screen
pub const DIALOG_TEXT: &str = "I'm sorry, Dave. I'm afraid I can't do that.";
pub const DIALOG_FONT_FAMILY: &str = "GillSans-Light";
pub const DIALOG_POINT_SIZE: f32 = 36.0;
