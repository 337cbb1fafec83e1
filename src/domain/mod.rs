//! Domain - Pure Data Structures
//!
//! Value types shared by the scaler, the platform and the views.

pub mod config;
pub mod font;
pub mod size_category;
pub mod text_style;

pub use config::{MetricsConfig, ScalingMode};
pub use font::Font;
pub use size_category::SizeCategory;
pub use text_style::TextStyle;
