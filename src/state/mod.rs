//! State Management Layer
//!
//! ```text
//! set_size_category → notify → subscriber → scaled_font → UI refresh
//! ```

mod font_metrics;

pub use font_metrics::*;
