//! font-metrics
//!
//! Dynamic type scaling for accessibility text sizes. `FontMetrics` scales
//! fonts and layout values for the active size category, preferring the
//! platform's per-style curve and falling back to a body-size ratio, and
//! notifies subscribers every time the category is assigned.

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod state;
pub mod views;
