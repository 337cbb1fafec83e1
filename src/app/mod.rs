//! Application Layer
//!
//! Composition root and the demo run loop.

pub mod application;

pub use application::{AppContext, run_app};
