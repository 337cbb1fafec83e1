//! View Components
//!
//! Headless stand-ins for the sample screen.

mod dialog;
mod label;

pub use dialog::*;
pub use label::*;
