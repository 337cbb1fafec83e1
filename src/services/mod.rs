//! Services
//!
//! Host platform collaborators and change notification plumbing.

mod curve;
mod notifier;
mod platform;

pub use curve::*;
pub use notifier::*;
pub use platform::*;
