//! Sample Dialog
//!
//! The demo screen: a single quotation rendered in a custom font that tracks
//! the user's text size.

use crate::constants::{DIALOG_FONT_FAMILY, DIALOG_POINT_SIZE, DIALOG_TEXT};
use crate::domain::Font;
use crate::error::Result;
use crate::state::FontMetrics;
use crate::views::ScaledLabel;
use std::sync::Arc;

/// Screen hosting the dialog label
#[derive(Debug)]
pub struct DialogView {
    dialog: ScaledLabel,
}

impl DialogView {
    pub fn new(metrics: Arc<FontMetrics>) -> Result<Self> {
        let font = Font::new(DIALOG_FONT_FAMILY, DIALOG_POINT_SIZE)?;
        Ok(Self {
            dialog: ScaledLabel::attach(metrics, DIALOG_TEXT, font)?,
        })
    }

    pub fn dialog(&self) -> &ScaledLabel {
        &self.dialog
    }
}
