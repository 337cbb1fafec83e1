//! Font - Font Description

use crate::domain::TextStyle;
use crate::error::{Error, Result};
use std::sync::Arc;

/// A font family at a concrete point size
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: Arc<str>,
    point_size: f32,
    /// Style whose scaling curve this font follows, if any
    text_style: Option<TextStyle>,
}

impl Font {
    /// Create a font, rejecting sizes that are not finite and positive
    pub fn new(family: impl Into<Arc<str>>, point_size: f32) -> Result<Self> {
        ensure_positive("point size", point_size)?;
        Ok(Self {
            family: family.into(),
            point_size,
            text_style: None,
        })
    }

    /// Create a font at a text style's default size
    pub fn preferred(family: impl Into<Arc<str>>, text_style: TextStyle) -> Self {
        Self {
            family: family.into(),
            point_size: text_style.default_point_size(),
            text_style: Some(text_style),
        }
    }

    /// Attach a text style hint
    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = Some(text_style);
        self
    }

    /// Copy of this font at another size
    pub fn with_size(&self, point_size: f32) -> Result<Self> {
        ensure_positive("point size", point_size)?;
        Ok(Self {
            point_size,
            ..self.clone()
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    pub fn text_style(&self) -> Option<TextStyle> {
        self.text_style
    }
}

/// Fail with `InvalidArgument` unless `value` is finite and greater than zero
pub(crate) fn ensure_positive(what: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument {
            message: format!("{what} must be finite and positive, got {value}"),
        })
    }
}
