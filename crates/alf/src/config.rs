//! Typography configuration
//!
//! Tuning constants for text normalization. Every field has a default, so a
//! partial JSON document (or `{}`) is a valid configuration.

use crate::emoji::SINGLE_EMOJI_MAX_LEN;
use crate::error::{Error, Result};
use crate::tokens::font_size;
use serde::{Deserialize, Serialize};

/// Largest line height treated as a multiplier rather than pixels
pub const RELATIVE_LINE_HEIGHT_MAX: f64 = 2.0;

/// Letter spacing applied when rendering with the system font
pub const SYSTEM_LETTER_SPACING: f64 = 0.25;

/// Typography configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Font size used when a style has none, before scaling
    #[serde(default = "default_font_size")]
    pub default_font_size: f64,

    /// Line heights at or below this are multipliers of the font size
    #[serde(default = "default_relative_line_height_max")]
    pub relative_line_height_max: f64,

    /// Letter spacing forced on the system font path
    #[serde(default = "default_system_letter_spacing")]
    pub system_letter_spacing: f64,

    /// Length cutoff, in UTF-16 code units, for emoji-only text
    #[serde(default = "default_single_emoji_max_len")]
    pub single_emoji_max_len: usize,
}

fn default_font_size() -> f64 {
    font_size::MD
}

fn default_relative_line_height_max() -> f64 {
    RELATIVE_LINE_HEIGHT_MAX
}

fn default_system_letter_spacing() -> f64 {
    SYSTEM_LETTER_SPACING
}

fn default_single_emoji_max_len() -> usize {
    SINGLE_EMOJI_MAX_LEN
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            default_font_size: default_font_size(),
            relative_line_height_max: default_relative_line_height_max(),
            system_letter_spacing: default_system_letter_spacing(),
            single_emoji_max_len: default_single_emoji_max_len(),
        }
    }
}

impl StyleConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make normalization produce nonsense
    pub fn validate(&self) -> Result<()> {
        if !self.default_font_size.is_finite() || self.default_font_size <= 0.0 {
            tracing::warn!(value = self.default_font_size, "rejecting defaultFontSize");
            return Err(Error::InvalidConfig(format!(
                "defaultFontSize must be positive, got {}",
                self.default_font_size
            )));
        }
        if !self.relative_line_height_max.is_finite() || self.relative_line_height_max <= 0.0 {
            tracing::warn!(
                value = self.relative_line_height_max,
                "rejecting relativeLineHeightMax"
            );
            return Err(Error::InvalidConfig(format!(
                "relativeLineHeightMax must be positive, got {}",
                self.relative_line_height_max
            )));
        }
        if !self.system_letter_spacing.is_finite() {
            tracing::warn!("rejecting non-finite systemLetterSpacing");
            return Err(Error::InvalidConfig(
                "systemLetterSpacing must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
