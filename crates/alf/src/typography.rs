//! Text style normalization
//!
//! Text styles arrive as flattened fragments that may leave typography
//! ambiguous: no font size, a line height that is either a multiplier or
//! pixels, a family that depends on user preference. Normalization resolves
//! all of that into absolute values for the renderer:
//!
//! - `fontSize` defaults to 16 and is multiplied by the font scale
//! - a non-zero `lineHeight` at or below 2 is a multiplier of the scaled size;
//!   above 2 it is already in pixels; missing, zero or unusable, it equals the
//!   font size
//! - the theme font path picks the Inter face for the platform, appends the
//!   fallback chain and disables contextual alternates
//! - the system font path keeps the caller's family (or the system stack) and
//!   fixes letter spacing
//!
//! Normalization never fails. Values that do not parse fall back to the
//! defaults above.
//!
//! ```rust
//! use alf::fonts::{FontFamilyMode, TypographyContext};
//! use alf::style::StyleFragment;
//! use alf::typography::normalize;
//!
//! let ctx = TypographyContext::new(1.5, FontFamilyMode::System).unwrap();
//! let style = StyleFragment::new().with("fontSize", 20).with("lineHeight", 1.2);
//!
//! let text = normalize(&style, &ctx);
//! assert_eq!(text.number("fontSize"), Some(30.0));
//! assert_eq!(text.number("lineHeight"), Some(36.0));
//! ```

use crate::config::StyleConfig;
use crate::emoji::is_only_emoji_within;
use crate::flatten::{flatten, StyleInput};
use crate::fonts::{FontFamilyMode, FontStack, FontWeightClass, TypographyContext};
use crate::style::{props, StyleFragment, StyleValue};
use crate::tokens::{font_size, line_height};

/// Font feature that turns off contextual alternates
pub const NO_CONTEXTUAL: &str = "no-contextual";

/// Resolves text styles against a [`StyleConfig`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyleNormalizer {
    config: StyleConfig,
}

impl TextStyleNormalizer {
    /// Create a normalizer with the given configuration
    pub fn new(config: StyleConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Resolve a flattened style into absolute typography
    pub fn normalize(&self, style: &StyleFragment, ctx: &TypographyContext) -> StyleFragment {
        let mut out = style.clone();

        let raw_size = match style.number(props::FONT_SIZE) {
            Some(size) if size > 0.0 => size,
            _ => {
                if let Some(value) = style.get(props::FONT_SIZE) {
                    tracing::debug!(?value, "unusable fontSize, using default");
                }
                self.config.default_font_size
            }
        };
        let mut final_size = raw_size * ctx.font_scale_multiplier();
        if !final_size.is_finite() {
            tracing::debug!(raw_size, "scaled fontSize overflowed, using default");
            final_size = self.config.default_font_size * ctx.font_scale_multiplier();
            if !final_size.is_finite() {
                final_size = self.config.default_font_size;
            }
        }
        out.insert(props::FONT_SIZE, final_size);

        let max_relative = self.config.relative_line_height_max;
        let final_line_height = match style.number(props::LINE_HEIGHT) {
            Some(lh) if lh != 0.0 && lh <= max_relative => (final_size * lh).round(),
            Some(lh) if lh != 0.0 => lh,
            _ => {
                if let Some(value) = style.get(props::LINE_HEIGHT) {
                    tracing::debug!(?value, "unusable lineHeight, using font size");
                }
                final_size
            }
        };
        let final_line_height = if final_line_height.is_finite() {
            final_line_height
        } else {
            tracing::debug!("scaled lineHeight overflowed, using font size");
            final_size
        };
        out.insert(props::LINE_HEIGHT, final_line_height);

        match ctx.font_family_mode() {
            FontFamilyMode::Theme => apply_theme_font(&mut out, ctx),
            FontFamilyMode::System => {
                apply_system_font(&mut out, ctx);
                out.insert(props::LETTER_SPACING, self.config.system_letter_spacing);
            }
        }

        out
    }

    /// Flatten a style sequence, then normalize it
    pub fn normalize_layers(&self, layers: &[StyleInput<'_>], ctx: &TypographyContext) -> StyleFragment {
        self.normalize(&flatten(layers), ctx)
    }

    /// Emoji-only check using the configured length cutoff
    pub fn is_only_emoji(&self, text: &str) -> bool {
        is_only_emoji_within(text, self.config.single_emoji_max_len)
    }
}

fn apply_theme_font(style: &mut StyleFragment, ctx: &TypographyContext) {
    let weight = match style.get(props::FONT_WEIGHT) {
        Some(StyleValue::Text(w)) => FontWeightClass::from_weight(w),
        Some(StyleValue::Number(w)) => FontWeightClass::from_numeric(*w),
        _ => FontWeightClass::Regular,
    };
    let italic = style.text(props::FONT_STYLE) == Some("italic");
    let family = FontStack::theme(ctx.platform(), weight, italic).to_css();
    style.insert(props::FONT_FAMILY, family);

    let mut variants = match style.remove(props::FONT_VARIANT) {
        Some(StyleValue::List(items)) => items,
        Some(single @ StyleValue::Text(_)) => vec![single],
        _ => Vec::new(),
    };
    if !variants.iter().any(|v| v.as_str() == Some(NO_CONTEXTUAL)) {
        variants.push(StyleValue::from(NO_CONTEXTUAL));
    }
    style.insert(props::FONT_VARIANT, variants);
}

fn apply_system_font(style: &mut StyleFragment, ctx: &TypographyContext) {
    let has_family = style
        .text(props::FONT_FAMILY)
        .is_some_and(|family| !family.trim().is_empty());
    if !has_family {
        style.insert(props::FONT_FAMILY, FontStack::system(ctx.platform()).to_css());
    }
}

/// Normalize a flattened style with the default configuration
pub fn normalize(style: &StyleFragment, ctx: &TypographyContext) -> StyleFragment {
    TextStyleNormalizer::default().normalize(style, ctx)
}

/// Flatten a style sequence and normalize it with the default configuration
pub fn normalize_text_styles(layers: &[StyleInput<'_>], ctx: &TypographyContext) -> StyleFragment {
    normalize(&flatten(layers), ctx)
}

/// Absolute line height for a text style, as a fragment.
///
/// Missing values default to the body font size and the normal leading.
/// Line heights already in pixels are kept.
pub fn leading(style: &StyleFragment) -> StyleFragment {
    let size = style
        .number(props::FONT_SIZE)
        .filter(|s| *s > 0.0)
        .unwrap_or(font_size::MD);
    let lh = style
        .number(props::LINE_HEIGHT)
        .filter(|lh| *lh != 0.0)
        .unwrap_or(line_height::NORMAL);

    let absolute = if lh <= crate::config::RELATIVE_LINE_HEIGHT_MAX {
        (size * lh).round()
    } else {
        lh
    };
    StyleFragment::new().with(props::LINE_HEIGHT, absolute)
}
