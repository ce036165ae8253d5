//! Font preferences and font stacks
//!
//! Users pick a font scale step and a font family mode; both are persisted as
//! [`FontPreferences`] and turned into a [`TypographyContext`] that the
//! normalizer consumes on every text render.

use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::tokens::font_size;
use serde::{Deserialize, Serialize};

// =============================================================================
// Preferences
// =============================================================================

/// Which typeface family text renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontFamilyMode {
    /// Platform system font
    System,
    /// Bundled theme typeface (Inter)
    #[default]
    Theme,
}

/// Font scale step, `-2` to `2`
///
/// Each step shifts the 16px body size by one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FontScale(i8);

impl FontScale {
    /// Smallest step
    pub const MIN: i8 = -2;
    /// Largest step
    pub const MAX: i8 = 2;

    /// Create a scale step, rejecting steps outside `-2..=2`
    pub fn new(step: i8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&step) {
            Ok(Self(step))
        } else {
            Err(Error::InvalidFontScale(step.to_string()))
        }
    }

    /// The step value
    pub fn step(self) -> i8 {
        self.0
    }

    /// Multiplier applied to font sizes
    pub fn multiplier(self) -> f64 {
        1.0 + f64::from(self.0) / font_size::MD
    }
}

impl std::str::FromStr for FontScale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let step: i8 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidFontScale(s.to_string()))?;
        Self::new(step)
    }
}

impl TryFrom<String> for FontScale {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<FontScale> for String {
    fn from(scale: FontScale) -> Self {
        scale.0.to_string()
    }
}

/// Persisted font preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FontPreferences {
    /// Font scale step
    #[serde(default)]
    pub font_scale: FontScale,
    /// Font family mode
    #[serde(default)]
    pub font_family: FontFamilyMode,
}

// =============================================================================
// Typography Context
// =============================================================================

/// Per-render parameters for text normalization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypographyContext {
    font_scale_multiplier: f64,
    font_family_mode: FontFamilyMode,
    platform: Platform,
}

impl Default for TypographyContext {
    fn default() -> Self {
        Self {
            font_scale_multiplier: 1.0,
            font_family_mode: FontFamilyMode::default(),
            platform: Platform::default(),
        }
    }
}

impl TypographyContext {
    /// Create a context; the multiplier must be finite and positive
    pub fn new(font_scale_multiplier: f64, font_family_mode: FontFamilyMode) -> Result<Self> {
        if !font_scale_multiplier.is_finite() || font_scale_multiplier <= 0.0 {
            return Err(Error::InvalidContext(format!(
                "font scale multiplier must be positive, got {}",
                font_scale_multiplier
            )));
        }
        Ok(Self {
            font_scale_multiplier,
            font_family_mode,
            platform: Platform::default(),
        })
    }

    /// Build a context from stored preferences
    pub fn from_preferences(prefs: &FontPreferences, platform: Platform) -> Self {
        Self {
            font_scale_multiplier: prefs.font_scale.multiplier(),
            font_family_mode: prefs.font_family,
            platform,
        }
    }

    /// Set the platform
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Font scale multiplier
    pub fn font_scale_multiplier(&self) -> f64 {
        self.font_scale_multiplier
    }

    /// Font family mode
    pub fn font_family_mode(&self) -> FontFamilyMode {
        self.font_family_mode
    }

    /// Rendering platform
    pub fn platform(&self) -> Platform {
        self.platform
    }
}

// =============================================================================
// Font Stacks
// =============================================================================

/// A primary family followed by fallbacks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontStack {
    /// Primary font family
    pub primary: String,
    /// Fallback fonts, in order
    pub fallbacks: Vec<String>,
}

const WEB_FALLBACKS: &[&str] = &[
    "-apple-system",
    "BlinkMacSystemFont",
    "Segoe UI",
    "Roboto",
    "Helvetica",
    "Arial",
    "sans-serif",
    "Apple Color Emoji",
    "Segoe UI Emoji",
];

impl FontStack {
    /// Create a stack with the platform's fallbacks
    pub fn new(primary: impl Into<String>, platform: Platform) -> Self {
        let fallbacks = match platform {
            Platform::Web => WEB_FALLBACKS.iter().map(|f| f.to_string()).collect(),
            Platform::Ios => vec!["System".to_string()],
            Platform::Android => vec!["sans-serif".to_string()],
        };
        Self {
            primary: primary.into(),
            fallbacks,
        }
    }

    /// The platform's system font stack
    pub fn system(platform: Platform) -> Self {
        match platform {
            Platform::Web => Self {
                primary: "system-ui".to_string(),
                fallbacks: WEB_FALLBACKS.iter().map(|f| f.to_string()).collect(),
            },
            Platform::Ios => Self {
                primary: "System".to_string(),
                fallbacks: Vec::new(),
            },
            Platform::Android => Self {
                primary: "sans-serif".to_string(),
                fallbacks: Vec::new(),
            },
        }
    }

    /// The theme typeface stack for a weight and style
    pub fn theme(platform: Platform, weight: FontWeightClass, italic: bool) -> Self {
        let primary = match platform {
            Platform::Web => format!("InterVariable{}", if italic { "Italic" } else { "" }),
            Platform::Ios => format!("Inter{}", if italic { "-Italic" } else { "" }),
            Platform::Android => match (weight, italic) {
                (FontWeightClass::Regular, true) => "Inter-Italic".to_string(),
                (weight, true) => format!("Inter-{}Italic", weight.face_name()),
                (weight, false) => format!("Inter-{}", weight.face_name()),
            },
        };
        Self::new(primary, platform)
    }

    /// Get the CSS font-family string
    pub fn to_css(&self) -> String {
        std::iter::once(&self.primary)
            .chain(self.fallbacks.iter())
            .map(|f| {
                if f.contains(' ') {
                    format!("\"{}\"", f)
                } else {
                    f.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Weight classes with a dedicated face in the theme typeface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontWeightClass {
    /// 400 and below
    Regular,
    /// 500
    Medium,
    /// 600
    SemiBold,
    /// 700
    Bold,
    /// 800 and above
    ExtraBold,
}

impl FontWeightClass {
    /// Classify a `fontWeight` string; unknown values are regular
    pub fn from_weight(weight: &str) -> Self {
        match weight.trim() {
            "bold" => Self::Bold,
            "normal" => Self::Regular,
            other => other
                .parse::<f64>()
                .map(Self::from_numeric)
                .unwrap_or(Self::Regular),
        }
    }

    /// Classify a numeric weight
    pub fn from_numeric(weight: f64) -> Self {
        match weight {
            w if w >= 800.0 => Self::ExtraBold,
            w if w >= 700.0 => Self::Bold,
            w if w >= 600.0 => Self::SemiBold,
            w if w >= 500.0 => Self::Medium,
            _ => Self::Regular,
        }
    }

    fn face_name(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Medium => "Medium",
            Self::SemiBold => "SemiBold",
            Self::Bold => "Bold",
            Self::ExtraBold => "ExtraBold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Font Scale Tests
    // ==========================================================================

    #[test]
    fn test_font_scale_range() {
        assert!(FontScale::new(-2).is_ok());
        assert!(FontScale::new(2).is_ok());
        assert!(matches!(FontScale::new(3), Err(Error::InvalidFontScale(_))));
        assert!(matches!("big".parse::<FontScale>(), Err(Error::InvalidFontScale(_))));
    }

    #[test]
    fn test_font_scale_multiplier() {
        assert_eq!(FontScale::default().multiplier(), 1.0);
        assert_eq!(FontScale::new(2).unwrap().multiplier(), 1.125);
        assert_eq!(FontScale::new(-1).unwrap().multiplier(), 0.9375);
    }

    #[test]
    fn test_font_scale_serialization() {
        let json = serde_json::to_string(&FontScale::new(-1).unwrap()).unwrap();
        assert_eq!(json, "\"-1\"");
        let scale: FontScale = serde_json::from_str("\"2\"").unwrap();
        assert_eq!(scale.step(), 2);
        assert!(serde_json::from_str::<FontScale>("\"9\"").is_err());
    }

    // ==========================================================================
    // Preferences Tests
    // ==========================================================================

    #[test]
    fn test_preferences_defaults() {
        let prefs: FontPreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, FontPreferences::default());
        assert_eq!(prefs.font_family, FontFamilyMode::Theme);
    }

    #[test]
    fn test_preferences_from_json() {
        let prefs: FontPreferences =
            serde_json::from_str(r#"{"fontScale": "1", "fontFamily": "system"}"#).unwrap();
        assert_eq!(prefs.font_scale.step(), 1);
        assert_eq!(prefs.font_family, FontFamilyMode::System);
    }

    // ==========================================================================
    // Typography Context Tests
    // ==========================================================================

    #[test]
    fn test_context_validation() {
        assert!(TypographyContext::new(1.5, FontFamilyMode::System).is_ok());
        assert!(TypographyContext::new(0.0, FontFamilyMode::System).is_err());
        assert!(TypographyContext::new(-1.0, FontFamilyMode::Theme).is_err());
        assert!(TypographyContext::new(f64::NAN, FontFamilyMode::Theme).is_err());
    }

    #[test]
    fn test_context_from_preferences() {
        let prefs = FontPreferences {
            font_scale: FontScale::new(2).unwrap(),
            font_family: FontFamilyMode::System,
        };
        let ctx = TypographyContext::from_preferences(&prefs, Platform::Android);
        assert_eq!(ctx.font_scale_multiplier(), 1.125);
        assert_eq!(ctx.font_family_mode(), FontFamilyMode::System);
        assert_eq!(ctx.platform(), Platform::Android);
    }

    // ==========================================================================
    // Font Stack Tests
    // ==========================================================================

    #[test]
    fn test_font_stack_to_css() {
        let css = FontStack::new("InterVariable", Platform::Web).to_css();
        assert!(css.starts_with("InterVariable, -apple-system"));
        assert!(css.contains("\"Segoe UI\""));
        assert!(css.ends_with("\"Segoe UI Emoji\""));
    }

    #[test]
    fn test_theme_stack_by_platform() {
        let web = FontStack::theme(Platform::Web, FontWeightClass::Bold, true);
        assert_eq!(web.primary, "InterVariableItalic");

        let ios = FontStack::theme(Platform::Ios, FontWeightClass::Regular, false);
        assert_eq!(ios.to_css(), "Inter, System");

        let android = FontStack::theme(Platform::Android, FontWeightClass::SemiBold, false);
        assert_eq!(android.to_css(), "Inter-SemiBold, sans-serif");

        let android_italic = FontStack::theme(Platform::Android, FontWeightClass::Bold, true);
        assert_eq!(android_italic.primary, "Inter-BoldItalic");

        let regular_italic = FontStack::theme(Platform::Android, FontWeightClass::Regular, true);
        assert_eq!(regular_italic.primary, "Inter-Italic");
    }

    #[test]
    fn test_weight_class() {
        assert_eq!(FontWeightClass::from_weight("400"), FontWeightClass::Regular);
        assert_eq!(FontWeightClass::from_weight("500"), FontWeightClass::Medium);
        assert_eq!(FontWeightClass::from_weight("600"), FontWeightClass::SemiBold);
        assert_eq!(FontWeightClass::from_weight("bold"), FontWeightClass::Bold);
        assert_eq!(FontWeightClass::from_weight("900"), FontWeightClass::ExtraBold);
        assert_eq!(FontWeightClass::from_weight("heavy"), FontWeightClass::Regular);
        assert_eq!(FontWeightClass::from_numeric(700.0), FontWeightClass::Bold);
        assert_eq!(FontWeightClass::from_numeric(f64::NAN), FontWeightClass::Regular);
    }
}
