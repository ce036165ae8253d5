//! Themes and color palettes
//!
//! Three themes are supported, each a [`Palette`] of 13-stop color scales:
//! - Light: white background, near-black text
//! - Dark: near-black background
//! - Dim: softer dark background
//!
//! Theme-colored atoms (`text`, `bg`, `border_contrast_low`, …) are derived
//! from the palette when an [`AtomStore`](crate::atoms::AtomStore) is built.
//!
//! ```rust
//! use alf::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dim);
//! assert!(theme.is_dark());
//! assert_eq!(theme.primary(500), "#9D4EDD");
//! ```

use crate::error::Error;
use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color as a hex string (e.g. "#FFFFFF")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() || hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Apply an alpha channel to a hex color, producing an `rgba()` string.
///
/// Colors that are not hex are returned unchanged.
pub fn with_alpha(hex: &str, alpha: f64) -> String {
    match parse_hex_color(hex) {
        Some((r, g, b)) => format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0)),
        None => hex.to_string(),
    }
}

// =============================================================================
// Color Scale
// =============================================================================

/// Stops of every color scale, lightest to darkest in the light theme
pub const SCALE_STOPS: [u16; 13] = [25, 50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950, 975];

/// A 13-stop color scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    colors: Vec<Color>,
}

impl ColorScale {
    /// Build a scale from colors listed in [`SCALE_STOPS`] order
    pub fn new(colors: [&str; 13]) -> Self {
        Self {
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Get a color by its numeric stop (25, 50, 100, …, 975)
    pub fn get(&self, stop: u16) -> Option<&str> {
        let index = SCALE_STOPS.iter().position(|s| *s == stop)?;
        self.colors.get(index).map(String::as_str)
    }
}

/// Theme color palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Pure white
    pub white: Color,
    /// Pure black
    pub black: Color,
    /// Background end of the contrast scale
    pub contrast_0: Color,
    /// Neutral scale for backgrounds, borders and text
    pub contrast: ColorScale,
    /// Brand scale (Aurora purple)
    pub primary: ColorScale,
    /// Success scale (Aurora cyan)
    pub positive: ColorScale,
    /// Error scale
    pub negative: ColorScale,
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
    /// Dim theme (softer dark)
    Dim,
}

impl ThemeName {
    /// Pick the value matching this theme
    pub fn select<T>(self, light: T, dark: T, dim: T) -> T {
        match self {
            ThemeName::Light => light,
            ThemeName::Dark => dark,
            ThemeName::Dim => dim,
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
            ThemeName::Dim => write!(f, "Dim"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            "dim" => Ok(ThemeName::Dim),
            _ => Err(Error::UnknownTheme(s.to_string())),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Color palette
    pub palette: Palette,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self.name, ThemeName::Dark | ThemeName::Dim)
    }

    /// Get a contrast color by level (0-975), falling back to 500
    pub fn contrast(&self, level: u16) -> &str {
        if level == 0 {
            return &self.palette.contrast_0;
        }
        self.palette
            .contrast
            .get(level)
            .or_else(|| self.palette.contrast.get(500))
            .unwrap_or(self.palette.contrast_0.as_str())
    }

    /// Get a primary color by level (25-975), falling back to 500
    pub fn primary(&self, level: u16) -> &str {
        self.palette
            .primary
            .get(level)
            .or_else(|| self.palette.primary.get(500))
            .unwrap_or(self.palette.white.as_str())
    }

    /// Foreground color for body text
    pub fn text_color(&self) -> &str {
        match self.name {
            ThemeName::Light => &self.palette.black,
            ThemeName::Dark | ThemeName::Dim => &self.palette.white,
        }
    }
}

// =============================================================================
// Built-in Themes
// =============================================================================

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        palette: Palette {
            white: "#FFFFFF".to_string(),
            black: "#000000".to_string(),
            contrast_0: "#FFFFFF".to_string(),
            contrast: ColorScale::new([
                "#F7F7F7", "#F0F0F0", "#E5E5E5", "#D4D4D4", "#B3B3B3", "#8F8F8F", "#6B6B6B",
                "#525252", "#3D3D3D", "#2E2E2E", "#1F1F1F", "#141414", "#0A0A0A",
            ]),
            primary: ColorScale::new([
                "#F5F0FF", "#EDE4FF", "#D9C9FF", "#C4ADFF", "#B392FF", "#A77BFF", "#9D4EDD",
                "#8A3DC7", "#752FB0", "#602499", "#4A1A7A", "#35125A", "#200A3A",
            ]),
            positive: ColorScale::new([
                "#E6FFF5", "#CCFFEB", "#99FFD6", "#66FFC2", "#33FFAD", "#1AFF9F", "#06FFA5",
                "#05D98D", "#04B376", "#038C5E", "#026647", "#014030", "#00261D",
            ]),
            negative: ColorScale::new([
                "#FFF0F0", "#FFE0E0", "#FFC2C2", "#FFA3A3", "#FF8585", "#FF6B6B", "#EF4444",
                "#DC2626", "#B91C1C", "#991B1B", "#7F1D1D", "#5C1414", "#3B0D0D",
            ]),
        },
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        palette: Palette {
            white: "#FFFFFF".to_string(),
            black: "#000000".to_string(),
            contrast_0: "#0A0F1A".to_string(),
            contrast: ColorScale::new([
                "#111827", "#1A2332", "#243044", "#2E3D55", "#3D4F6A", "#4F6380", "#647896",
                "#7B8DAA", "#96A5BC", "#B3BFCE", "#D1D9E3", "#E8ECF1", "#F5F7F9",
            ]),
            primary: ColorScale::new([
                "#1A102A", "#251538", "#351F4F", "#4A2C6E", "#63398F", "#8042B8", "#9D4EDD",
                "#B06BE8", "#C38AF0", "#D4A9F5", "#E4C8FA", "#F0E0FC", "#F8F0FE",
            ]),
            positive: ColorScale::new([
                "#031F15", "#052E20", "#0A4D36", "#0F6C4B", "#148A61", "#19A876", "#06FFA5",
                "#38FFB8", "#6AFFCB", "#9CFFDD", "#CEFFEE", "#E7FFF7", "#F3FFFB",
            ]),
            negative: ColorScale::new([
                "#1F0A0A", "#2D0F0F", "#4A1919", "#662323", "#832D2D", "#A03737", "#EF4444",
                "#F26969", "#F58D8D", "#F8B2B2", "#FBD6D6", "#FDEBEB", "#FEF5F5",
            ]),
        },
    }
}

/// Create the dim theme
pub fn dim_theme() -> Theme {
    Theme {
        name: ThemeName::Dim,
        palette: Palette {
            white: "#FFFFFF".to_string(),
            black: "#000000".to_string(),
            contrast_0: "#1A2332".to_string(),
            contrast: ColorScale::new([
                "#212D3F", "#2A384C", "#344459", "#3F5167", "#4D6078", "#5D7189", "#6E829A",
                "#8295AB", "#99A9BA", "#B3BFCE", "#CDD5DE", "#E5EAEF", "#F2F5F7",
            ]),
            primary: ColorScale::new([
                "#1E1430", "#2A1B40", "#3A2558", "#503376", "#684296", "#8348B5", "#9D4EDD",
                "#AD68E5", "#BE85EC", "#CEA3F2", "#DFC1F8", "#EFE0FB", "#F7F0FD",
            ]),
            positive: ColorScale::new([
                "#0A2519", "#0F3322", "#17523A", "#1F7052", "#288F6A", "#30AD82", "#06FFA5",
                "#3DFFB5", "#6DFFC5", "#9EFFD5", "#CEFFE5", "#E7FFF2", "#F3FFF9",
            ]),
            negative: ColorScale::new([
                "#250F0F", "#331414", "#4F1E1E", "#6B2828", "#873232", "#A33C3C", "#EF4444",
                "#F16C6C", "#F39393", "#F6BBBB", "#F9E2E2", "#FCF0F0", "#FEF8F8",
            ]),
        },
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
        ThemeName::Dim => dim_theme(),
    }
}
