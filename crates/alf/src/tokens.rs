//! Design tokens
//!
//! Raw scales the atoms are built from: spacing, font sizes, line heights,
//! font weights, radii and border widths. Atoms reference these instead of
//! literal values so every call site draws from the same scale.

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
pub mod space {
    /// 2px - Extra extra small
    pub const XXS: f64 = 2.0;
    /// 4px - Extra small
    pub const XS: f64 = 4.0;
    /// 8px - Small
    pub const SM: f64 = 8.0;
    /// 12px - Medium
    pub const MD: f64 = 12.0;
    /// 16px - Large
    pub const LG: f64 = 16.0;
    /// 20px - Extra large
    pub const XL: f64 = 20.0;
    /// 24px - 2x large
    pub const XXL: f64 = 24.0;
    /// 28px - 3x large
    pub const XXXL: f64 = 28.0;
    /// 32px - 4x large
    pub const XXXXL: f64 = 32.0;
    /// 40px - 5x large
    pub const XXXXXL: f64 = 40.0;
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Font size scale in pixels
pub mod font_size {
    /// 2x extra small (10px)
    pub const XXS: f64 = 10.0;
    /// Extra small (12px)
    pub const XS: f64 = 12.0;
    /// Small (14px)
    pub const SM: f64 = 14.0;
    /// Medium, the body default (16px)
    pub const MD: f64 = 16.0;
    /// Large (18px)
    pub const LG: f64 = 18.0;
    /// Extra large (20px)
    pub const XL: f64 = 20.0;
    /// 2x large (22px)
    pub const XXL: f64 = 22.0;
    /// 3x large (26px)
    pub const XXXL: f64 = 26.0;
    /// 4x large (32px)
    pub const XXXXL: f64 = 32.0;
    /// 5x large (40px)
    pub const XXXXXL: f64 = 40.0;
}

/// Line height multipliers
pub mod line_height {
    /// Tight (1.15)
    pub const TIGHT: f64 = 1.15;
    /// Snug (1.3)
    pub const SNUG: f64 = 1.3;
    /// Normal (1.5)
    pub const NORMAL: f64 = 1.5;
    /// Relaxed (1.625)
    pub const RELAXED: f64 = 1.625;
}

/// Font weight values, as strings the way text styles carry them
pub mod font_weight {
    /// Normal/Regular
    pub const NORMAL: &str = "400";
    /// Medium
    pub const MEDIUM: &str = "500";
    /// Semi-bold
    pub const SEMI_BOLD: &str = "600";
    /// Bold
    pub const BOLD: &str = "700";
    /// Heavy/Extra bold
    pub const HEAVY: &str = "800";
}

// =============================================================================
// Shape Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// 2x extra small (2px)
    pub const XXS: f64 = 2.0;
    /// Extra small (4px)
    pub const XS: f64 = 4.0;
    /// Small (8px)
    pub const SM: f64 = 8.0;
    /// Medium (12px)
    pub const MD: f64 = 12.0;
    /// Large (16px)
    pub const LG: f64 = 16.0;
    /// Full/round
    pub const FULL: f64 = 999.0;
}

/// Border width tokens
pub mod border_width {
    /// Hairline border (0.5px)
    pub const HAIRLINE: f64 = 0.5;
    /// Thin border (1px)
    pub const THIN: f64 = 1.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_scale_ascends() {
        let values = [
            space::XXS,
            space::XS,
            space::SM,
            space::MD,
            space::LG,
            space::XL,
            space::XXL,
            space::XXXL,
            space::XXXXL,
            space::XXXXXL,
        ];
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_font_size_scale() {
        assert!(font_size::XS < font_size::SM);
        assert!(font_size::SM < font_size::MD);
        assert!(font_size::MD < font_size::LG);
        assert_eq!(font_size::MD, 16.0);
    }

    #[test]
    fn test_line_heights_are_relative() {
        for lh in [line_height::TIGHT, line_height::SNUG, line_height::NORMAL, line_height::RELAXED] {
            assert!(lh > 1.0 && lh <= 2.0);
        }
    }
}
