//! Atom store
//!
//! Atoms are small, named, immutable style fragments: one layout rule, one
//! spacing step, one text size. Call sites compose them instead of writing
//! literal values. The set of atoms is closed ([`Atom`]), so lookups by
//! variant are total; string lookups exist for names that arrive through
//! configuration.
//!
//! Theme-colored atoms (`text`, `bg`, `border_contrast_low`, …) are resolved
//! against the [`Theme`] the store is built for, so a store is built once per
//! theme and shared by reference.
//!
//! ```rust
//! use alf::atoms::{Atom, AtomStore};
//! use alf::flatten::flatten;
//! use alf::theme::dark_theme;
//!
//! let atoms = AtomStore::new(&dark_theme());
//! let row = flatten(&[atoms.input(Atom::FlexRow), atoms.input(Atom::GapSm)]);
//! assert_eq!(row.text("flexDirection"), Some("row"));
//! assert_eq!(row.number("gap"), Some(8.0));
//! ```

use crate::error::{Error, Result};
use crate::flatten::StyleInput;
use crate::style::{props, StyleFragment, StyleValue};
use crate::theme::{with_alpha, Theme, ThemeName};
use crate::tokens::{border_width, font_size, font_weight, line_height, radius, space};

macro_rules! define_atoms {
    ($($variant:ident => $name:literal,)+) => {
        /// Every atom in the design system
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Atom {
            $(
                #[doc = concat!("The `", $name, "` atom")]
                $variant,
            )+
        }

        impl Atom {
            /// Every atom, in declaration order
            pub const ALL: &'static [Atom] = &[$(Atom::$variant,)+];

            /// Identifier call sites use for this atom
            pub fn name(self) -> &'static str {
                match self {
                    $(Atom::$variant => $name,)+
                }
            }
        }
    };
}

define_atoms! {
    // Layout
    Flex => "flex",
    FlexRow => "flex_row",
    FlexCol => "flex_col",
    FlexWrap => "flex_wrap",
    Flex1 => "flex_1",
    FlexGrow => "flex_grow",
    FlexShrink => "flex_shrink",
    AlignStart => "align_start",
    AlignCenter => "align_center",
    AlignEnd => "align_end",
    JustifyStart => "justify_start",
    JustifyCenter => "justify_center",
    JustifyEnd => "justify_end",
    JustifyBetween => "justify_between",
    Absolute => "absolute",
    Relative => "relative",
    Inset0 => "inset_0",
    WFull => "w_full",
    HFull => "h_full",
    OverflowHidden => "overflow_hidden",
    // Padding
    PXxs => "p_2xs",
    PXs => "p_xs",
    PSm => "p_sm",
    PMd => "p_md",
    PLg => "p_lg",
    PXl => "p_xl",
    PXxl => "p_2xl",
    PXxxl => "p_3xl",
    PXxxxl => "p_4xl",
    PXxxxxl => "p_5xl",
    PxXs => "px_xs",
    PxSm => "px_sm",
    PxMd => "px_md",
    PxLg => "px_lg",
    PxXl => "px_xl",
    PyXs => "py_xs",
    PySm => "py_sm",
    PyMd => "py_md",
    PyLg => "py_lg",
    PyXl => "py_xl",
    // Margin
    MtXs => "mt_xs",
    MtSm => "mt_sm",
    MtMd => "mt_md",
    MtLg => "mt_lg",
    MbXs => "mb_xs",
    MbSm => "mb_sm",
    MbMd => "mb_md",
    MbLg => "mb_lg",
    // Gap
    GapXxs => "gap_2xs",
    GapXs => "gap_xs",
    GapSm => "gap_sm",
    GapMd => "gap_md",
    GapLg => "gap_lg",
    GapXl => "gap_xl",
    // Typography
    TextXxs => "text_2xs",
    TextXs => "text_xs",
    TextSm => "text_sm",
    TextMd => "text_md",
    TextLg => "text_lg",
    TextXl => "text_xl",
    TextXxl => "text_2xl",
    TextXxxl => "text_3xl",
    TextXxxxl => "text_4xl",
    TextXxxxxl => "text_5xl",
    LeadingTight => "leading_tight",
    LeadingSnug => "leading_snug",
    LeadingNormal => "leading_normal",
    LeadingRelaxed => "leading_relaxed",
    FontNormal => "font_normal",
    FontMedium => "font_medium",
    FontSemiBold => "font_semi_bold",
    FontBold => "font_bold",
    FontHeavy => "font_heavy",
    Italic => "italic",
    TextLeft => "text_left",
    TextCenter => "text_center",
    TextRight => "text_right",
    Underline => "underline",
    // Radius
    RoundedXxs => "rounded_2xs",
    RoundedXs => "rounded_xs",
    RoundedSm => "rounded_sm",
    RoundedMd => "rounded_md",
    RoundedLg => "rounded_lg",
    RoundedFull => "rounded_full",
    // Border
    Border => "border",
    BorderT => "border_t",
    BorderB => "border_b",
    BorderHairline => "border_hairline",
    // Theme colors
    Text => "text",
    TextContrastLow => "text_contrast_low",
    TextContrastMedium => "text_contrast_medium",
    TextContrastHigh => "text_contrast_high",
    TextPrimary => "text_primary",
    TextNegative => "text_negative",
    TextPositive => "text_positive",
    Bg => "bg",
    BgContrast25 => "bg_contrast_25",
    BgContrast50 => "bg_contrast_50",
    BgContrast100 => "bg_contrast_100",
    BgBackdrop => "bg_backdrop",
    BorderContrastLow => "border_contrast_low",
    BorderContrastMedium => "border_contrast_medium",
    BorderContrastHigh => "border_contrast_high",
    ShadowSm => "shadow_sm",
    ShadowMd => "shadow_md",
    ShadowLg => "shadow_lg",
}

fn one(key: &str, value: impl Into<StyleValue>) -> StyleFragment {
    StyleFragment::new().with(key, value)
}

fn pair(a: &str, b: &str, value: f64) -> StyleFragment {
    StyleFragment::new().with(a, value).with(b, value)
}

fn shadow(theme: &Theme, radius: f64, elevation: f64) -> StyleFragment {
    StyleFragment::new()
        .with("shadowColor", theme.palette.black.as_str())
        .with("shadowOpacity", theme.name.select(0.1, 0.4, 0.4))
        .with("shadowRadius", radius)
        .with(
            "shadowOffset",
            StyleFragment::new().with("width", 0).with("height", 1),
        )
        .with("elevation", elevation)
}

impl Atom {
    /// Whether the atom's values depend on the theme
    pub fn is_themed(self) -> bool {
        self >= Atom::Text
    }

    fn build(self, theme: &Theme) -> StyleFragment {
        use Atom::*;

        match self {
            Flex => one("display", "flex"),
            FlexRow => one("flexDirection", "row"),
            FlexCol => one("flexDirection", "column"),
            FlexWrap => one("flexWrap", "wrap"),
            Flex1 => StyleFragment::new()
                .with("flex", 1)
                .with("flexBasis", 0)
                .with("flexShrink", 1),
            FlexGrow => one("flexGrow", 1),
            FlexShrink => one("flexShrink", 1),
            AlignStart => one("alignItems", "flex-start"),
            AlignCenter => one("alignItems", "center"),
            AlignEnd => one("alignItems", "flex-end"),
            JustifyStart => one("justifyContent", "flex-start"),
            JustifyCenter => one("justifyContent", "center"),
            JustifyEnd => one("justifyContent", "flex-end"),
            JustifyBetween => one("justifyContent", "space-between"),
            Absolute => one("position", "absolute"),
            Relative => one("position", "relative"),
            Inset0 => StyleFragment::new()
                .with("top", 0)
                .with("right", 0)
                .with("bottom", 0)
                .with("left", 0),
            WFull => one("width", "100%"),
            HFull => one("height", "100%"),
            OverflowHidden => one("overflow", "hidden"),

            PXxs => one("padding", space::XXS),
            PXs => one("padding", space::XS),
            PSm => one("padding", space::SM),
            PMd => one("padding", space::MD),
            PLg => one("padding", space::LG),
            PXl => one("padding", space::XL),
            PXxl => one("padding", space::XXL),
            PXxxl => one("padding", space::XXXL),
            PXxxxl => one("padding", space::XXXXL),
            PXxxxxl => one("padding", space::XXXXXL),
            PxXs => pair("paddingLeft", "paddingRight", space::XS),
            PxSm => pair("paddingLeft", "paddingRight", space::SM),
            PxMd => pair("paddingLeft", "paddingRight", space::MD),
            PxLg => pair("paddingLeft", "paddingRight", space::LG),
            PxXl => pair("paddingLeft", "paddingRight", space::XL),
            PyXs => pair("paddingTop", "paddingBottom", space::XS),
            PySm => pair("paddingTop", "paddingBottom", space::SM),
            PyMd => pair("paddingTop", "paddingBottom", space::MD),
            PyLg => pair("paddingTop", "paddingBottom", space::LG),
            PyXl => pair("paddingTop", "paddingBottom", space::XL),

            MtXs => one("marginTop", space::XS),
            MtSm => one("marginTop", space::SM),
            MtMd => one("marginTop", space::MD),
            MtLg => one("marginTop", space::LG),
            MbXs => one("marginBottom", space::XS),
            MbSm => one("marginBottom", space::SM),
            MbMd => one("marginBottom", space::MD),
            MbLg => one("marginBottom", space::LG),

            GapXxs => one("gap", space::XXS),
            GapXs => one("gap", space::XS),
            GapSm => one("gap", space::SM),
            GapMd => one("gap", space::MD),
            GapLg => one("gap", space::LG),
            GapXl => one("gap", space::XL),

            // Text sizes carry a matching relative line height
            TextXxs => text_size(font_size::XXS),
            TextXs => text_size(font_size::XS),
            TextSm => text_size(font_size::SM),
            TextMd => text_size(font_size::MD),
            TextLg => text_size(font_size::LG),
            TextXl => text_size(font_size::XL),
            TextXxl => text_size(font_size::XXL),
            TextXxxl => text_size(font_size::XXXL),
            TextXxxxl => text_size(font_size::XXXXL),
            TextXxxxxl => text_size(font_size::XXXXXL),
            LeadingTight => one(props::LINE_HEIGHT, line_height::TIGHT),
            LeadingSnug => one(props::LINE_HEIGHT, line_height::SNUG),
            LeadingNormal => one(props::LINE_HEIGHT, line_height::NORMAL),
            LeadingRelaxed => one(props::LINE_HEIGHT, line_height::RELAXED),
            FontNormal => one(props::FONT_WEIGHT, font_weight::NORMAL),
            FontMedium => one(props::FONT_WEIGHT, font_weight::MEDIUM),
            FontSemiBold => one(props::FONT_WEIGHT, font_weight::SEMI_BOLD),
            FontBold => one(props::FONT_WEIGHT, font_weight::BOLD),
            FontHeavy => one(props::FONT_WEIGHT, font_weight::HEAVY),
            Italic => one(props::FONT_STYLE, "italic"),
            TextLeft => one("textAlign", "left"),
            TextCenter => one("textAlign", "center"),
            TextRight => one("textAlign", "right"),
            Underline => one("textDecorationLine", "underline"),

            RoundedXxs => one("borderRadius", radius::XXS),
            RoundedXs => one("borderRadius", radius::XS),
            RoundedSm => one("borderRadius", radius::SM),
            RoundedMd => one("borderRadius", radius::MD),
            RoundedLg => one("borderRadius", radius::LG),
            RoundedFull => one("borderRadius", radius::FULL),

            Border => one("borderWidth", border_width::THIN),
            BorderT => one("borderTopWidth", border_width::THIN),
            BorderB => one("borderBottomWidth", border_width::THIN),
            BorderHairline => one("borderWidth", border_width::HAIRLINE),

            Text => one(props::COLOR, theme.text_color()),
            TextContrastLow => one(props::COLOR, theme.contrast(400)),
            TextContrastMedium => one(props::COLOR, theme.contrast(700)),
            TextContrastHigh => one(props::COLOR, theme.contrast(900)),
            TextPrimary => one(props::COLOR, theme.primary(500)),
            TextNegative => one(
                props::COLOR,
                theme.palette.negative.get(500).unwrap_or(theme.text_color()),
            ),
            TextPositive => one(
                props::COLOR,
                theme.palette.positive.get(500).unwrap_or(theme.text_color()),
            ),
            Bg => one(props::BACKGROUND_COLOR, theme.contrast(0)),
            BgContrast25 => one(props::BACKGROUND_COLOR, theme.contrast(25)),
            BgContrast50 => one(props::BACKGROUND_COLOR, theme.contrast(50)),
            BgContrast100 => one(props::BACKGROUND_COLOR, theme.contrast(100)),
            BgBackdrop => one(
                props::BACKGROUND_COLOR,
                with_alpha(&theme.palette.black, theme.name.select(0.5, 0.8, 0.8)),
            ),
            BorderContrastLow => one(props::BORDER_COLOR, theme.contrast(100)),
            BorderContrastMedium => one(props::BORDER_COLOR, theme.contrast(200)),
            BorderContrastHigh => one(props::BORDER_COLOR, theme.contrast(300)),
            ShadowSm => shadow(theme, 8.0, 8.0),
            ShadowMd => shadow(theme, 16.0, 16.0),
            ShadowLg => shadow(theme, 32.0, 24.0),
        }
    }
}

fn text_size(size: f64) -> StyleFragment {
    StyleFragment::new()
        .with(props::FONT_SIZE, size)
        .with(props::LINE_HEIGHT, line_height::TIGHT)
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Atom {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Atom::ALL
            .iter()
            .copied()
            .find(|atom| atom.name() == s)
            .ok_or_else(|| Error::UnknownAtom(s.to_string()))
    }
}

// =============================================================================
// Atom Store
// =============================================================================

/// Every atom resolved for one theme
#[derive(Debug, Clone, PartialEq)]
pub struct AtomStore {
    theme_name: ThemeName,
    atoms: Vec<StyleFragment>,
}

impl AtomStore {
    /// Build every atom for `theme`
    pub fn new(theme: &Theme) -> Self {
        let atoms: Vec<StyleFragment> = Atom::ALL.iter().map(|atom| atom.build(theme)).collect();
        tracing::debug!(theme = %theme.name, count = atoms.len(), "built atom store");
        Self {
            theme_name: theme.name,
            atoms,
        }
    }

    /// Theme the themed atoms were resolved against
    pub fn theme_name(&self) -> ThemeName {
        self.theme_name
    }

    /// Get an atom's fragment
    pub fn get(&self, atom: Atom) -> &StyleFragment {
        // `atoms` is built from `Atom::ALL`, which lists variants in
        // declaration order, so the discriminant is the index.
        &self.atoms[atom as usize]
    }

    /// Get an atom as a layer of a style sequence
    pub fn input(&self, atom: Atom) -> StyleInput<'_> {
        StyleInput::Fragment(self.get(atom))
    }

    /// Look up an atom by its identifier (`"flex_row"`, `"text_md"`, …)
    pub fn lookup(&self, name: &str) -> Result<&StyleFragment> {
        let atom: Atom = name.parse()?;
        Ok(self.get(atom))
    }
}

impl Default for AtomStore {
    fn default() -> Self {
        Self::new(&crate::theme::light_theme())
    }
}
