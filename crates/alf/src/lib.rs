//! Atomic layout framework for Aurora Compass
//!
//! This crate resolves component styles. Styles are built from small
//! precomputed fragments (atoms), combined in order with the flattener, and
//! text styles are finally normalized against the user's font preferences.
//!
//! # Pipeline
//!
//! 1. [`AtomStore`] builds every atom once for a [`theme::Theme`]
//! 2. [`flatten`](fn@flatten) merges a sequence of fragments, later keys winning
//! 3. [`normalize`] resolves font size, line height and font family
//!
//! # Modules
//!
//! - [`style`] - Style values and fragments
//! - [`flatten`](mod@flatten) - Ordered style merging
//! - [`atoms`] - The atom vocabulary and store
//! - [`tokens`] - Design tokens (spacing, font sizes, radii)
//! - [`theme`] - Color palettes and theme selection
//! - [`platform`] - Platform-conditional styles
//! - [`fonts`] - Font preferences, font stacks and typography context
//! - [`typography`] - Text style normalization
//! - [`emoji`] - Emoji detection for text children
//! - [`config`] - Normalization tuning
//!
//! # Example
//!
//! ```rust
//! use alf::{flatten, normalize, Atom, AtomStore, TypographyContext};
//! use alf::theme::{get_theme, ThemeName};
//!
//! let store = AtomStore::new(&get_theme(ThemeName::Dark));
//! let style = flatten(&[store.input(Atom::TextLg), store.input(Atom::FontBold)]);
//!
//! let text = normalize(&style, &TypographyContext::default());
//! assert_eq!(text.number("fontSize"), Some(18.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod atoms;
pub mod config;
pub mod emoji;
pub mod error;
pub mod flatten;
pub mod fonts;
pub mod platform;
pub mod style;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use atoms::{Atom, AtomStore};
pub use config::StyleConfig;
pub use emoji::{child_has_emoji, is_only_emoji, TextChild};
pub use error::{Error, Result};
pub use flatten::{flatten, when, StyleInput};
pub use fonts::{FontFamilyMode, FontPreferences, FontScale, FontStack, TypographyContext};
pub use platform::Platform;
pub use style::{props, StyleFragment, StyleValue};
pub use theme::{get_theme, Theme, ThemeName};
pub use typography::{leading, normalize, normalize_text_styles, TextStyleNormalizer};
