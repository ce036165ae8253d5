//! Platform-conditional style layers
//!
//! Some layers only apply on one rendering target. Rather than coercing
//! `undefined` into a no-op, the helpers here return [`StyleInput::Skip`] when
//! the platform does not match, so they slot straight into a style sequence.

use crate::flatten::StyleInput;
use crate::style::StyleFragment;
use serde::{Deserialize, Serialize};

/// Rendering target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Browser
    #[default]
    Web,
    /// iOS native
    Ios,
    /// Android native
    Android,
}

impl Platform {
    /// Check if this is the web target
    pub fn is_web(self) -> bool {
        self == Platform::Web
    }

    /// Check if this is a native target
    pub fn is_native(self) -> bool {
        !self.is_web()
    }

    /// Pick the value matching this platform
    pub fn select<T>(self, web: T, ios: T, android: T) -> T {
        match self {
            Platform::Web => web,
            Platform::Ios => ios,
            Platform::Android => android,
        }
    }

    /// Layer applied on web only
    pub fn web(self, fragment: &StyleFragment) -> StyleInput<'_> {
        self.only(self.is_web(), fragment)
    }

    /// Layer applied on iOS and Android
    pub fn native(self, fragment: &StyleFragment) -> StyleInput<'_> {
        self.only(self.is_native(), fragment)
    }

    /// Layer applied on iOS only
    pub fn ios(self, fragment: &StyleFragment) -> StyleInput<'_> {
        self.only(self == Platform::Ios, fragment)
    }

    /// Layer applied on Android only
    pub fn android(self, fragment: &StyleFragment) -> StyleInput<'_> {
        self.only(self == Platform::Android, fragment)
    }

    fn only(self, applies: bool, fragment: &StyleFragment) -> StyleInput<'_> {
        crate::flatten::when(applies, fragment)
    }
}
