//! Style values and fragments
//!
//! A [`StyleFragment`] is a partial style record: property names mapped to
//! [`StyleValue`]s. Atoms, literals and the output of flattening all share this
//! shape. Keys are kept sorted so two fragments built from the same inputs
//! serialize identically.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

// =============================================================================
// Property Names
// =============================================================================

/// Property names the engine reads or writes
pub mod props {
    /// Font size in pixels
    pub const FONT_SIZE: &str = "fontSize";
    /// Line height, relative multiplier or absolute pixels
    pub const LINE_HEIGHT: &str = "lineHeight";
    /// Font family name or CSS family list
    pub const FONT_FAMILY: &str = "fontFamily";
    /// Font weight ("400" … "800")
    pub const FONT_WEIGHT: &str = "fontWeight";
    /// Font style ("normal" or "italic")
    pub const FONT_STYLE: &str = "fontStyle";
    /// OpenType feature list
    pub const FONT_VARIANT: &str = "fontVariant";
    /// Letter spacing in pixels
    pub const LETTER_SPACING: &str = "letterSpacing";
    /// Text color
    pub const COLOR: &str = "color";
    /// Background color
    pub const BACKGROUND_COLOR: &str = "backgroundColor";
    /// Border color
    pub const BORDER_COLOR: &str = "borderColor";
}

// =============================================================================
// Style Value
// =============================================================================

/// A single style property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Boolean flag (`includeFontPadding: false`)
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// String value (colors, weights, family names)
    Text(String),
    /// Ordered list (font variants, transforms)
    List(Vec<StyleValue>),
    /// Nested record (shadow offsets)
    Record(StyleFragment),
}

impl StyleValue {
    /// Read the value as a finite number.
    ///
    /// Numeric strings are accepted, with an optional `px` suffix. Anything
    /// else yields `None`, never `NaN`.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Self::Number(n) => *n,
            Self::Text(s) => {
                let s = s.trim();
                let s = s.strip_suffix("px").unwrap_or(s).trim_end();
                s.parse::<f64>().ok()?
            }
            _ => return None,
        };
        n.is_finite().then_some(n)
    }

    /// Borrow the value as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<StyleValue>> for StyleValue {
    fn from(items: Vec<StyleValue>) -> Self {
        Self::List(items)
    }
}

impl From<StyleFragment> for StyleValue {
    fn from(record: StyleFragment) -> Self {
        Self::Record(record)
    }
}

// =============================================================================
// Style Fragment
// =============================================================================

/// A partial style record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleFragment {
    properties: BTreeMap<String, StyleValue>,
}

impl StyleFragment {
    /// Create an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a property, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Remove a property
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.properties.remove(key)
    }

    /// Get a property value
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.properties.get(key)
    }

    /// Get a property as a finite number
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(StyleValue::as_number)
    }

    /// Get a property as a string
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(StyleValue::as_str)
    }

    /// Check whether a property is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check whether the fragment has no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate properties in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, StyleValue> {
        self.properties.iter()
    }

    /// Copy every property of `other` into `self`, overwriting on conflict
    pub fn merge_from(&mut self, other: &StyleFragment) {
        for (key, value) in &other.properties {
            self.properties.insert(key.clone(), value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleFragment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StyleFragment {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // StyleValue Tests
    // ==========================================================================

    #[test]
    fn test_as_number() {
        assert_eq!(StyleValue::from(16).as_number(), Some(16.0));
        assert_eq!(StyleValue::from("20").as_number(), Some(20.0));
        assert_eq!(StyleValue::from(" 18px ").as_number(), Some(18.0));
        assert_eq!(StyleValue::from("1.5").as_number(), Some(1.5));
        assert_eq!(StyleValue::from("large").as_number(), None);
        assert_eq!(StyleValue::from("").as_number(), None);
        assert_eq!(StyleValue::from(true).as_number(), None);
    }

    #[test]
    fn test_as_number_rejects_non_finite() {
        assert_eq!(StyleValue::Number(f64::NAN).as_number(), None);
        assert_eq!(StyleValue::Number(f64::INFINITY).as_number(), None);
        assert_eq!(StyleValue::from("NaN").as_number(), None);
        assert_eq!(StyleValue::from("inf").as_number(), None);
    }

    // ==========================================================================
    // StyleFragment Tests
    // ==========================================================================

    #[test]
    fn test_fragment_builder() {
        let frag = StyleFragment::new()
            .with(props::FONT_SIZE, 16)
            .with(props::COLOR, "#000000");

        assert_eq!(frag.len(), 2);
        assert_eq!(frag.number(props::FONT_SIZE), Some(16.0));
        assert_eq!(frag.text(props::COLOR), Some("#000000"));
        assert!(frag.text(props::FONT_SIZE).is_none());
    }

    #[test]
    fn test_merge_from_overwrites() {
        let mut base = StyleFragment::new().with("paddingTop", 4).with("color", "red");
        let top = StyleFragment::new().with("color", "blue").with("margin", 8);

        base.merge_from(&top);

        assert_eq!(base.text("color"), Some("blue"));
        assert_eq!(base.number("paddingTop"), Some(4.0));
        assert_eq!(base.number("margin"), Some(8.0));
    }

    #[test]
    fn test_from_iterator() {
        let frag: StyleFragment = vec![("flex", 1), ("gap", 8)].into_iter().collect();
        assert_eq!(frag.number("flex"), Some(1.0));
        assert_eq!(frag.number("gap"), Some(8.0));
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_fragment_json_shape() {
        let frag = StyleFragment::new()
            .with(props::FONT_SIZE, 16)
            .with(props::FONT_VARIANT, vec![StyleValue::from("no-contextual")])
            .with(
                "shadowOffset",
                StyleFragment::new().with("width", 0).with("height", 1),
            );

        let json = serde_json::to_value(&frag).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fontSize": 16.0,
                "fontVariant": ["no-contextual"],
                "shadowOffset": {"height": 1.0, "width": 0.0}
            })
        );
    }

    #[test]
    fn test_fragment_from_json() {
        let frag: StyleFragment =
            serde_json::from_str(r#"{"fontSize": 20, "fontWeight": "600", "includeFontPadding": false}"#)
                .unwrap();

        assert_eq!(frag.number(props::FONT_SIZE), Some(20.0));
        assert_eq!(frag.text(props::FONT_WEIGHT), Some("600"));
        assert_eq!(frag.get("includeFontPadding"), Some(&StyleValue::Bool(false)));
    }
}
