//! Style flattening
//!
//! Call sites compose styles as ordered layers: atoms, literals, conditional
//! layers that may be switched off, and nested groups of all three. [`flatten`]
//! folds those layers left to right into a single [`StyleFragment`], later
//! layers overwriting earlier ones key by key.
//!
//! ```rust
//! use alf::flatten::{flatten, when, StyleInput};
//! use alf::style::StyleFragment;
//!
//! let base = StyleFragment::new().with("padding", 8).with("color", "black");
//! let active = StyleFragment::new().with("color", "blue");
//!
//! let merged = flatten(&[StyleInput::from(&base), when(true, &active)]);
//! assert_eq!(merged.text("color"), Some("blue"));
//! assert_eq!(merged.number("padding"), Some(8.0));
//! ```

use crate::style::StyleFragment;

/// One layer of a style sequence
#[derive(Debug, Clone, PartialEq)]
pub enum StyleInput<'a> {
    /// A shared fragment, usually an atom
    Fragment(&'a StyleFragment),
    /// A fragment built at the call site
    Owned(StyleFragment),
    /// A layer whose condition did not apply
    Skip,
    /// A nested sequence, flattened before it is merged
    Nested(Vec<StyleInput<'a>>),
}

impl StyleInput<'_> {
    /// Check whether this layer contributes nothing
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }
}

impl<'a> From<&'a StyleFragment> for StyleInput<'a> {
    fn from(fragment: &'a StyleFragment) -> Self {
        Self::Fragment(fragment)
    }
}

impl From<StyleFragment> for StyleInput<'_> {
    fn from(fragment: StyleFragment) -> Self {
        Self::Owned(fragment)
    }
}

impl<'a> From<Option<&'a StyleFragment>> for StyleInput<'a> {
    fn from(fragment: Option<&'a StyleFragment>) -> Self {
        fragment.map_or(Self::Skip, Self::Fragment)
    }
}

impl<'a> From<Vec<StyleInput<'a>>> for StyleInput<'a> {
    fn from(layers: Vec<StyleInput<'a>>) -> Self {
        Self::Nested(layers)
    }
}

/// A layer that applies only when `condition` holds
pub fn when(condition: bool, fragment: &StyleFragment) -> StyleInput<'_> {
    if condition {
        StyleInput::Fragment(fragment)
    } else {
        StyleInput::Skip
    }
}

/// Merge a sequence of layers into one fragment.
///
/// For every key present in any layer, the result holds the value from the
/// rightmost layer that defines it. Skipped layers contribute nothing and an
/// empty sequence yields an empty fragment.
pub fn flatten(layers: &[StyleInput<'_>]) -> StyleFragment {
    let mut merged = StyleFragment::new();
    flatten_into(&mut merged, layers);
    merged
}

fn flatten_into(acc: &mut StyleFragment, layers: &[StyleInput<'_>]) {
    for layer in layers {
        match layer {
            StyleInput::Skip => {}
            StyleInput::Fragment(fragment) => acc.merge_from(fragment),
            StyleInput::Owned(fragment) => acc.merge_from(fragment),
            // Same result as merging `flatten(inner)` as one fragment.
            StyleInput::Nested(inner) => flatten_into(acc, inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(pairs: &[(&str, i32)]) -> StyleFragment {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn test_later_layer_wins() {
        let a = frag(&[("padding", 4), ("margin", 2)]);
        let b = frag(&[("padding", 12)]);

        let ab = flatten(&[(&a).into(), (&b).into()]);
        assert_eq!(ab.number("padding"), Some(12.0));
        assert_eq!(ab.number("margin"), Some(2.0));

        let ba = flatten(&[(&b).into(), (&a).into()]);
        assert_eq!(ba.number("padding"), Some(4.0));
    }

    #[test]
    fn test_skip_layers_are_ignored() {
        let a = frag(&[("gap", 8)]);
        let with_skips = flatten(&[
            StyleInput::Skip,
            (&a).into(),
            StyleInput::from(None::<&StyleFragment>),
        ]);
        assert_eq!(with_skips, flatten(&[(&a).into()]));
    }

    #[test]
    fn test_empty_sequence() {
        assert!(flatten(&[]).is_empty());
        assert!(flatten(&[StyleInput::Skip, StyleInput::Skip]).is_empty());
    }

    #[test]
    fn test_nested_sequence() {
        let a = frag(&[("flex", 1), ("gap", 4)]);
        let b = frag(&[("gap", 8)]);
        let c = frag(&[("flex", 2)]);

        let nested = flatten(&[
            StyleInput::Nested(vec![(&a).into(), (&b).into()]),
            (&c).into(),
        ]);
        let flat = flatten(&[(&a).into(), (&b).into(), (&c).into()]);
        assert_eq!(nested, flat);
        assert_eq!(nested.number("gap"), Some(8.0));
        assert_eq!(nested.number("flex"), Some(2.0));
    }

    #[test]
    fn test_deeply_nested_with_skips() {
        let a = frag(&[("opacity", 1)]);
        let b = frag(&[("opacity", 0)]);

        let merged = flatten(&[
            (&a).into(),
            StyleInput::Nested(vec![StyleInput::Nested(vec![StyleInput::Skip, (&b).into()])]),
        ]);
        assert_eq!(merged.number("opacity"), Some(0.0));
    }

    #[test]
    fn test_when() {
        let active = frag(&[("borderWidth", 1)]);
        assert!(when(false, &active).is_skip());
        assert_eq!(when(true, &active), StyleInput::Fragment(&active));
    }

    #[test]
    fn test_owned_layers() {
        let base = frag(&[("width", 10)]);
        let merged = flatten(&[(&base).into(), frag(&[("width", 20)]).into()]);
        assert_eq!(merged.number("width"), Some(20.0));
    }

    #[test]
    fn test_inputs_untouched_and_deterministic() {
        let a = frag(&[("padding", 4)]);
        let b = frag(&[("padding", 8), ("margin", 1)]);
        let layers = [StyleInput::from(&a), StyleInput::from(&b)];

        let first = flatten(&layers);
        let second = flatten(&layers);
        assert_eq!(first, second);
        assert_eq!(a, frag(&[("padding", 4)]));
    }
}
