//! Variant values and caller selections.

use std::borrow::Cow;
use std::fmt;

/// A value chosen for a variant axis.
///
/// Boolean-like axes declare the string keys `"true"` and `"false"`; a
/// native boolean is normalized to the matching key before lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariantValue {
    /// A named value such as `"sm"` or `"top"`.
    Str(String),
    /// A native boolean for boolean-like axes.
    Bool(bool),
}

impl VariantValue {
    /// The string key used to look this value up in a variant table.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            Self::Str(value) => Cow::Borrowed(value),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
        }
    }

    /// Interpret this value as a boolean, accepting the string literals too.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Str(value) => match value.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
        }
    }

    /// Check whether the caller passed a native boolean.
    pub fn is_native_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_key())
    }
}

impl From<&str> for VariantValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for VariantValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for VariantValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A caller-supplied partial mapping from axis name to value.
///
/// Axes that are absent fall back to the recipe's default variants.
///
/// # Example
///
/// ```
/// use horizon_lattice_recipe::recipe::VariantSelection;
///
/// let selection = VariantSelection::new()
///     .with("size", "sm")
///     .with("isOpen", true);
///
/// assert_eq!(selection.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSelection {
    entries: Vec<(String, VariantValue)>,
}

impl VariantSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a value for an axis, returning the selection for chaining.
    pub fn with(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.set(axis, value);
        self
    }

    /// Choose a value for an axis, replacing any earlier choice.
    pub fn set(&mut self, axis: impl Into<String>, value: impl Into<VariantValue>) {
        let axis = axis.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == axis) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((axis, value)),
        }
    }

    /// Get the chosen value for an axis.
    pub fn get(&self, axis: &str) -> Option<&VariantValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == axis)
            .map(|(_, value)| value)
    }

    /// Check whether an axis was chosen.
    pub fn contains(&self, axis: &str) -> bool {
        self.get(axis).is_some()
    }

    /// Iterate over chosen axes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of chosen axes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing was chosen.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for VariantSelection
where
    K: Into<String>,
    V: Into<VariantValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut selection = Self::new();
        for (axis, value) in iter {
            selection.set(axis, value);
        }
        selection
    }
}

/// The selection actually used for resolution.
///
/// Holds one entry per recipe axis, in declaration order, with the caller's
/// choice or the default already applied and normalized to its string key.
/// `None` marks an axis with neither a choice nor a default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EffectiveSelection {
    values: Vec<(String, Option<String>)>,
}

impl EffectiveSelection {
    pub(crate) fn from_values(values: Vec<(String, Option<String>)>) -> Self {
        Self { values }
    }

    /// The effective key for an axis, if it is set.
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == axis)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Iterate over every axis and its effective key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Convert back into a caller selection containing only the set axes.
    pub fn to_selection(&self) -> VariantSelection {
        self.values
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| (name.clone(), v.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_normalizes_to_key() {
        assert_eq!(VariantValue::from(true).as_key(), "true");
        assert_eq!(VariantValue::from(false).as_key(), "false");
        assert_eq!(VariantValue::from("false").as_bool(), Some(false));
        assert_eq!(VariantValue::from("sm").as_bool(), None);
    }

    #[test]
    fn set_replaces_in_place() {
        let selection = VariantSelection::new()
            .with("size", "sm")
            .with("variant", "ghost")
            .with("size", "lg");

        let axes: Vec<_> = selection.iter().map(|(a, v)| (a, v.to_string())).collect();
        assert_eq!(
            axes,
            vec![("size", "lg".to_string()), ("variant", "ghost".to_string())]
        );
    }

    #[test]
    fn collect_from_pairs() {
        let selection: VariantSelection = [("position", "top"), ("variant", "dark")]
            .into_iter()
            .collect();
        assert!(selection.contains("position"));
        assert_eq!(selection.get("variant"), Some(&VariantValue::from("dark")));
    }

    #[test]
    fn effective_selection_lookup() {
        let effective = EffectiveSelection::from_values(vec![
            ("size".into(), Some("md".into())),
            ("tone".into(), None),
        ]);
        assert_eq!(effective.get("size"), Some("md"));
        assert_eq!(effective.get("tone"), None);
        assert_eq!(effective.get("missing"), None);
        assert_eq!(effective.to_selection().len(), 1);
    }
}
