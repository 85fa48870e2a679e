#![forbid(unsafe_code)]

//! Key/value prop bags forwarded to render sources.
//!
//! A [`Props`] bag maps string keys to small scalar [`PropValue`]s. Bags are
//! plain values: merging produces a new bag and never mutates either input,
//! which is what lets the memoized default slot capture one bag and apply
//! per-call overrides on top of it.

use ahash::AHashMap;

/// A single prop value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl PropValue {
    /// String contents, if this is a `Str`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Integer contents, if this is an `Int`.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Float contents, if this is a `Float`.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Boolean contents, if this is a `Bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for PropValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// A key/value bag of props.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: AHashMap<String, PropValue>,
}

impl Props {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    /// Look up a string value by key.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    /// Look up an integer value by key.
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(PropValue::as_int)
    }

    /// Look up a float value by key.
    #[must_use]
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(PropValue::as_float)
    }

    /// Look up a boolean value by key.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(PropValue::as_bool)
    }

    /// Whether the bag holds a value for `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// A new bag holding this bag's entries with `overrides` applied on top.
    ///
    /// On key collision the override wins. Neither input is mutated.
    #[must_use]
    pub fn merged(&self, overrides: &Props) -> Props {
        let mut entries = self.entries.clone();
        for (k, v) in &overrides.entries {
            entries.insert(k.clone(), v.clone());
        }
        Props { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_typed_get() {
        let mut props = Props::new();
        props.set("label", "Find...");
        props.set("count", 3i64);
        props.set("ratio", 0.5);
        props.set("visible", true);

        assert_eq!(props.get_str("label"), Some("Find..."));
        assert_eq!(props.get_int("count"), Some(3));
        assert_eq!(props.get_float("ratio"), Some(0.5));
        assert_eq!(props.get_bool("visible"), Some(true));
        assert_eq!(props.len(), 4);
    }

    #[test]
    fn typed_get_rejects_wrong_variant() {
        let props = Props::new().with("label", "hi");
        assert_eq!(props.get_int("label"), None);
        assert_eq!(props.get_str("missing"), None);
    }

    #[test]
    fn with_replaces_existing_key() {
        let props = Props::new().with("label", "a").with("label", "b");
        assert_eq!(props.get_str("label"), Some("b"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn merged_overrides_win() {
        let base = Props::new().with("icon", "search").with("label", "Find...");
        let overrides = Props::new().with("label", "search");

        let merged = base.merged(&overrides);
        assert_eq!(merged.get_str("icon"), Some("search"));
        assert_eq!(merged.get_str("label"), Some("search"));

        // Inputs are untouched.
        assert_eq!(base.get_str("label"), Some("Find..."));
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn merged_with_empty_is_identity() {
        let base = Props::new().with("icon", "search");
        assert_eq!(base.merged(&Props::new()), base);
        assert_eq!(Props::new().merged(&base), base);
    }
}
