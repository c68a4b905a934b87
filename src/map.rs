//! String-keyed property store for hierarchical configuration
//!
//! [`PropertyMap`] is the central container: a flat mapping from dotted
//! string keys to string values, as found in board and platform definition
//! files. Hierarchy is not stored; it is derived on demand by peeling the
//! first dotted segment off every key.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Derived hierarchical view: first path segment mapped to the sub-map of
/// key remainders
pub type FirstLevelMap = IndexMap<String, PropertyMap>;

/// A container of string properties
///
/// Keys are plain text; `.` separates hierarchy segments. Values may be
/// empty and may contain `{key}` placeholders for later expansion.
/// Iteration follows insertion order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap {
    inner: IndexMap<String, String>,
}

impl PropertyMap {
    /// Creates an empty property map
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Stores `value` under `key`, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), value.into());
    }

    /// Returns true if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Number of stored properties
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the map holds no properties
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over the keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Iterates over the values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.inner.values().map(String::as_str)
    }

    /// Iterates over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.inner.iter()
    }

    /// Overlays one or more source maps onto this one, in order
    ///
    /// Later sources win on key collision. Mutates in place and returns
    /// `self` so calls can be chained.
    pub fn merge<'m>(
        &mut self,
        sources: impl IntoIterator<Item = &'m PropertyMap>,
    ) -> &mut Self {
        for source in sources {
            for (key, value) in &source.inner {
                self.inner.insert(key.clone(), value.clone());
            }
        }
        self
    }

    /// Full key/value equality check
    ///
    /// Sizes must match and every key must be present in both maps with an
    /// identical value. Insertion order is irrelevant.
    pub fn equals(&self, other: &PropertyMap) -> bool {
        if self.inner.len() != other.inner.len() {
            return false;
        }
        self.inner
            .iter()
            .all(|(key, value)| other.get(key) == Some(value.as_str()))
    }

    /// Reads `key` as a boolean: true iff the stored text is exactly `"true"`
    ///
    /// Anything else, including an absent key, reads as false.
    pub fn get_boolean(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    /// Stores `key` as the literal text `"true"` or `"false"`
    pub fn set_boolean(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, if value { "true" } else { "false" });
    }

    /// Derives the hierarchical view of this map
    ///
    /// Every key containing at least one `.` appears in exactly one sub-map,
    /// under its first segment, with the remainder as the new key. Keys
    /// without a `.` are excluded from the view.
    pub fn first_level_of(&self) -> FirstLevelMap {
        let mut levels = FirstLevelMap::new();
        for (key, value) in &self.inner {
            if let Some((prefix, rest)) = key.split_once('.') {
                levels
                    .entry(prefix.to_string())
                    .or_default()
                    .set(rest, value.clone());
            }
        }
        levels
    }

    /// Extracts the sub-map under one dotted prefix segment
    ///
    /// Returns an empty map if no key starts with `key.`. Each call peels
    /// exactly one segment; chain calls to descend further.
    ///
    /// ```
    /// use props_map::PropertyMap;
    ///
    /// let mut props = PropertyMap::new();
    /// props.set("ethernet.name", "Arduino Ethernet");
    /// props.set("ethernet.upload.maximum_size", "32256");
    ///
    /// let ethernet = props.sub_tree("ethernet");
    /// assert_eq!(ethernet.get("name"), Some("Arduino Ethernet"));
    /// assert_eq!(ethernet.sub_tree("upload").get("maximum_size"), Some("32256"));
    /// ```
    pub fn sub_tree(&self, key: &str) -> PropertyMap {
        self.first_level_of().shift_remove(key).unwrap_or_default()
    }
}

impl PartialEq for PropertyMap {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for PropertyMap {}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

/// Overlays one or more hierarchical views onto `target`
///
/// Later sources win on first-segment collision; colliding sub-maps are
/// replaced whole, not merged recursively.
pub fn merge_first_level_maps<'a, 'm>(
    target: &'a mut FirstLevelMap,
    sources: impl IntoIterator<Item = &'m FirstLevelMap>,
) -> &'a mut FirstLevelMap {
    for source in sources {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}
