//! Free-form string tags attached to array containers and their components.
//!
//! Tags are ordered key-value pairs of text. A few keys have a meaning
//! shared between format adapters and their consumers,
//! declared as constants in this module.

use std::iter::FromIterator;

/// Tag key describing the color semantics of one component.
pub const CHANNEL: &str = "channel";

/// [`CHANNEL`] tag value for a grayscale intensity component.
pub const CHANNEL_LUMINANCE: &str = "luminance";

/// [`CHANNEL`] tag value for a red color component.
pub const CHANNEL_RED: &str = "red";

/// [`CHANNEL`] tag value for a green color component.
pub const CHANNEL_GREEN: &str = "green";

/// [`CHANNEL`] tag value for a blue color component.
pub const CHANNEL_BLUE: &str = "blue";

/// An ordered collection of string key-value tags.
///
/// Keys are unique. Inserting a key which is already present
/// replaces its value in place, keeping the original position,
/// so that iteration order is the order of first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagList {
    entries: Vec<(String, String)>,
}

impl TagList {
    /// Create a new, empty tag list.
    pub fn new() -> Self {
        TagList::default()
    }

    /// The number of tags in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list contains no tags.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fetch the value of the tag with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Insert a tag, replacing the value in place
    /// if the key is already present.
    ///
    /// Returns the previous value of the key, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => Some(std::mem::replace(&mut entry.1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove the tag with the given key,
    /// returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterate over all tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for TagList
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tags = TagList::new();
        for (k, v) in iter {
            tags.insert(k, v);
        }
        tags
    }
}
