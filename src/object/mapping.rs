//! Structural key/value capabilities the merge helpers are written against.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A string-keyed container the merge helpers can read from and write into.
pub trait Mapping {
    /// Value stored under each key.
    type Value;

    /// Iterate every `(key, value)` pair in the container's own order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Self::Value)> + '_>;

    /// Mutable access to the value stored under `key`, if any.
    fn entry_mut(&mut self, key: &str) -> Option<&mut Self::Value>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: Self::Value);

    /// Number of stored keys.
    fn entry_count(&self) -> usize;
}

/// A value that may itself be a nested mapping, which lets [`deep_merge`](crate::deep_merge)
/// recurse into it.
pub trait Node: Clone {
    /// The mapping type nested values use.
    type Map: Mapping<Value = Self>;

    /// View this value as a nested mapping, if it is one.
    fn as_map(&self) -> Option<&Self::Map>;

    /// Mutable view of this value as a nested mapping, if it is one.
    fn as_map_mut(&mut self) -> Option<&mut Self::Map>;
}

impl<V> Mapping for BTreeMap<String, V> {
    type Value = V;

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &V)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v)))
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn put(&mut self, key: &str, value: V) {
        self.insert(key.to_owned(), value);
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<V, S: BuildHasher> Mapping for HashMap<String, V, S> {
    type Value = V;

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &V)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v)))
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn put(&mut self, key: &str, value: V) {
        self.insert(key.to_owned(), value);
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl Mapping for serde_json::Map<String, serde_json::Value> {
    type Value = serde_json::Value;

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &serde_json::Value)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v)))
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut serde_json::Value> {
        self.get_mut(key)
    }

    fn put(&mut self, key: &str, value: serde_json::Value) {
        self.insert(key.to_owned(), value);
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl Node for serde_json::Value {
    type Map = serde_json::Map<String, serde_json::Value>;

    fn as_map(&self) -> Option<&Self::Map> {
        self.as_object()
    }

    fn as_map_mut(&mut self) -> Option<&mut Self::Map> {
        self.as_object_mut()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/object/mapping.rs"]
mod tests;
