use std::collections::BTreeMap;
use std::fmt::Display;

/// A set of values deduplicated by their `Display` rendering.
///
/// Values that print the same are considered equal; the last one inserted is
/// kept. Keys iterate in sorted string order.
#[derive(Debug, Clone)]
pub struct KeySet<T> {
    backing: BTreeMap<String, T>,
}

impl<T: Display> KeySet<T> {
    pub fn new() -> Self {
        KeySet {
            backing: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, value: T) {
        self.backing.insert(value.to_string(), value);
    }

    pub fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }

    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.backing.remove(&value.to_string())
    }

    pub fn contains(&self, value: &T) -> bool {
        self.backing.contains_key(&value.to_string())
    }

    pub fn len(&self) -> usize {
        self.backing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    pub fn clear(&mut self) {
        self.backing.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.backing.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.backing.values()
    }
}

impl<T: Display> Default for KeySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> FromIterator<T> for KeySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = KeySet::new();
        set.extend(iter);
        set
    }
}
