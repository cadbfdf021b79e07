//! Ordered, duplicate-free detail collection.
//!
//! Every rule node reports its failure explanations through a [`Details`]
//! collection. It keeps insertion order like a vector but refuses values it
//! already holds, so merging the details of many sub-rules never produces
//! repeated messages.
//!
//! Storage is persistent (`im`), which makes cloning O(1). Combinators that
//! pass a child's details through unchanged rely on that.

use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Insertion-ordered sequence with set membership semantics.
///
/// Adding a value that is already present is a no-op: no duplicate, no
/// reordering, no error.
#[derive(Clone)]
pub struct Details<T = String>
where
    T: Clone + Eq + Hash,
{
    items: im::Vector<T>,
    seen: im::HashSet<T>,
}

impl<T: Clone + Eq + Hash> Details<T> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: im::Vector::new(),
            seen: im::HashSet::new(),
        }
    }

    /// Returns the number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if the value has been added.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.seen.contains(value)
    }

    /// Gets a value by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Appends a value unless it is already present.
    ///
    /// Returns true if the value was added.
    pub fn add(&mut self, value: T) -> bool {
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push_back(value);
        true
    }

    /// Appends every value not already present, keeping their relative order.
    ///
    /// Repeats inside `values` are filtered as well. Returns true if anything
    /// was added.
    pub fn add_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut changed = false;
        for value in values {
            changed |= self.add(value);
        }
        changed
    }

    /// Inserts a value at `index` unless it is already present.
    ///
    /// An index past the end appends. Returns true if the value was added.
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        let index = index.min(self.items.len());
        self.items.insert(index, value);
        true
    }

    /// Appends every value of `other` not already present.
    ///
    /// Returns true if anything was added.
    pub fn merge(&mut self, other: &Self) -> bool {
        if self.is_empty() {
            // Nothing to filter against; share the other's structure.
            let changed = !other.is_empty();
            self.clone_from(other);
            return changed;
        }
        self.add_all(other.iter().cloned())
    }

    /// Returns an iterator over the values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Returns the first value added.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the most recently appended value.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    /// Copies the values into a plain vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: Clone + Eq + Hash> Default for Details<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> fmt::Debug for Details<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Joins the values with `"; "`.
impl<T: Clone + Eq + Hash + fmt::Display> fmt::Display for Details<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<T: Clone + Eq + Hash> PartialEq for Details<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Clone + Eq + Hash> Eq for Details<T> {}

impl<T: Clone + Eq + Hash> FromIterator<T> for Details<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut details = Self::new();
        details.add_all(iter);
        details
    }
}

impl<T: Clone + Eq + Hash> Extend<T> for Details<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T: Clone + Eq + Hash> IntoIterator for Details<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Clone + Eq + Hash> IntoIterator for &'a Details<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: Clone + Eq + Hash + Serialize> Serialize for Details<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Deserialization goes through [`Details::add`], so duplicated input
/// collapses instead of being rejected.
#[cfg(feature = "serde")]
impl<'de, T: Clone + Eq + Hash + Deserialize<'de>> Deserialize<'de> for Details<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
