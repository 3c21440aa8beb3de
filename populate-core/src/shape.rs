//! Structural classification of target containers.
//!
//! Every target type belongs to exactly one shape, named by its
//! [`Container::Shape`] associated type. A type cannot name two shapes, so
//! no container is ever eligible for two population strategies. The shape
//! then determines which capability trait the type implements and which
//! engine operation fills it. New container types join a shape by
//! implementing [`Container`] and the matching capability trait; nothing
//! here needs to change.

use std::collections::hash_map::{self, HashMap};
use std::collections::{btree_map, BTreeMap, BTreeSet, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// The shape of a container, as a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Growable, ordered by draw order, no uniqueness.
    Sequential,
    /// Fixed capacity known from the type.
    StaticArray,
    /// Unique keys, no mapped values.
    SetLike,
    /// Unique keys, each with a mapped value.
    MapLike,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Sequential => "sequential",
            ShapeKind::StaticArray => "static array",
            ShapeKind::SetLike => "set-like",
            ShapeKind::MapLike => "map-like",
        };
        f.write_str(name)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Type-level shape marker.
pub trait Shape: sealed::Sealed {
    const KIND: ShapeKind;
}

/// Marker for [`ShapeKind::Sequential`].
#[derive(Debug)]
pub enum Sequential {}

/// Marker for [`ShapeKind::StaticArray`].
#[derive(Debug)]
pub enum StaticArray {}

/// Marker for [`ShapeKind::SetLike`].
#[derive(Debug)]
pub enum SetLike {}

/// Marker for [`ShapeKind::MapLike`].
#[derive(Debug)]
pub enum MapLike {}

macro_rules! shape_marker {
    ($($marker:ident),*) => {
        $(
            impl sealed::Sealed for $marker {}

            impl Shape for $marker {
                const KIND: ShapeKind = ShapeKind::$marker;
            }
        )*
    };
}

shape_marker!(Sequential, StaticArray, SetLike, MapLike);

/// A type the engine can populate.
pub trait Container {
    /// The one shape this type belongs to.
    type Shape: Shape;
}

/// Classify a container type.
pub fn shape_of<C: Container>() -> ShapeKind {
    <C::Shape as Shape>::KIND
}

/// Growable containers filled by appending in draw order.
pub trait SequentialContainer: Container<Shape = Sequential> {
    type Item;

    /// An empty container with room for `capacity` items where supported.
    fn with_capacity(capacity: usize) -> Self;

    /// Add an item after all existing ones.
    fn append_item(&mut self, item: Self::Item);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Containers whose length is fixed by the type.
pub trait FixedContainer: Container<Shape = StaticArray> {
    type Item;

    /// Number of slots.
    const CAPACITY: usize;

    /// Build the container by calling `f` once per slot, in slot order.
    fn fill_with<F: FnMut() -> Self::Item>(f: F) -> Self;
}

/// Containers of unique keys.
pub trait SetContainer: Container<Shape = SetLike> {
    type Key;

    fn with_capacity(capacity: usize) -> Self;

    /// Insert `key` unless an equal key is present. Returns whether it was inserted.
    fn insert_key(&mut self, key: Self::Key) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Containers mapping unique keys to values.
pub trait MapContainer: Container<Shape = MapLike> {
    type Key;
    type Value;

    fn with_capacity(capacity: usize) -> Self;

    /// Insert the entry unless the key is present, in which case the
    /// container is left untouched. Returns whether it was inserted.
    fn insert_entry(&mut self, key: Self::Key, value: Self::Value) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Sequential

impl<T> Container for Vec<T> {
    type Shape = Sequential;
}

impl<T> SequentialContainer for Vec<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn append_item(&mut self, item: T) {
        self.push(item);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Container for VecDeque<T> {
    type Shape = Sequential;
}

impl<T> SequentialContainer for VecDeque<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    fn append_item(&mut self, item: T) {
        self.push_back(item);
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> Container for LinkedList<T> {
    type Shape = Sequential;
}

impl<T> SequentialContainer for LinkedList<T> {
    type Item = T;

    fn with_capacity(_capacity: usize) -> Self {
        LinkedList::new()
    }

    fn append_item(&mut self, item: T) {
        self.push_back(item);
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

// Static arrays

impl<T, const N: usize> Container for [T; N] {
    type Shape = StaticArray;
}

impl<T, const N: usize> FixedContainer for [T; N] {
    type Item = T;

    const CAPACITY: usize = N;

    fn fill_with<F: FnMut() -> T>(mut f: F) -> Self {
        std::array::from_fn(|_| f())
    }
}

// Sets

impl<K: Ord> Container for BTreeSet<K> {
    type Shape = SetLike;
}

impl<K: Ord> SetContainer for BTreeSet<K> {
    type Key = K;

    fn with_capacity(_capacity: usize) -> Self {
        BTreeSet::new()
    }

    fn insert_key(&mut self, key: K) -> bool {
        self.insert(key)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

impl<K, S> Container for HashSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Shape = SetLike;
}

impl<K, S> SetContainer for HashSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Key = K;

    fn with_capacity(capacity: usize) -> Self {
        HashSet::with_capacity_and_hasher(capacity, S::default())
    }

    fn insert_key(&mut self, key: K) -> bool {
        self.insert(key)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

// Maps

impl<K: Ord, V> Container for BTreeMap<K, V> {
    type Shape = MapLike;
}

impl<K: Ord, V> MapContainer for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn with_capacity(_capacity: usize) -> Self {
        BTreeMap::new()
    }

    fn insert_entry(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<K, V, S> Container for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Shape = MapLike;
}

impl<K, V, S> MapContainer for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Key = K;
    type Value = V;

    fn with_capacity(capacity: usize) -> Self {
        HashMap::with_capacity_and_hasher(capacity, S::default())
    }

    fn insert_entry(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            hash_map::Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
            hash_map::Entry::Occupied(_) => false,
        }
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}
