//! Entity-keyed maps (like CLIF's PrimaryMap and SecondaryMap).
//!
//! `PrimaryMap` is the arena that owns IR nodes and hands out their entity
//! keys. `SecondaryMap` attaches side data to entities that already exist in
//! some primary map, such as the printer's number caches.

use core::marker::PhantomData;

use crate::entity::EntityRef;

/// Dense map from entity to data
///
/// This is essentially a Vec with entity-based indexing. Pushing a value
/// allocates the next entity key.
#[derive(Debug, Clone)]
pub struct PrimaryMap<K: EntityRef, V> {
    data: Vec<V>,
    _phantom: PhantomData<K>,
}

impl<K: EntityRef, V> PrimaryMap<K, V> {
    /// Create a new empty PrimaryMap
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            _phantom: PhantomData,
        }
    }

    /// Push a value and return its entity key
    ///
    /// The key's index equals the length of the map before the push.
    pub fn push(&mut self, value: V) -> K {
        let index = self.data.len();
        self.data.push(value);
        K::from_index(index)
    }

    /// Get a value by entity key
    pub fn get(&self, key: K) -> Option<&V> {
        self.data.get(key.index())
    }

    /// Get a mutable value by entity key
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.data.get_mut(key.index())
    }

    /// Check whether `key` was allocated by this map
    pub fn is_valid(&self, key: K) -> bool {
        key.index() < self.data.len()
    }

    /// Get length
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over entries as (entity, value) pairs in allocation order
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (K::from_index(i), v))
    }

    /// Iterate over all allocated keys
    pub fn keys(&self) -> impl Iterator<Item = K> {
        (0..self.data.len()).map(K::from_index)
    }
}

impl<K: EntityRef, V> Default for PrimaryMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sparse side table from entity to data
///
/// Slots that were never written read back as `None`. The backing vector
/// grows on demand up to the largest key inserted.
#[derive(Debug, Clone)]
pub struct SecondaryMap<K: EntityRef, V> {
    data: Vec<Option<V>>,
    _phantom: PhantomData<K>,
}

impl<K: EntityRef, V> SecondaryMap<K, V> {
    /// Create a new empty SecondaryMap
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            _phantom: PhantomData,
        }
    }

    /// Create a SecondaryMap with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            _phantom: PhantomData,
        }
    }

    /// Set the value for `key`, returning the previous value if any
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = key.index();
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        self.data[index].replace(value)
    }

    /// Get the value for `key`, if one was inserted
    pub fn get(&self, key: K) -> Option<&V> {
        self.data.get(key.index()).and_then(Option::as_ref)
    }

    /// Check whether a value was inserted for `key`
    pub fn contains_key(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Number of keys that hold a value
    pub fn len(&self) -> usize {
        self.data.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if no key holds a value
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(Option::is_none)
    }
}

impl<K: EntityRef, V> Default for SecondaryMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Block, Inst};

    #[test]
    fn test_primary_map_basic() {
        let mut map: PrimaryMap<Block, i32> = PrimaryMap::new();

        let b1 = map.push(10);
        let b2 = map.push(20);

        assert_eq!(b1, Block::new(0));
        assert_eq!(b2, Block::new(1));
        assert_eq!(map.get(b2), Some(&20));
        assert_eq!(map.len(), 2);
        assert!(map.is_valid(b1));
        assert!(!map.is_valid(Block::new(2)));
    }

    #[test]
    fn test_primary_map_iteration_order() {
        let mut map: PrimaryMap<Inst, &str> = PrimaryMap::new();
        map.push("a");
        map.push("b");

        let items: Vec<_> = map.iter().collect();
        assert_eq!(items, vec![(Inst::new(0), &"a"), (Inst::new(1), &"b")]);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec![Inst::new(0), Inst::new(1)]);
    }

    #[test]
    fn test_primary_map_get_mut() {
        let mut map: PrimaryMap<Block, i32> = PrimaryMap::new();
        let b1 = map.push(10);

        if let Some(value) = map.get_mut(b1) {
            *value = 42;
        }

        assert_eq!(map.get(b1), Some(&42));
    }

    #[test]
    fn test_secondary_map_sparse() {
        let mut map: SecondaryMap<Inst, u32> = SecondaryMap::new();
        assert!(map.is_empty());

        assert_eq!(map.insert(Inst::new(4), 1), None);
        assert_eq!(map.insert(Inst::new(4), 2), Some(1));

        assert_eq!(map.get(Inst::new(4)), Some(&2));
        assert_eq!(map.get(Inst::new(0)), None);
        assert_eq!(map.get(Inst::new(99)), None);
        assert!(map.contains_key(Inst::new(4)));
        assert_eq!(map.len(), 1);
    }
}
