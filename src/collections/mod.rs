//! Entity collections
//!
//! `EntityCollection` stores any `EntityModel` under a typed handle, keeps a
//! name index for constant-time lookup, and iterates in insertion order.
//! Names are unique within a collection.

use crate::error::{Result, SchoolError};
use crate::models::EntityModel;
use rustc_hash::FxHashMap;

/// Uniquely-named, insertion-ordered storage for one kind of entity
#[derive(Debug)]
pub struct EntityCollection<T: EntityModel> {
    /// Entities in insertion order; a handle is its entity's position
    items: Vec<T>,
    /// Handles indexed by name
    names: FxHashMap<String, T::Id>,
}

impl<T: EntityModel> Default for EntityCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EntityModel> EntityCollection<T> {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            names: FxHashMap::default(),
        }
    }

    /// Add an entity built from its freshly assigned handle.
    ///
    /// Fails with `DuplicateName` without touching the collection if the
    /// name is already taken.
    pub fn insert_with<F>(&mut self, name: &str, build: F) -> Result<T::Id>
    where
        F: FnOnce(T::Id) -> T,
    {
        if self.contains(name) {
            return Err(SchoolError::DuplicateName {
                kind: T::KIND,
                name: name.to_string(),
            });
        }

        let id = T::Id::from(self.items.len());
        let entity = build(id);
        debug_assert_eq!(entity.id(), id);
        debug_assert_eq!(entity.name(), name);

        self.names.insert(name.to_string(), id);
        self.items.push(entity);
        Ok(id)
    }

    /// Get an entity by handle
    #[must_use]
    pub fn get(&self, id: T::Id) -> Option<&T> {
        let index: usize = id.into();
        self.items.get(index)
    }

    /// Get a mutable entity by handle
    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        let index: usize = id.into();
        self.items.get_mut(index)
    }

    /// Resolve a name to a handle
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<T::Id> {
        self.names.get(name).copied()
    }

    /// Get an entity by name
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&T> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Get a mutable entity by name
    pub fn by_name_mut(&mut self, name: &str) -> Option<&mut T> {
        let id = self.id_of(name)?;
        self.get_mut(id)
    }

    /// Get an entity by name, or a `NotFound` error naming the kind
    pub fn require(&self, name: &str) -> Result<&T> {
        self.by_name(name)
            .ok_or_else(|| SchoolError::not_found(T::KIND, name))
    }

    /// Get a mutable entity by name, or a `NotFound` error naming the kind
    pub fn require_mut(&mut self, name: &str) -> Result<&mut T> {
        self.by_name_mut(name)
            .ok_or_else(|| SchoolError::not_found(T::KIND, name))
    }

    /// Check if an entity carries the given name
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Iterate over all entities in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Entities matching a predicate, in insertion order
    pub fn filter<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).collect()
    }

    /// Number of entities in the collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: EntityModel> IntoIterator for &'a EntityCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
