// Copyright 2024 Saptak Santra
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Dense per-type component storage
//!
//! A [`ComponentContainer<T>`] keeps every `T` in one packed `Vec`, an aligned
//! `Vec` of owning entities, and a hash index from entity to slot. Removal is
//! swap-and-pop, so storage stays gap-free but iteration order changes.
//!
//! ```text
//!   dense:    [ A' | B' | C' ]
//!   entities: [ a  | b  | c  ]
//!   index:    { a: 0, b: 1, c: 2 }
//!
//!   remove(a):
//!   dense:    [ C' | B' ]
//!   entities: [ c  | b  ]
//!   index:    { c: 0, b: 1 }
//! ```

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};

use rustc_hash::FxHashMap;

#[cfg(feature = "profiling")]
use tracing::info_span;

use crate::component::{component_id, component_name, Component};
use crate::entity::Entity;
use crate::error::{EcsError, Result};

/// Storage for all components of type `T`
pub struct ComponentContainer<T: Component> {
    dense: Vec<T>,
    entities: Vec<Entity>,
    index: FxHashMap<Entity, usize>,
}

/// One entry taken out of the container while it is being reordered
struct Slot<T> {
    entity: Entity,
    value: T,
    /// Position after the reorder
    rank: usize,
    reachable: bool,
}

impl<T: Component> ComponentContainer<T> {
    /// Create an empty container
    pub fn new() -> Self {
        Self {
            dense: Vec::new(),
            entities: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Create an empty container with room for `capacity` components
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            dense: Vec::with_capacity(capacity),
            entities: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert `value` for `entity` and return a reference to the stored value.
    ///
    /// # Panics
    /// Panics if `entity` already has a component in this container.
    pub fn insert(&mut self, entity: Entity, value: T) -> &mut T {
        self.try_insert(entity, value)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Insert `value` for `entity`, failing if it already has one
    pub fn try_insert(&mut self, entity: Entity, value: T) -> Result<&mut T> {
        if self.has(entity) {
            return Err(EcsError::DuplicateComponent {
                entity,
                type_name: component_name::<T>(),
            });
        }
        Ok(self.push(entity, value))
    }

    /// Insert without the duplicate check.
    ///
    /// If `entity` already has a component, the old entry stays in storage
    /// but is no longer reachable through `get`/`has`. It still shows up when
    /// iterating and counts towards [`len`](Self::len).
    pub fn insert_with_duplicates(&mut self, entity: Entity, value: T) -> &mut T {
        self.push(entity, value)
    }

    /// Insert with the duplicate check switched on or off by the caller
    pub fn insert_checked(&mut self, entity: Entity, value: T, check_for_duplicates: bool) -> &mut T {
        if check_for_duplicates {
            self.insert(entity, value)
        } else {
            self.insert_with_duplicates(entity, value)
        }
    }

    /// Build the component from `args` and insert it.
    ///
    /// # Panics
    /// Panics if `entity` already has a component in this container.
    pub fn emplace<A>(&mut self, entity: Entity, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.insert(entity, T::from(args))
    }

    /// Build the component from `args` and insert it without the duplicate check
    pub fn emplace_with_duplicates<A>(&mut self, entity: Entity, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.insert_with_duplicates(entity, T::from(args))
    }

    fn push(&mut self, entity: Entity, value: T) -> &mut T {
        let slot = self.dense.len();
        self.index.insert(entity, slot);
        self.entities.push(entity);
        self.dense.push(value);
        &mut self.dense[slot]
    }

    /// Component of `entity`.
    ///
    /// # Panics
    /// Panics if `entity` has no component here. Check [`has`](Self::has) first.
    pub fn get(&self, entity: Entity) -> &T {
        self.try_get(entity).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable component of `entity`.
    ///
    /// # Panics
    /// Panics if `entity` has no component here.
    pub fn get_mut(&mut self, entity: Entity) -> &mut T {
        self.try_get_mut(entity)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Component of `entity`, or [`EcsError::MissingComponent`]
    pub fn try_get(&self, entity: Entity) -> Result<&T> {
        self.get_opt(entity).ok_or_else(|| Self::missing(entity))
    }

    /// Mutable component of `entity`, or [`EcsError::MissingComponent`]
    pub fn try_get_mut(&mut self, entity: Entity) -> Result<&mut T> {
        self.get_opt_mut(entity).ok_or_else(|| Self::missing(entity))
    }

    /// Component of `entity`, if any
    pub fn get_opt(&self, entity: Entity) -> Option<&T> {
        let slot = *self.index.get(&entity)?;
        self.dense.get(slot)
    }

    /// Mutable component of `entity`, if any
    pub fn get_opt_mut(&mut self, entity: Entity) -> Option<&mut T> {
        let slot = *self.index.get(&entity)?;
        self.dense.get_mut(slot)
    }

    fn missing(entity: Entity) -> EcsError {
        EcsError::MissingComponent {
            entity,
            type_name: component_name::<T>(),
        }
    }

    /// Check if `entity` has a component here
    pub fn has(&self, entity: Entity) -> bool {
        self.index.contains_key(&entity)
    }

    /// Slot currently holding the component of `entity`
    pub fn index_of(&self, entity: Entity) -> Option<usize> {
        self.index.get(&entity).copied()
    }

    /// Remove the component of `entity`, returning it.
    ///
    /// Does nothing if there is none. The last entry is moved into the freed
    /// slot, so the order of the remaining entries changes.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let slot = *self.index.get(&entity)?;
        let moved = self.entities[self.entities.len() - 1];

        // Order matters when `moved == entity`: the erase must win.
        self.index.insert(moved, slot);
        self.index.remove(&entity);

        self.entities.swap_remove(slot);
        Some(self.dense.swap_remove(slot))
    }

    /// Remove every component
    pub fn clear(&mut self) {
        self.index.clear();
        self.dense.clear();
        self.entities.clear();
    }

    /// Number of stored components
    pub fn size(&self) -> usize {
        self.dense.len()
    }

    /// Same as [`size`](Self::size), shadow entries included
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Entries left unreachable by [`insert_with_duplicates`](Self::insert_with_duplicates)
    pub fn shadowed_len(&self) -> usize {
        self.dense.len() - self.index.len()
    }

    /// Owning entities, aligned with [`components`](Self::components)
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Components in storage order
    pub fn components(&self) -> &[T] {
        &self.dense
    }

    /// Mutable components in storage order
    pub fn components_mut(&mut self) -> &mut [T] {
        &mut self.dense
    }

    /// Iterate `(entity, component)` pairs in storage order
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> + '_ {
        self.entities.iter().copied().zip(self.dense.iter())
    }

    /// Iterate `(entity, &mut component)` pairs in storage order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> + '_ {
        self.entities.iter().copied().zip(self.dense.iter_mut())
    }

    /// Reorder storage by comparing owning entities.
    ///
    /// The sort is stable. If `compare` panics, storage is left as it was.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(Entity, Entity) -> Ordering,
    {
        self.reorder(|(a, _), (b, _)| compare(a, b));
    }

    /// Reorder storage by a key derived from the owning entity
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(Entity) -> K,
    {
        self.reorder(|(a, _), (b, _)| key(a).cmp(&key(b)));
    }

    /// Reorder storage by comparing the components themselves
    pub fn sort_by_components<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.reorder(|(_, a), (_, b)| compare(a, b));
    }

    // The new order is computed on slot numbers while storage is untouched.
    // Only then are all three vectors rebuilt from a snapshot, so no lookup
    // ever goes through a half-rebuilt index.
    fn reorder<F>(&mut self, mut compare: F)
    where
        F: FnMut((Entity, &T), (Entity, &T)) -> Ordering,
    {
        #[cfg(feature = "profiling")]
        let _span = info_span!(
            "container.sort",
            component = component_name::<T>(),
            len = self.dense.len()
        )
        .entered();

        let len = self.dense.len();
        let mut order: Vec<usize> = (0..len).collect();
        {
            let entities = &self.entities;
            let dense = &self.dense;
            order.sort_by(|&a, &b| compare((entities[a], &dense[a]), (entities[b], &dense[b])));
        }

        // No caller code runs past this point.
        let mut rank = vec![0; len];
        for (new_slot, &old_slot) in order.iter().enumerate() {
            rank[old_slot] = new_slot;
        }

        let old_index = std::mem::take(&mut self.index);
        let mut snapshot: Vec<Slot<T>> = self
            .entities
            .drain(..)
            .zip(self.dense.drain(..))
            .enumerate()
            .map(|(slot, (entity, value))| Slot {
                entity,
                value,
                rank: rank[slot],
                reachable: old_index.get(&entity) == Some(&slot),
            })
            .collect();
        snapshot.sort_unstable_by_key(|entry| entry.rank);

        self.index.reserve(old_index.len());
        for (slot, entry) in snapshot.into_iter().enumerate() {
            if entry.reachable {
                self.index.insert(entry.entity, slot);
            }
            self.entities.push(entry.entity);
            self.dense.push(entry.value);
        }
    }
}

impl<T: Component> Default for ComponentContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Component + fmt::Debug> fmt::Debug for ComponentContainer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentContainer")
            .field("entities", &self.entities)
            .field("dense", &self.dense)
            .finish()
    }
}

impl<T: Component> Index<Entity> for ComponentContainer<T> {
    type Output = T;

    fn index(&self, entity: Entity) -> &Self::Output {
        self.get(entity)
    }
}

impl<T: Component> IndexMut<Entity> for ComponentContainer<T> {
    fn index_mut(&mut self, entity: Entity) -> &mut Self::Output {
        self.get_mut(entity)
    }
}

impl<'a, T: Component> IntoIterator for &'a ComponentContainer<T> {
    type Item = (Entity, &'a T);
    type IntoIter =
        std::iter::Zip<std::iter::Copied<std::slice::Iter<'a, Entity>>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter().copied().zip(self.dense.iter())
    }
}

/// Type-erased view of a [`ComponentContainer`]
///
/// This is what the registry stores, so bulk operations can run without
/// knowing the component types.
pub trait ErasedContainer: Any {
    /// Name of the stored component type
    fn type_name(&self) -> &'static str;

    /// `TypeId` of the stored component type
    fn component_type_id(&self) -> TypeId;

    fn clear(&mut self);

    fn size(&self) -> usize;

    fn has(&self, entity: Entity) -> bool;

    /// Remove the component of `entity`, dropping it
    fn remove(&mut self, entity: Entity);

    fn entities(&self) -> &[Entity];

    fn index_of(&self, entity: Entity) -> Option<usize>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ErasedContainer for ComponentContainer<T> {
    fn type_name(&self) -> &'static str {
        component_name::<T>()
    }

    fn component_type_id(&self) -> TypeId {
        component_id::<T>()
    }

    fn clear(&mut self) {
        ComponentContainer::clear(self);
    }

    fn size(&self) -> usize {
        ComponentContainer::size(self)
    }

    fn has(&self, entity: Entity) -> bool {
        ComponentContainer::has(self, entity)
    }

    fn remove(&mut self, entity: Entity) {
        let _ = ComponentContainer::remove(self, entity);
    }

    fn entities(&self) -> &[Entity] {
        ComponentContainer::entities(self)
    }

    fn index_of(&self, entity: Entity) -> Option<usize> {
        ComponentContainer::index_of(self, entity)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
