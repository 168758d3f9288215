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

//! Registry: one container per component type
//!
//! The registry is an ordinary value owned by the application. Containers are
//! created and registered the first time their type is asked for and are
//! never unregistered. Bulk operations walk the containers in registration
//! order through the [`ErasedContainer`] interface.

use std::any::TypeId;

use ahash::AHashMap;
use smallvec::SmallVec;

#[cfg(feature = "profiling")]
use tracing::{debug, info_span};

use crate::component::{component_id, component_name, Component};
use crate::container::{ComponentContainer, ErasedContainer};
use crate::debug::{ContainerInfo, EntityComponentInfo};
use crate::entity::Entity;

/// Inline capacity of [`ContainerRegistry::list_of`] results
pub const LIST_OF_INLINE: usize = 8;

/// Collection of every component container in use
#[derive(Default)]
pub struct ContainerRegistry {
    /// Containers keyed by component `TypeId`
    containers: AHashMap<TypeId, Box<dyn ErasedContainer>>,

    /// Registration order, so enumeration is deterministic
    order: Vec<TypeId>,
}

impl ContainerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with room for `capacity` component types
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            containers: AHashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Register the container for `T` up front. Does nothing if it exists.
    pub fn register<T: Component>(&mut self) {
        self.container::<T>();
    }

    /// Container for `T`, created and registered on first use
    pub fn container<T: Component>(&mut self) -> &mut ComponentContainer<T> {
        let type_id = component_id::<T>();
        let order = &mut self.order;
        let erased = self.containers.entry(type_id).or_insert_with(|| {
            #[cfg(feature = "profiling")]
            debug!(
                component = component_name::<T>(),
                registered = order.len() + 1,
                "registering component container"
            );
            order.push(type_id);
            Box::new(ComponentContainer::<T>::new())
        });

        match erased.as_any_mut().downcast_mut::<ComponentContainer<T>>() {
            Some(container) => container,
            None => unreachable!(
                "container registered for {} has the wrong type",
                component_name::<T>()
            ),
        }
    }

    /// Container for `T`, if it has been registered
    pub fn get<T: Component>(&self) -> Option<&ComponentContainer<T>> {
        self.containers
            .get(&component_id::<T>())?
            .as_any()
            .downcast_ref()
    }

    pub fn get_mut<T: Component>(&mut self) -> Option<&mut ComponentContainer<T>> {
        self.containers
            .get_mut(&component_id::<T>())?
            .as_any_mut()
            .downcast_mut()
    }

    /// Check if a container for `T` has been registered
    pub fn contains<T: Component>(&self) -> bool {
        self.containers.contains_key(&component_id::<T>())
    }

    /// Number of registered containers
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registered containers in registration order
    pub fn containers(&self) -> impl Iterator<Item = &dyn ErasedContainer> + '_ {
        self.order
            .iter()
            .filter_map(|type_id| self.containers.get(type_id))
            .map(|container| container.as_ref())
    }

    /// Clear every registered container
    pub fn clear_all(&mut self) {
        #[cfg(feature = "profiling")]
        let _span = info_span!("registry.clear_all", containers = self.order.len()).entered();

        for container in self.containers.values_mut() {
            container.clear();
        }
    }

    /// Remove the components of `entity` from every registered container
    pub fn remove_all_of(&mut self, entity: Entity) {
        #[cfg(feature = "profiling")]
        let _span = info_span!("registry.remove_all_of", entity = entity.id()).entered();

        for container in self.containers.values_mut() {
            container.remove(entity);
        }
    }

    /// Type, size and entities of every registered container
    pub fn list_all(&self) -> Vec<ContainerInfo> {
        self.containers()
            .map(|container| ContainerInfo {
                type_name: container.type_name(),
                type_id: container.component_type_id(),
                size: container.size(),
                entities: container.entities().to_vec(),
            })
            .collect()
    }

    /// Containers holding a component of `entity`, with its slot in each
    pub fn list_of(&self, entity: Entity) -> SmallVec<[EntityComponentInfo; LIST_OF_INLINE]> {
        self.containers()
            .filter_map(|container| {
                let index = container.index_of(entity)?;
                Some(EntityComponentInfo {
                    type_name: container.type_name(),
                    type_id: container.component_type_id(),
                    index,
                })
            })
            .collect()
    }
}
