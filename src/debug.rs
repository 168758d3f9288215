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

//! Registry inspection for debugging

use std::any::TypeId;
use std::fmt;

use smallvec::SmallVec;

use crate::entity::Entity;
use crate::registry::{ContainerRegistry, LIST_OF_INLINE};

/// Container information for debugging
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
    pub size: usize,
    pub entities: Vec<Entity>,
}

/// Where one component of an entity is stored
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityComponentInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
    /// Slot of the component in its container
    pub index: usize,
}

impl fmt::Display for ContainerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} components of type {}", self.size, self.type_name)?;
        if !self.entities.is_empty() {
            let ids: Vec<String> = self.entities.iter().map(|e| e.to_string()).collect();
            write!(f, "\n    {}", ids.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for EntityComponentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type {}, stored at location {}",
            self.type_name, self.index
        )
    }
}

/// Snapshot of every non-empty container
#[derive(Clone, Debug)]
pub struct RegistryReport {
    pub containers: Vec<ContainerInfo>,
}

impl fmt::Display for RegistryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Debug info on all registry entries:")?;
        for info in &self.containers {
            writeln!(f, "  {info}")?;
        }
        Ok(())
    }
}

/// Snapshot of where one entity's components live
#[derive(Clone, Debug)]
pub struct EntityReport {
    pub entity: Entity,
    pub components: SmallVec<[EntityComponentInfo; LIST_OF_INLINE]>,
}

impl fmt::Display for EntityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Debug info on components of entity {}:", self.entity)?;
        for info in &self.components {
            writeln!(f, "  {info}")?;
        }
        Ok(())
    }
}

/// Registry inspector for debugging
pub struct RegistryInspector;

impl RegistryInspector {
    /// Report on all non-empty containers
    pub fn report_all(registry: &ContainerRegistry) -> RegistryReport {
        RegistryReport {
            containers: registry
                .list_all()
                .into_iter()
                .filter(|info| info.size > 0)
                .collect(),
        }
    }

    /// Report on the containers holding `entity`
    pub fn report_of(registry: &ContainerRegistry, entity: Entity) -> EntityReport {
        EntityReport {
            entity,
            components: registry.list_of(entity),
        }
    }

    /// Print all non-empty containers to console
    pub fn print_all(registry: &ContainerRegistry) {
        print!("{}", Self::report_all(registry));
    }

    /// Print the components of `entity` to console
    pub fn print_of(registry: &ContainerRegistry, entity: Entity) {
        print!("{}", Self::report_of(registry, entity));
    }
}

#[cfg(test)]
mod tests {
    #![allow(dead_code)]
    use super::*;

    struct Name(&'static str);
    struct Swims;

    #[test]
    fn test_report_all_skips_empty_containers() {
        let mut registry = ContainerRegistry::new();
        let fish = Entity::new();
        registry.container::<Name>().insert(fish, Name("Fish"));
        registry.register::<Swims>();

        let report = RegistryInspector::report_all(&registry);
        assert_eq!(report.containers.len(), 1);

        let text = report.to_string();
        assert!(text.starts_with("Debug info on all registry entries:"));
        assert!(text.contains("1 components of type"));
        assert!(text.contains(&fish.to_string()));
        assert!(!text.contains("Swims"));
    }

    #[test]
    fn test_report_of_lists_locations() {
        let mut registry = ContainerRegistry::new();
        let fish = Entity::new();
        let turtle = Entity::new();
        registry.container::<Name>().insert(fish, Name("Fish"));
        registry.container::<Name>().insert(turtle, Name("Turtle"));
        registry.container::<Swims>().insert(turtle, Swims);

        let report = RegistryInspector::report_of(&registry, turtle);
        assert_eq!(report.components.len(), 2);

        let text = report.to_string();
        assert!(text.contains(&format!("components of entity {turtle}")));
        assert!(text.contains("stored at location 1"));
        assert!(text.contains("stored at location 0"));
    }

    #[test]
    fn test_container_info_display_without_entities() {
        let info = ContainerInfo {
            type_name: "Walks",
            type_id: TypeId::of::<u8>(),
            size: 0,
            entities: Vec::new(),
        };
        assert_eq!(info.to_string(), "0 components of type Walks");
    }
}
