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

//! Error types
//!
//! Both variants are contract violations, not transient conditions. The
//! panicking accessors on [`ComponentContainer`](crate::ComponentContainer)
//! panic with these messages; the `try_*` accessors hand them back instead.
//! Callers are expected to check `has` first.

use std::fmt;

use crate::entity::Entity;

/// ECS error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// Lookup of an entity that has no component in the container
    MissingComponent {
        entity: Entity,
        type_name: &'static str,
    },

    /// Duplicate-checked insert for an entity that already has a component
    DuplicateComponent {
        entity: Entity,
        type_name: &'static str,
    },
}

impl EcsError {
    /// Entity the failed operation was called with
    pub fn entity(&self) -> Entity {
        match self {
            EcsError::MissingComponent { entity, .. } => *entity,
            EcsError::DuplicateComponent { entity, .. } => *entity,
        }
    }
}

impl fmt::Display for EcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcsError::MissingComponent { entity, type_name } => {
                write!(f, "Entity {entity} has no component of type {type_name}")
            }
            EcsError::DuplicateComponent { entity, type_name } => {
                write!(f, "Entity {entity} already has a component of type {type_name}")
            }
        }
    }
}

impl std::error::Error for EcsError {}

/// Result type alias
pub type Result<T> = std::result::Result<T, EcsError>;
