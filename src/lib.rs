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

//! Tiny ECS - dense per-type component storage
//!
//! Entities are plain ids. Each component type lives in its own
//! [`ComponentContainer`], a packed array plus an entity-to-slot index, and a
//! [`ContainerRegistry`] owned by the application reaches any container by
//! type and runs bulk operations across all of them.
//!
//! ```
//! use tiny_ecs::prelude::*;
//!
//! struct Name(&'static str);
//! struct Swims;
//!
//! let mut registry = ContainerRegistry::new();
//! let fish = Entity::new();
//! registry.container::<Name>().insert(fish, Name("Fish"));
//! registry.container::<Swims>().insert(fish, Swims);
//!
//! assert!(registry.container::<Swims>().has(fish));
//! registry.remove_all_of(fish);
//! assert!(!registry.container::<Name>().has(fish));
//! ```

pub mod component;
pub mod container;
pub mod debug;
pub mod entity;
pub mod error;
pub mod prelude;
pub mod registry;


pub use component::*;
pub use container::*;
pub use debug::*;
pub use entity::*;
pub use error::*;
pub use registry::*;
