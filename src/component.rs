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

//! Component marker trait
//!
//! Components are plain data attached to entities. Any `'static` type
//! qualifies; there is nothing to derive.

use std::any::TypeId;

/// Marker trait for components
///
/// Components must be 'static (no borrowed data) so their containers can be
/// stored type-erased in the registry.
pub trait Component: 'static {}

/// Automatically implement Component for all valid types
impl<T: 'static> Component for T {}

/// Type name used in diagnostics and error messages
pub fn component_name<T: Component>() -> &'static str {
    std::any::type_name::<T>()
}

/// Key a component type is registered under
pub fn component_id<T: Component>() -> TypeId {
    TypeId::of::<T>()
}

#[cfg(test)]
mod tests {
    #![allow(dead_code)]
    use super::*;

    #[test]
    fn test_component_ids_are_distinct_per_type() {
        struct Swims;
        struct Walks;

        assert_ne!(component_id::<Swims>(), component_id::<Walks>());
        assert_eq!(component_id::<Swims>(), TypeId::of::<Swims>());
    }

    #[test]
    fn test_component_name_mentions_type() {
        #[derive(Debug)]
        struct Position {
            x: f32,
        }

        assert!(component_name::<Position>().ends_with("Position"));
    }
}
