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

//! Entity identifiers.
//!
//! An entity is only a number used as a key across component containers.
//! Identifiers come from one process-wide counter, start at 1 and are never
//! reused. Value 0 is reserved for [`Entity::NULL`].
//!
//! There is no recycling: once `u32::MAX - 1` identifiers have been issued,
//! [`Entity::new`] panics instead of wrapping back to the reserved value.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Unique entity identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity(u32);

impl Entity {
    /// Reserved default value, never handed out by [`Entity::new`]
    pub const NULL: Entity = Entity(0);

    /// Create a fresh identifier, greater than every one issued before it.
    ///
    /// # Panics
    /// Panics if the identifier space is exhausted.
    pub fn new() -> Self {
        match NEXT_ID.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1)) {
            Ok(id) => Entity(id),
            Err(last) => panic!("Entity id counter overflow at {last}"),
        }
    }

    /// Rebuild an identifier from its raw value. Does not touch the counter.
    pub const fn from_raw(id: u32) -> Self {
        Entity(id)
    }

    /// Raw identifier value
    pub const fn id(self) -> u32 {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<Entity> for u32 {
    fn from(entity: Entity) -> Self {
        entity.0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entities_are_increasing_and_non_null() {
        let a = Entity::new();
        let b = Entity::new();
        let c = Entity::new();

        assert!(!a.is_null());
        assert!(a < b && b < c);
        assert_ne!(a, b);
    }

    #[test]
    fn test_default_is_null() {
        assert_eq!(Entity::default(), Entity::NULL);
        assert!(Entity::default().is_null());
        assert_eq!(u32::from(Entity::NULL), 0);
    }

    #[test]
    fn test_from_raw_round_trips_value() {
        let e = Entity::from_raw(42);
        assert_eq!(e.id(), 42);
        assert_eq!(e.to_string(), "42");
    }
}
