//! Convenient re-exports of commonly used types.
//!
//! The prelude can be imported with:
//! ```
//! use tiny_ecs::prelude::*;
//! ```

pub use crate::component::Component;
pub use crate::container::{ComponentContainer, ErasedContainer};
pub use crate::debug::RegistryInspector;
pub use crate::entity::Entity;
pub use crate::error::{EcsError, Result};
pub use crate::registry::ContainerRegistry;
