//! Domain layer: the container/looting core
//!
//! This layer is independent of external concerns (no I/O, no CLI, no
//! config loading). Every failure is a typed error value; nothing here
//! prints or retries.

pub mod allocator;
pub mod catalog;
pub mod error;
pub mod node;
pub mod session;

pub use allocator::place;
pub use catalog::{Catalog, ContainerRecord, ItemRecord, MultiContainerRecord, RecordSet};
pub use error::{DomainError, DomainResult};
pub use node::{Container, Item, MultiContainer, Node, NodeTreeConvert};
pub use session::Session;
