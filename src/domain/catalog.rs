//! Catalog: build-once, read-only registry of master nodes.
//!
//! Masters are registered in processing order: plain items first, then
//! containers, then multi-containers. Multi-container compartments are
//! resolved against the registry *as populated so far*, so a record may
//! only reference names registered earlier; forward references fail
//! loudly instead of silently misresolving.

use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{Container, Item, MultiContainer, Node};
use crate::domain::session::Session;

/// Loader record for a plain item: `name,weight`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub name: String,
    pub weight: u32,
}

/// Loader record for a container: `name,weight,capacity`.
/// Containers have no children at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRecord {
    pub name: String,
    pub weight: u32,
    pub capacity: u32,
}

/// Loader record for a multi-container: a name plus the names of its
/// compartments, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiContainerRecord {
    pub name: String,
    pub compartments: Vec<String>,
}

/// The three record sets a catalog is built from.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub items: Vec<ItemRecord>,
    pub containers: Vec<ContainerRecord>,
    pub multi_containers: Vec<MultiContainerRecord>,
}

/// Immutable, name-indexed registry of master nodes.
///
/// The catalog exclusively owns its masters; callers get independent
/// deep copies via [`Catalog::clone_node`]. Lookup is first-match in
/// registration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Node>,
}

impl Catalog {
    /// Build a catalog from a record set.
    ///
    /// Fails with [`DomainError::DuplicateName`] if two records share a
    /// name, or [`DomainError::UnresolvedReference`] if a multi-container
    /// names a compartment that was not registered before it.
    #[instrument(level = "debug", skip(records))]
    pub fn build(records: RecordSet) -> DomainResult<Self> {
        let mut catalog = Self::default();

        for record in records.items {
            catalog.register(Node::Item(Item::new(record.name, record.weight)))?;
        }
        for record in records.containers {
            catalog.register(Node::Container(Container::new(
                record.name,
                record.weight,
                record.capacity,
            )))?;
        }
        for record in records.multi_containers {
            let mut compartments = Vec::with_capacity(record.compartments.len());
            for compartment_name in &record.compartments {
                let compartment = catalog.clone_node(compartment_name).map_err(|_| {
                    DomainError::UnresolvedReference {
                        multi: record.name.clone(),
                        compartment: compartment_name.clone(),
                    }
                })?;
                compartments.push(compartment);
            }
            catalog.register(Node::MultiContainer(MultiContainer::new(
                record.name,
                compartments,
            )))?;
        }

        Ok(catalog)
    }

    fn register(&mut self, node: Node) -> DomainResult<()> {
        if self.lookup(node.name()).is_ok() {
            return Err(DomainError::DuplicateName(node.name().to_string()));
        }
        self.entries.push(node);
        Ok(())
    }

    /// Look up a master by name (first match in registration order).
    pub fn lookup(&self, name: &str) -> DomainResult<&Node> {
        self.entries
            .iter()
            .find(|node| node.name() == name)
            .ok_or_else(|| DomainError::NotFound(name.to_string()))
    }

    /// Return a fully independent deep copy of the named master.
    /// No sub-node is shared with the catalog.
    pub fn clone_node(&self, name: &str) -> DomainResult<Node> {
        self.lookup(name).cloned()
    }

    /// Start a looting session rooted at a deep copy of the named master.
    pub fn start_session(&self, root_name: &str) -> DomainResult<Session<'_>> {
        Session::start(self, root_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of masters that are containers (multi-containers included).
    pub fn container_count(&self) -> usize {
        self.entries.iter().filter(|n| n.is_container()).count()
    }

    /// Iterate masters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.entries.iter()
    }
}
