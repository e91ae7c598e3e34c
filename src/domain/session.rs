//! Looting session: an independent working tree cloned from the catalog.

use tracing::{debug, instrument};

use crate::domain::allocator;
use crate::domain::catalog::Catalog;
use crate::domain::error::DomainResult;
use crate::domain::node::Node;

/// A session owns exactly one working tree, deep-cloned from a catalog
/// master at start. Placements mutate only the working tree; the catalog
/// is never touched after the initial clone.
#[derive(Debug)]
pub struct Session<'a> {
    catalog: &'a Catalog,
    root: Node,
}

impl<'a> Session<'a> {
    /// Start a session rooted at a deep copy of the named master.
    /// Fails with `NotFound` if the name is absent from the catalog.
    #[instrument(level = "debug", skip(catalog))]
    pub fn start(catalog: &'a Catalog, root_name: &str) -> DomainResult<Self> {
        let root = catalog.clone_node(root_name)?;
        Ok(Self { catalog, root })
    }

    /// Clone the named record from the catalog and place it into the
    /// working tree. On `OutOfCapacity` the clone is discarded and the
    /// tree is unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn loot(&mut self, item_name: &str) -> DomainResult<()> {
        let loot = self.catalog.clone_node(item_name)?;
        allocator::place(&mut self.root, loot)?;
        debug!("looted \"{}\" into \"{}\"", item_name, self.root.name());
        Ok(())
    }

    /// Full recursive display of the working tree.
    pub fn render(&self) -> String {
        self.root.render()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_name(&self) -> &str {
        self.root.name()
    }
}
