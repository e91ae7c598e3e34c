//! Tree entities: items, containers, and multi-containers.
//!
//! A `Node` is the closed set of things that can appear in a container
//! hierarchy. Containers carry their own (empty) weight plus everything
//! nested inside them; capacity is consumed by total carried mass, not
//! just item payload. All accounting walks the live tree on every call,
//! so results always reflect the latest mutations.

use std::fmt;

use termtree::Tree;

/// Indentation unit for [`Node::render`], matching the display format:
/// three spaces per nesting level.
const INDENT: &str = "   ";

/// A leaf item with a name and weight. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub weight: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// A container with a fixed empty weight and a weight-capacity limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub name: String,
    /// Weight of the container itself, when empty
    pub weight: u32,
    /// Maximum total carried mass (see [`Container::used_capacity`])
    pub capacity: u32,
    /// Contents in insertion order
    pub children: Vec<Node>,
}

impl Container {
    /// Create an empty container. Every container gets its own freshly
    /// allocated child vector.
    pub fn new(name: impl Into<String>, weight: u32, capacity: u32) -> Self {
        Self {
            name: name.into(),
            weight,
            capacity,
            children: Vec::new(),
        }
    }

    /// Capacity consumed by the contents: items count their weight,
    /// nested containers count their full total weight.
    pub fn used_capacity(&self) -> u32 {
        self.children.iter().map(Node::load).sum()
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.used_capacity())
    }
}

/// A container whose children are fixed compartments, each a node with
/// its own capacity. Items are never stored directly in a multi-container;
/// they land in the first compartment with room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiContainer {
    pub name: String,
    /// Nominal, display-only capacity. Records carry none, so this stays 0;
    /// actual capacity is distributed across the compartments.
    pub capacity: u32,
    /// Compartments in declaration order
    pub compartments: Vec<Node>,
}

impl MultiContainer {
    pub fn new(name: impl Into<String>, compartments: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            capacity: 0,
            compartments,
        }
    }

    /// Effective empty weight: the sum of the compartments' own weights.
    pub fn empty_weight(&self) -> u32 {
        self.compartments.iter().map(Node::weight).sum()
    }
}

/// Any entity in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Item(Item),
    Container(Container),
    MultiContainer(MultiContainer),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Item(item) => &item.name,
            Node::Container(container) => &container.name,
            Node::MultiContainer(multi) => &multi.name,
        }
    }

    /// Own (empty) weight of this node, excluding contents.
    pub fn weight(&self) -> u32 {
        match self {
            Node::Item(item) => item.weight,
            Node::Container(container) => container.weight,
            Node::MultiContainer(multi) => multi.empty_weight(),
        }
    }

    /// Recursive total: own weight plus everything nested inside.
    pub fn total_weight(&self) -> u32 {
        match self {
            Node::Item(item) => item.weight,
            Node::Container(container) => {
                container.weight
                    + container
                        .children
                        .iter()
                        .map(Node::total_weight)
                        .sum::<u32>()
            }
            Node::MultiContainer(multi) => {
                multi.compartments.iter().map(Node::total_weight).sum()
            }
        }
    }

    /// Weight this node contributes against a parent container's capacity:
    /// items count their weight, containers count their total carried mass.
    pub fn load(&self) -> u32 {
        match self {
            Node::Item(item) => item.weight,
            _ => self.total_weight(),
        }
    }

    pub fn is_container(&self) -> bool {
        !matches!(self, Node::Item(_))
    }

    /// Full recursive display: one summary line per node, children one
    /// indent level deeper, in insertion order. Pure read.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(0, &mut out);
        out
    }

    fn render_into(&self, indent: usize, out: &mut String) {
        out.push_str(&INDENT.repeat(indent));
        out.push_str(&self.to_string());
        out.push('\n');
        for child in self.child_nodes() {
            child.render_into(indent + 1, out);
        }
    }

    fn child_nodes(&self) -> &[Node] {
        match self {
            Node::Item(_) => &[],
            Node::Container(container) => &container.children,
            Node::MultiContainer(multi) => &multi.compartments,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Item(item) => write!(f, "{} (weight: {})", item.name, item.weight),
            Node::Container(container) => write!(
                f,
                "{} (total weight: {}, empty weight: {}, capacity: {}/{})",
                container.name,
                self.total_weight(),
                container.weight,
                container.used_capacity(),
                container.capacity,
            ),
            // Capacity is distributed across compartments; the container-level
            // metric always reads 0/nominal.
            Node::MultiContainer(multi) => write!(
                f,
                "{} (total weight: {}, empty weight: {}, capacity: 0/{})",
                multi.name,
                self.total_weight(),
                multi.empty_weight(),
                multi.capacity,
            ),
        }
    }
}

pub trait NodeTreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl NodeTreeConvert for Node {
    fn to_tree_string(&self) -> Tree<String> {
        let root = self.to_string();

        let leaves: Vec<_> = self
            .child_nodes()
            .iter()
            .map(|c| c.to_tree_string())
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}
