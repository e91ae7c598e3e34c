//! First-fit placement over a working tree.
//!
//! Plain containers accept a node when its load fits the remaining
//! capacity. Multi-containers offer the node to their compartments in
//! stored order and stop at the first that accepts; the first eligible
//! compartment always wins (deliberate, observable policy). Failure
//! never leaves a partial mutation behind.

use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::Node;

/// Place `loot` into `root`, mutating the tree on success.
///
/// Fails with [`DomainError::OutOfCapacity`] when no eligible location
/// has room; the tree is unchanged in that case.
#[instrument(level = "debug", skip(root, loot), fields(container = %root.name(), item = %loot.name()))]
pub fn place(root: &mut Node, loot: Node) -> DomainResult<()> {
    let target = root.name().to_string();
    match try_place(root, loot) {
        Ok(()) => Ok(()),
        Err(rejected) => Err(DomainError::OutOfCapacity {
            target,
            item: rejected.name().to_string(),
        }),
    }
}

/// Returns the rejected loot on failure so a multi-container can offer
/// it to the next compartment without cloning.
fn try_place(root: &mut Node, loot: Node) -> Result<(), Node> {
    match root {
        // An item has no room; compartments that are plain items are skipped.
        Node::Item(_) => Err(loot),
        Node::Container(container) => {
            if loot.load() <= container.remaining_capacity() {
                container.children.push(loot);
                Ok(())
            } else {
                Err(loot)
            }
        }
        Node::MultiContainer(multi) => {
            let mut loot = loot;
            for compartment in &mut multi.compartments {
                match try_place(compartment, loot) {
                    Ok(()) => return Ok(()),
                    Err(rejected) => loot = rejected,
                }
            }
            Err(loot)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::{Container, Item, MultiContainer};

    fn item(name: &str, weight: u32) -> Node {
        Node::Item(Item::new(name, weight))
    }

    #[test]
    fn given_fitting_item_when_placing_then_appended() {
        let mut satchel = Node::Container(Container::new("Satchel", 1, 5));

        place(&mut satchel, item("Gem", 2)).unwrap();

        assert_eq!(satchel.total_weight(), 3);
    }

    #[test]
    fn given_full_container_when_placing_then_unchanged() {
        let mut satchel = Node::Container(Container::new("Satchel", 1, 5));
        place(&mut satchel, item("Gem", 2)).unwrap();

        let result = place(&mut satchel, item("Ingot", 4));

        assert!(matches!(
            result.unwrap_err(),
            DomainError::OutOfCapacity { target, item } if target == "Satchel" && item == "Ingot"
        ));
        // no partial append
        assert_eq!(satchel.total_weight(), 3);
    }

    #[test]
    fn given_full_first_compartment_when_placing_then_continues_to_next() {
        let mut full = Container::new("A", 0, 5);
        full.children.push(item("Brick", 5));
        let mut belt = Node::MultiContainer(MultiContainer::new(
            "Belt",
            vec![
                Node::Container(full),
                Node::Container(Container::new("B", 0, 10)),
            ],
        ));

        place(&mut belt, item("Gem", 3)).unwrap();

        if let Node::MultiContainer(multi) = &belt {
            assert_eq!(multi.compartments[0].total_weight(), 5);
            assert_eq!(multi.compartments[1].total_weight(), 3);
        } else {
            unreachable!();
        }
    }

    #[test]
    fn given_two_eligible_compartments_when_placing_then_first_wins() {
        let mut belt = Node::MultiContainer(MultiContainer::new(
            "Belt",
            vec![
                Node::Container(Container::new("A", 0, 5)),
                Node::Container(Container::new("B", 0, 10)),
            ],
        ));

        place(&mut belt, item("Gem", 3)).unwrap();

        if let Node::MultiContainer(multi) = &belt {
            assert_eq!(multi.compartments[0].total_weight(), 3);
            assert_eq!(multi.compartments[1].total_weight(), 0);
        } else {
            unreachable!();
        }
    }

    #[test]
    fn given_nested_multi_container_when_placing_then_recurses() {
        let inner = MultiContainer::new(
            "Inner",
            vec![Node::Container(Container::new("Pocket", 0, 4))],
        );
        let mut outer = Node::MultiContainer(MultiContainer::new(
            "Outer",
            vec![Node::MultiContainer(inner)],
        ));

        place(&mut outer, item("Gem", 3)).unwrap();

        assert_eq!(outer.total_weight(), 3);
    }

    #[test]
    fn given_item_target_when_placing_then_out_of_capacity() {
        let mut rock = item("Rock", 7);

        let result = place(&mut rock, item("Gem", 1));

        assert!(matches!(
            result.unwrap_err(),
            DomainError::OutOfCapacity { .. }
        ));
    }

    #[test]
    fn given_container_loot_when_placing_then_counts_total_weight() {
        let mut chest = Node::Container(Container::new("Chest", 2, 6));
        let mut satchel = Container::new("Satchel", 1, 5);
        satchel.children.push(item("Gem", 2));

        // satchel loads 3 against the chest's capacity
        place(&mut chest, Node::Container(satchel)).unwrap();
        let result = place(&mut chest, item("Ingot", 4));

        assert!(result.is_err());
        assert_eq!(chest.total_weight(), 5);
    }
}
