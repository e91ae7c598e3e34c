//! Tests for first-fit placement

use rstest::rstest;

use lootbox::domain::{place, Container, DomainError, Item, MultiContainer, Node};
use lootbox::util::testing;

fn item(name: &str, weight: u32) -> Node {
    Node::Item(Item::new(name, weight))
}

fn compartment(name: &str, capacity: u32) -> Node {
    Node::Container(Container::new(name, 0, capacity))
}

#[test]
fn given_satchel_when_looting_gems_then_capacity_enforced() {
    testing::init_test_setup();
    // Arrange: Satchel(weight=1, capacity=5), Gem(weight=2)
    let mut satchel = Node::Container(Container::new("Satchel", 1, 5));

    // Act / Assert
    place(&mut satchel, item("Gem", 2)).unwrap();
    assert_eq!(satchel.total_weight(), 3);

    let result = place(&mut satchel, item("Ingot", 4));
    assert!(matches!(
        result.unwrap_err(),
        DomainError::OutOfCapacity { .. }
    ));
    assert_eq!(satchel.total_weight(), 3);
}

#[test]
fn given_belt_with_two_pouches_when_looting_three_then_third_fails() {
    testing::init_test_setup();
    // Arrange: Belt with compartments Pouch(cap=2), Pouch2(cap=2)
    let mut belt = Node::MultiContainer(MultiContainer::new(
        "Belt",
        vec![compartment("Pouch", 2), compartment("Pouch2", 2)],
    ));

    // Act: two weight-2 items land one per compartment
    place(&mut belt, item("Gem", 2)).unwrap();
    place(&mut belt, item("Gem", 2)).unwrap();

    // Assert
    if let Node::MultiContainer(multi) = &belt {
        assert_eq!(multi.compartments[0].total_weight(), 2);
        assert_eq!(multi.compartments[1].total_weight(), 2);
    } else {
        panic!("Belt should be a multi-container");
    }

    let result = place(&mut belt, item("Pebble", 1));
    assert!(matches!(
        result.unwrap_err(),
        DomainError::OutOfCapacity { target, item } if target == "Belt" && item == "Pebble"
    ));
}

#[test]
fn given_full_first_compartment_when_placing_then_skips_to_second() {
    testing::init_test_setup();
    // Arrange: A(cap=5, used=5), B(cap=10, used=0)
    let mut full = Container::new("A", 0, 5);
    full.children.push(item("Brick", 5));
    let mut belt = Node::MultiContainer(MultiContainer::new(
        "Belt",
        vec![Node::Container(full), compartment("B", 10)],
    ));

    // Act
    place(&mut belt, item("Gem", 3)).unwrap();

    // Assert: skipped full A, continued to B
    if let Node::MultiContainer(multi) = &belt {
        assert_eq!(multi.compartments[0].total_weight(), 5);
        assert_eq!(multi.compartments[1].total_weight(), 3);
    } else {
        panic!("Belt should be a multi-container");
    }
}

#[test]
fn given_both_compartments_eligible_when_placing_then_first_not_best_fit() {
    testing::init_test_setup();
    // Arrange: both A(cap=5) and B(cap=10) can fit the item
    let mut belt = Node::MultiContainer(MultiContainer::new(
        "Belt",
        vec![compartment("A", 5), compartment("B", 10)],
    ));

    // Act
    place(&mut belt, item("Gem", 3)).unwrap();

    // Assert: first in stored order wins
    if let Node::MultiContainer(multi) = &belt {
        assert_eq!(multi.compartments[0].total_weight(), 3);
        assert_eq!(multi.compartments[1].total_weight(), 0);
    } else {
        panic!("Belt should be a multi-container");
    }
}

#[test]
fn given_all_compartments_full_when_placing_then_no_compartment_mutated() {
    testing::init_test_setup();
    // Arrange
    let mut belt = Node::MultiContainer(MultiContainer::new(
        "Belt",
        vec![compartment("A", 1), compartment("B", 1)],
    ));
    let before = belt.clone();

    // Act
    let result = place(&mut belt, item("Anvil", 50));

    // Assert
    assert!(result.is_err());
    assert_eq!(belt, before);
}

#[test]
fn given_multi_inside_multi_when_placing_then_induction_holds() {
    testing::init_test_setup();
    // Arrange: Outer -> [full pocket, Inner -> [pocket(cap=4)]]
    let mut full = Container::new("FullPocket", 0, 1);
    full.children.push(item("Pebble", 1));
    let inner = MultiContainer::new("Inner", vec![compartment("Pocket", 4)]);
    let mut outer = Node::MultiContainer(MultiContainer::new(
        "Outer",
        vec![Node::Container(full), Node::MultiContainer(inner)],
    ));

    // Act
    place(&mut outer, item("Gem", 3)).unwrap();

    // Assert
    assert_eq!(outer.total_weight(), 4);
}

#[rstest]
#[case(0, true)]
#[case(5, true)]
#[case(6, false)]
fn given_capacity_boundary_when_placing_then_exact_fit_allowed(
    #[case] weight: u32,
    #[case] fits: bool,
) {
    testing::init_test_setup();
    let mut chest = Node::Container(Container::new("Chest", 2, 5));

    let result = place(&mut chest, item("Load", weight));

    assert_eq!(result.is_ok(), fits);
}

#[test]
fn given_successful_places_then_used_capacity_never_exceeds_capacity() {
    testing::init_test_setup();
    // Arrange
    let mut chest = Node::Container(Container::new("Chest", 2, 7));

    // Act: keep placing until rejected
    let mut rejected = false;
    for i in 0..10 {
        if place(&mut chest, item(&format!("Coin{}", i), 2)).is_err() {
            rejected = true;
            break;
        }
        if let Node::Container(c) = &chest {
            assert!(c.used_capacity() <= c.capacity);
        }
    }

    // Assert
    assert!(rejected);
    if let Node::Container(c) = &chest {
        assert_eq!(c.used_capacity(), 6);
    }
}
