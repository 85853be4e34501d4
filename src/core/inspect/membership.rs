//=========================================================================
// Membership
//=========================================================================
//
// Treats a composite as an unordered collection of its values.
//
//=========================================================================

//=== Internal Imports ====================================================

use super::equals;
use crate::core::config::EqualityMode;
use crate::core::error::Result;
use crate::core::node::Node;

//=== Public API ==========================================================

/// Returns `true` if some value of `collection` equals `value`.
///
/// A non-composite collection contains nothing. Keys are ignored; only
/// values take part in the comparison, each checked with `mode`.
pub fn contains(
    collection: &Node,
    value: &Node,
    mode: EqualityMode,
    max_depth: usize,
) -> Result<bool> {
    let Some(table) = collection.as_table() else {
        return Ok(false);
    };

    for candidate in table.entries().values() {
        if equals(candidate, value, mode, max_depth)? {
            return Ok(true);
        }
    }
    Ok(false)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::InspectError;
    use crate::core::node::Table;

    //--- Test Helpers -----------------------------------------------------

    const DEPTH: usize = 64;

    fn flags() -> Node {
        Node::sequence(["A", "B", "C"])
    }

    fn has(collection: &Node, value: impl Into<Node>) -> bool {
        contains(collection, &value.into(), EqualityMode::Containment, DEPTH).unwrap()
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn finds_present_markers() {
        assert!(has(&flags(), "B"));
        assert!(!has(&flags(), "Z"));
    }

    #[test]
    fn empty_collection_contains_nothing() {
        assert!(!has(&Node::composite(), "A"));
        assert!(!has(&Node::composite(), Node::composite()));
    }

    #[test]
    fn non_composite_collection_contains_nothing() {
        assert!(!has(&Node::from("A"), "A"));
        assert!(!has(&Node::Absent, Node::Absent));
    }

    #[test]
    fn named_entries_count_as_values() {
        let collection = Node::from(Table::from_iter([("jump", "Space"), ("fire", "F")]));
        assert!(has(&collection, "F"));
        assert!(!has(&collection, "fire"));
    }

    #[test]
    fn composite_members_follow_the_equality_mode() {
        let member = Node::from(Table::from_iter([("x", 1), ("y", 2)]));
        let collection = Node::sequence([member]);
        let probe = Node::from(Table::from_iter([("x", 1), ("y", 2), ("z", 3)]));

        // Member {x, y} is contained in probe {x, y, z}.
        assert!(contains(&collection, &probe, EqualityMode::Containment, DEPTH).unwrap());
        assert!(!contains(&collection, &probe, EqualityMode::Symmetric, DEPTH).unwrap());
    }

    #[test]
    fn numeric_members_match_across_representations() {
        let collection = Node::sequence([1, 2, 3]);
        assert!(has(&collection, 2.0));
    }

    #[test]
    fn self_containing_collection_is_a_cycle() {
        let table = Table::new();
        table.push(table.clone());
        let looped = Node::from(table);

        assert!(matches!(
            contains(&looped, &Node::from("x"), EqualityMode::Containment, DEPTH),
            Err(InspectError::CycleDetected { .. })
        ));
    }
}
