//=========================================================================
// Structural Equality
//=========================================================================
//
// Two flavours:
//
//   structural_eq(a, b)   every key of `a` maps to an equal value in `b`;
//                         keys only present in `b` are ignored
//   deep_eq(a, b)         same key sets on both sides, values deep-equal
//
// Missing entries compare as `Absent`, which equals nothing but `Absent`.
// Recursion follows the left operand; the guard watches the left side
// for cycles.
//
//=========================================================================

//=== Internal Imports ====================================================

use super::PathGuard;
use crate::core::error::Result;
use crate::core::node::{Node, Table};

//=== Public API ==========================================================

/// One-sided containment equality.
///
/// Reflexive for acyclic trees without NaN terminals: NaN never equals
/// itself, so a tree holding one is not equal to itself.
///
/// A composite `a` compared against a non-composite `b` looks up every key
/// in `b` as `Absent`, so it is equal only when `a` is empty.
pub fn structural_eq(a: &Node, b: &Node, max_depth: usize) -> Result<bool> {
    let mut guard = PathGuard::new(a, max_depth);
    contained(a, b, &mut guard)
}

/// Symmetric structural equality.
pub fn deep_eq(a: &Node, b: &Node, max_depth: usize) -> Result<bool> {
    let mut guard = PathGuard::new(a, max_depth);
    symmetric(a, b, &mut guard)
}

//--- Internal Helpers ----------------------------------------------------

fn contained(a: &Node, b: &Node, guard: &mut PathGuard) -> Result<bool> {
    let Node::Composite(left) = a else {
        return Ok(same_value(a, b));
    };

    let absent = Node::Absent;
    let right = b.as_table().map(Table::entries);

    for (key, va) in left.entries().iter() {
        let vb = right
            .as_ref()
            .and_then(|entries| entries.get(key))
            .unwrap_or(&absent);

        let equal = match va {
            Node::Composite(child) => {
                guard.descend(key, child)?;
                let equal = contained(va, vb, guard)?;
                guard.ascend();
                equal
            }
            _ => same_value(va, vb),
        };

        if !equal {
            return Ok(false);
        }
    }
    Ok(true)
}

fn symmetric(a: &Node, b: &Node, guard: &mut PathGuard) -> Result<bool> {
    match (a, b) {
        (Node::Composite(left), Node::Composite(right)) => {
            let left_entries = left.entries();
            let right_entries = right.entries();
            if left_entries.len() != right_entries.len() {
                return Ok(false);
            }

            for (key, va) in left_entries.iter() {
                let Some(vb) = right_entries.get(key) else {
                    return Ok(false);
                };

                let equal = match va {
                    Node::Composite(child) => {
                        guard.descend(key, child)?;
                        let equal = symmetric(va, vb, guard)?;
                        guard.ascend();
                        equal
                    }
                    _ => same_value(va, vb),
                };

                if !equal {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        (Node::Composite(_), _) | (_, Node::Composite(_)) => Ok(false),
        _ => Ok(same_value(a, b)),
    }
}

/// Value identity for non-composite operands; a composite on either side
/// never matches.
fn same_value(a: &Node, b: &Node) -> bool {
    match (a, b) {
        (Node::Absent, Node::Absent) => true,
        (Node::Terminal(x), Node::Terminal(y)) => x == y,
        _ => false,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
