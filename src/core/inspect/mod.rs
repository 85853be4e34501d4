//=========================================================================
// Structural Inspector
//
// Read-only traversals over `Node` trees.
//
// Operations:
// - `dump`           indented text, one line per key/value pair
// - `structural_eq`  one-sided containment equality
// - `deep_eq`        symmetric structural equality
// - `contains`       membership over the values of a composite
//
// Traversal Guard:
// ```text
//   root ─descend(k1)→ t1 ─descend(k2)→ t2 ...
//           │                  │
//           ├─ table already on path?  → CycleDetected { "k1.k2" }
//           └─ depth > max_depth?      → DepthExceeded { max_depth }
// ```
// Only the current path is tracked, so aliased (acyclic) sub-tables are
// walked once per path and never reported as cycles.
//
//=========================================================================

//=== Submodules ==========================================================

mod dump;
mod equality;
mod membership;

//=== External Crates =====================================================

use log::trace;

//=== Internal Imports ====================================================

use crate::core::config::EqualityMode;
use crate::core::error::{InspectError, Result};
use crate::core::node::{Key, Node, Table};

//=== Public API ==========================================================

pub use dump::dump;
pub use equality::{deep_eq, structural_eq};
pub use membership::contains;

/// Compares `a` and `b` with the given equality mode.
pub fn equals(a: &Node, b: &Node, mode: EqualityMode, max_depth: usize) -> Result<bool> {
    match mode {
        EqualityMode::Containment => structural_eq(a, b, max_depth),
        EqualityMode::Symmetric => deep_eq(a, b, max_depth),
    }
}

//=== PathGuard ===========================================================

/// Tracks the tables and keys on the current traversal path.
///
/// Holds a handle to every table on the path, so identities cannot be
/// recycled while the path is live.
pub(crate) struct PathGuard {
    max_depth: usize,
    tables: Vec<Table>,
    keys: Vec<Key>,
}

impl PathGuard {
    /// Starts a path at `root`.
    pub(crate) fn new(root: &Node, max_depth: usize) -> Self {
        let mut tables = Vec::with_capacity(max_depth.min(32) + 1);
        if let Node::Composite(table) = root {
            tables.push(table.clone());
        }
        Self {
            max_depth,
            tables,
            keys: Vec::new(),
        }
    }

    /// Steps into `table`, reached through `key`.
    pub(crate) fn descend(&mut self, key: &Key, table: &Table) -> Result<()> {
        if self.tables.iter().any(|on_path| on_path.ptr_eq(table)) {
            return Err(InspectError::CycleDetected {
                path: self.path_through(key),
            });
        }
        if self.keys.len() >= self.max_depth {
            return Err(InspectError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        self.tables.push(table.clone());
        self.keys.push(key.clone());
        trace!(target: "inspector", "descend into `{}` (depth {})", key, self.keys.len());
        Ok(())
    }

    /// Steps back out of the most recent `descend`.
    pub(crate) fn ascend(&mut self) {
        self.tables.pop();
        self.keys.pop();
    }

    fn path_through(&self, key: &Key) -> String {
        self.keys
            .iter()
            .chain(std::iter::once(key))
            .map(Key::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_reports_cycles_with_their_path() {
        let root = Table::new();
        let child = Table::new();
        root.set("child", child.clone());
        child.set("back", root.clone());

        let root_node = Node::from(root.clone());
        let mut guard = PathGuard::new(&root_node, 8);
        guard.descend(&Key::from("child"), &child).unwrap();

        match guard.descend(&Key::from("back"), &root) {
            Err(InspectError::CycleDetected { path }) => assert_eq!(path, "child.back"),
            other => panic!("expected cycle, got {:?}", other),
        }
    }

    #[test]
    fn guard_enforces_depth_budget() {
        let root = Node::composite();
        let (a, b) = (Table::new(), Table::new());
        let mut guard = PathGuard::new(&root, 1);
        guard.descend(&Key::from("a"), &a).unwrap();
        assert!(matches!(
            guard.descend(&Key::from("b"), &b),
            Err(InspectError::DepthExceeded { limit: 1 })
        ));
    }

    #[test]
    fn guard_keeps_path_tables_alive() {
        let root = Node::composite();
        let mut guard = PathGuard::new(&root, 4);

        // The only handle to the first table is dropped after descending;
        // a fresh table must not be mistaken for it.
        guard.descend(&Key::from("a"), &Table::new()).unwrap();
        let fresh = Table::new();
        assert!(guard.descend(&Key::from("b"), &fresh).is_ok());
    }

    #[test]
    fn ascend_allows_revisiting_aliases() {
        let shared = Table::new();
        let root = Node::composite();
        let mut guard = PathGuard::new(&root, 4);

        guard.descend(&Key::from("left"), &shared).unwrap();
        guard.ascend();
        assert!(guard.descend(&Key::from("right"), &shared).is_ok());
    }

    #[test]
    fn equals_dispatches_on_mode() {
        let a = Node::from(Table::from_iter([("x", 1)]));
        let b = Node::from(Table::from_iter([("x", 1), ("y", 2)]));

        assert!(equals(&a, &b, EqualityMode::Containment, 8).unwrap());
        assert!(!equals(&a, &b, EqualityMode::Symmetric, 8).unwrap());
    }
}
