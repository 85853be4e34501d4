//=========================================================================
// Table
//
// Shared handle to a key → node mapping.
//
// Tables have reference semantics: cloning a `Table` (or a
// `Node::Composite`) aliases the same storage, exactly like a table in a
// scripting host. This also means a host can build a table that contains
// itself. Traversals detect that case through `Table::ptr_eq`; nothing in
// this module recurses into children.
//
// Notes:
// Storing `Node::Absent` under a key removes the key, so a table never
// holds absent values.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

//=== Internal Imports ====================================================

use super::{Key, Node};

//=== Table ===============================================================

/// Shared, interior-mutable mapping from [`Key`] to [`Node`].
#[derive(Clone, Default)]
pub struct Table(Rc<RefCell<BTreeMap<Key, Node>>>);

impl Table {
    //--- Construction -----------------------------------------------------
    pub fn new() -> Self {
        Self::default()
    }

    //--- Mutation ---------------------------------------------------------

    /// Stores `value` under `key`. An absent value removes the key.
    pub fn set(&self, key: impl Into<Key>, value: impl Into<Node>) {
        let key = key.into();
        let value: Node = value.into();
        let mut entries = self.0.borrow_mut();
        match value {
            Node::Absent => {
                entries.remove(&key);
            }
            value => {
                entries.insert(key, value);
            }
        }
    }

    /// Appends `value` after the sequence border (see [`Table::border`]).
    pub fn push(&self, value: impl Into<Node>) {
        let next = self.border() + 1;
        self.set(next, value);
    }

    //--- Queries ----------------------------------------------------------

    /// Returns a clone of the value under `key`, or `Node::Absent`.
    ///
    /// Composite values are returned as aliases of the stored table.
    pub fn get(&self, key: &Key) -> Node {
        self.0.borrow().get(key).cloned().unwrap_or_default()
    }

    /// Borrows the entries in key order.
    ///
    /// # Panics
    ///
    /// Panics if the table is currently being mutated through `set`/`push`.
    pub fn entries(&self) -> Ref<'_, BTreeMap<Key, Node>> {
        self.0.borrow()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Length of the contiguous run of indices starting at 1.
    pub fn border(&self) -> i64 {
        let entries = self.0.borrow();
        let mut n = 0;
        while entries.contains_key(&Key::Index(n + 1)) {
            n += 1;
        }
        n
    }

    //--- Identity ---------------------------------------------------------

    /// Identity of the underlying storage, shared by all aliases.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }

    /// Returns `true` if both handles alias the same storage.
    pub fn ptr_eq(&self, other: &Table) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

//--- Trait Implementations -----------------------------------------------

/// Shallow formatting: a table may contain itself, so children are not
/// formatted here. Use the inspector to render contents.
impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Table(len={}, id={:#x})", self.len(), self.id())
    }
}

impl<K, V> FromIterator<(K, V)> for Table
where
    K: Into<Key>,
    V: Into<Node>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let table = Table::new();
        for (key, value) in iter {
            table.set(key, value);
        }
        table
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_absent_removes_the_key() {
        let table = Table::new();
        table.set("x", 1);
        assert_eq!(table.len(), 1);

        table.set("x", Node::Absent);
        assert!(table.is_empty());
        assert!(table.get(&Key::from("x")).is_absent());
    }

    #[test]
    fn push_appends_after_the_border() {
        let table = Table::new();
        table.push("A");
        table.push("B");
        table.set(5, "E");
        table.push("C");

        assert_eq!(table.border(), 3);
        let names: Vec<String> = table
            .entries()
            .values()
            .filter_map(|v| v.as_scalar().map(|s| s.to_string()))
            .collect();
        assert_eq!(names, vec!["A", "B", "C", "E"]);
    }

    #[test]
    fn clones_alias_the_same_storage() {
        let a = Table::new();
        let b = a.clone();
        b.set("shared", true);

        assert!(a.ptr_eq(&b));
        assert_eq!(a.id(), b.id());
        assert_eq!(a.len(), 1);
        assert!(!a.ptr_eq(&Table::new()));
    }

    #[test]
    fn debug_does_not_recurse_into_self_reference() {
        let table = Table::new();
        table.set("me", table.clone());
        let text = format!("{:?}", table);
        assert!(text.starts_with("Table(len=1"));
    }
}
