//=========================================================================
// Aetheric Inspector — Library Root
//
// Structural inspection of script-style value trees.
//
// Responsibilities:
// - Model dynamically typed values as `Node` trees
// - Dump them as indented text, compare them, test membership
// - Track per-frame host state (held keys, FPS) as an inspectable Node
//
// Typical usage:
// ```
// use aetheric_inspector::{Inspector, Node};
//
// let inspector = Inspector::new();
// let flags = Node::sequence(["A", "B"]);
// inspector.print(&flags).unwrap();
// assert!(inspector.contains(&flags, &Node::from("B")).unwrap());
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the data model, traversals, sinks and the tracker. Most
// callers only need the top-level re-exports below.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `inspector` defines the facade and its builder.
//
mod inspector;

//--- Public Exports ------------------------------------------------------

pub use crate::core::config::{EqualityMode, InspectorConfig};
pub use crate::core::error::{InspectError, Result};
pub use crate::core::node::{to_node, Key, Node, Scalar, Table};
pub use inspector::{Inspector, InspectorBuilder};
