//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_inspector::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Facade
pub use crate::inspector::{Inspector, InspectorBuilder};

// Data model
pub use crate::core::node::{to_node, Key, Node, Scalar, Table};

// Configuration and errors
pub use crate::core::config::{EqualityMode, InspectorConfig};
pub use crate::core::error::InspectError;

// Output
pub use crate::core::sink::{ChannelSink, DumpSink, LogSink, WriterSink};

// Tracker
pub use crate::core::tracker::{InputTracker, KeyCode, KeyEvent, Rotator, UpdateHook};
