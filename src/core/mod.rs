//=========================================================================
// Core
//
// Building blocks behind the `Inspector` facade.
//
// Layout:
// ```text
//   node     Node / Scalar / Key / Table, serde → Node
//   inspect  dump, structural_eq, deep_eq, contains (+ traversal guard)
//   sink     where dump lines go
//   tracker  per-frame host state and update hooks
//   config   InspectorConfig (TOML)
//   error    InspectError
// ```
//
//=========================================================================

pub mod config;
pub mod error;
pub mod inspect;
pub mod node;
pub mod sink;
pub mod tracker;
