//=========================================================================
// Inspector
//
// Facade over the structural inspection operations.
//
// Architecture:
// ```text
//   InspectorBuilder ──build()──> Inspector ──dump()────> DumpSink
//         │                          │
//         ├─ with_indent()           ├─ equals() / structural_eq() / deep_eq()
//         ├─ with_max_depth()        └─ contains()
//         ├─ with_equality_mode()
//         └─ with_absent_marker()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::config::{EqualityMode, InspectorConfig};
use crate::core::error::Result;
use crate::core::inspect;
use crate::core::node::Node;
use crate::core::sink::{DumpSink, WriterSink};

//=== InspectorBuilder ====================================================

/// Builder for configuring and constructing an [`Inspector`].
///
/// # Default Values
///
/// - **Indent**: two spaces per level
/// - **Max depth**: 64 nesting levels
/// - **Equality**: [`EqualityMode::Containment`]
/// - **Absent marker**: none (an absent root dumps nothing)
///
/// # Examples
///
/// ```
/// use aetheric_inspector::{EqualityMode, InspectorBuilder, Node};
///
/// let inspector = InspectorBuilder::new()
///     .with_indent("\t")
///     .with_max_depth(16)
///     .with_equality_mode(EqualityMode::Symmetric)
///     .with_absent_marker("nil")
///     .build();
///
/// assert_eq!(inspector.dump_to_string(&Node::Absent).unwrap(), "nil\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InspectorBuilder {
    config: InspectorConfig,
}

impl InspectorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration, e.g. one loaded from TOML.
    pub fn from_config(config: InspectorConfig) -> Self {
        Self { config }
    }

    /// Sets the text repeated once per indentation level.
    ///
    /// Default: two spaces
    ///
    /// # Panics
    ///
    /// Panics if `indent` contains a line break.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        let indent = indent.into();
        assert!(
            !indent.contains(['\n', '\r']),
            "Indent must not contain line breaks, got {:?}",
            indent
        );
        self.config.indent = indent;
        self
    }

    /// Sets the deepest nesting level a traversal may reach.
    ///
    /// Default: 64
    ///
    /// # Panics
    ///
    /// Panics if `max_depth == 0`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        assert!(max_depth > 0, "Max depth must be positive");
        self.config.max_depth = max_depth;
        self
    }

    /// Sets the equality used by [`Inspector::equals`] and
    /// [`Inspector::contains`].
    pub fn with_equality_mode(mut self, mode: EqualityMode) -> Self {
        self.config.equality = mode;
        self
    }

    /// Sets the line emitted when an absent root is dumped.
    ///
    /// # Panics
    ///
    /// Panics if `marker` contains a line break.
    pub fn with_absent_marker(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        assert!(
            !marker.contains(['\n', '\r']),
            "Absent marker must be a single line, got {:?}",
            marker
        );
        self.config.absent_marker = Some(marker);
        self
    }

    /// Builds the inspector.
    pub fn build(self) -> Inspector {
        debug!(
            target: "inspector",
            "Building inspector (indent: {:?}, max depth: {}, equality: {:?})",
            self.config.indent,
            self.config.max_depth,
            self.config.equality
        );
        Inspector {
            config: self.config,
        }
    }
}

//=== Inspector ===========================================================

/// Structural inspector for [`Node`] trees.
///
/// Holds an [`InspectorConfig`] and applies it to every operation.
///
/// # Examples
///
/// ```
/// use aetheric_inspector::{Inspector, Node, Table};
///
/// let keys = Node::sequence(["W", "Space"]);
/// let state = Table::new();
/// state.set("fps", 60.0);
/// state.set("keys", keys.clone());
///
/// let inspector = Inspector::new();
/// assert_eq!(
///     inspector.dump_to_string(&state.into()).unwrap(),
///     "fps: 60.0\nkeys: \n  1: W\n  2: Space\n"
/// );
/// assert!(inspector.contains(&keys, &Node::from("Space")).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    config: InspectorConfig,
}

impl Inspector {
    /// Creates an inspector with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> InspectorBuilder {
        InspectorBuilder::new()
    }

    /// Creates an inspector from a TOML configuration document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config = InspectorConfig::from_toml_str(text)?;
        Ok(InspectorBuilder::from_config(config).build())
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    //--- Dump -------------------------------------------------------------

    /// Writes `node` to `sink` at indentation level `indent`.
    ///
    /// Returns the number of lines written.
    pub fn dump<S>(&self, node: &Node, indent: usize, sink: &mut S) -> Result<usize>
    where
        S: DumpSink + ?Sized,
    {
        inspect::dump(node, indent, sink, &self.config)
    }

    /// Renders `node` as newline-terminated lines.
    pub fn dump_to_string(&self, node: &Node) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();
        self.dump(node, 0, &mut lines)?;

        let mut text = String::new();
        for line in &lines {
            text.push_str(line);
            text.push('\n');
        }
        Ok(text)
    }

    /// Dumps `node` to standard output.
    pub fn print(&self, node: &Node) -> Result<usize> {
        let mut sink = WriterSink::stdout();
        let lines = self.dump(node, 0, &mut sink)?;
        sink.into_inner()?;
        Ok(lines)
    }

    //--- Equality ---------------------------------------------------------

    /// Compares with the configured [`EqualityMode`].
    pub fn equals(&self, a: &Node, b: &Node) -> Result<bool> {
        inspect::equals(a, b, self.config.equality, self.config.max_depth)
    }

    /// One-sided containment equality, regardless of the configured mode.
    pub fn structural_eq(&self, a: &Node, b: &Node) -> Result<bool> {
        inspect::structural_eq(a, b, self.config.max_depth)
    }

    /// Symmetric equality, regardless of the configured mode.
    pub fn deep_eq(&self, a: &Node, b: &Node) -> Result<bool> {
        inspect::deep_eq(a, b, self.config.max_depth)
    }

    //--- Membership -------------------------------------------------------

    /// Returns `true` if some value of `collection` equals `value` under
    /// the configured [`EqualityMode`].
    pub fn contains(&self, collection: &Node, value: &Node) -> Result<bool> {
        inspect::contains(collection, value, self.config.equality, self.config.max_depth)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
