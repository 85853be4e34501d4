//=========================================================================
// Node Model
//
// Tree-shaped, dynamically-typed values as handed over by a scripting host.
//
// Architecture:
// ```text
//   Node
//    ├─ Absent                 (missing value, "nil")
//    ├─ Terminal(Scalar)       (string / number / boolean)
//    └─ Composite(Table)       (shared Key → Node mapping)
// ```
//
// All traversal logic dispatches on the `Node` tag; nothing inspects
// runtime types.
//
//=========================================================================

//=== Submodules ==========================================================

mod key;
mod scalar;
pub(crate) mod ser;
mod table;

//=== Public API ==========================================================

pub use key::Key;
pub use scalar::Scalar;
pub(crate) use scalar::float_to_index;
pub use ser::{to_node, NodeSerializer};
pub use table::Table;

//=== Node ================================================================

/// A value in an inspected tree.
#[derive(Debug, Clone, Default)]
pub enum Node {
    /// The distinguished "nothing" produced by missing lookups.
    #[default]
    Absent,

    /// A leaf scalar.
    Terminal(Scalar),

    /// A mapping to further nodes.
    Composite(Table),
}

impl Node {
    //--- Construction -----------------------------------------------------

    /// Creates a new, empty composite.
    pub fn composite() -> Self {
        Self::Composite(Table::new())
    }

    /// Builds a composite whose values are indexed `1..=n`.
    pub fn sequence<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Node>,
    {
        let table = Table::new();
        for value in values {
            table.push(value);
        }
        Self::Composite(table)
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(_))
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Terminal(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Composite(table) => Some(table),
            _ => None,
        }
    }

    /// Looks up `key`; anything that is not a composite yields `Absent`.
    pub fn lookup(&self, key: &Key) -> Node {
        match self {
            Self::Composite(table) => table.get(key),
            _ => Node::Absent,
        }
    }

    /// Script-facing type name (`nil`, `string`, `number`, `boolean`, `table`).
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Absent => "nil",
            Self::Terminal(scalar) => scalar.type_name(),
            Self::Composite(_) => "table",
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Self::Terminal(value)
    }
}

impl From<Table> for Node {
    fn from(value: Table) -> Self {
        Self::Composite(value)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

macro_rules! terminal_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Self::Terminal(Scalar::from(value))
                }
            }
        )*
    };
}

terminal_from!(&str, String, i64, i32, u32, f64, f32, bool);

//=========================================================================
// Unit Tests
//=========================================================================
