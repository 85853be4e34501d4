//=========================================================================
// Table Keys
//=========================================================================
//
// A key is either an ordinal index or a name. Ordering puts indices first
// (numerically) and names after (lexicographically), which fixes the
// display order of dumps.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Key =================================================================

/// Key of a composite entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Ordinal position (1-based for sequences).
    Index(i64),

    /// Named field.
    Name(String),
}

impl Key {
    /// Returns the index payload, if any.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Name(_) => None,
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{}", i),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Index(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Self::Index(value.into())
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Self::Index(value.into())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
